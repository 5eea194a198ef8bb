use clap::Parser;
use punnett::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{cross, gametes},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Cross(_) => "cross",
        Command::Gametes(_) => "gametes",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Cross(args) => cross::cross(args)?,
        Command::Gametes(args) => gametes::gametes(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
