use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="punnett",
          version=&**FULL_VERSION,
          about="Punnett square calculator for two-allele genes",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) {}     punnett contributors
This program comes with ABSOLUTELY NO WARRANTY; it is intended for
teaching use and assumes independent assortment of all genes.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Cross two parents and tabulate offspring genotypes and phenotypes")]
    Cross(CrossArgs),
    #[clap(about = "List the gametes of a single genotype")]
    Gametes(GametesArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("cross")))]
pub struct CrossArgs {
    #[clap(value_name = "PARENT1")]
    #[clap(help = "Genotype of parent 1, e.g. SsYy (prompted for when omitted)")]
    pub parent1: Option<String>,

    #[clap(value_name = "PARENT2")]
    #[clap(help = "Genotype of parent 2, e.g. SsYy (prompted for when omitted)")]
    pub parent2: Option<String>,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Write the report to this file instead of stdout")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: Option<PathBuf>,

    #[clap(help_heading("Report"))]
    #[clap(long = "no-grid")]
    #[clap(help = "Only print the breakdown tables")]
    pub no_grid: bool,

    #[clap(help_heading("Report"))]
    #[clap(short = 'l')]
    #[clap(long = "labels")]
    #[clap(help = "Label grid rows and columns with parent gametes")]
    pub labels: bool,

    #[clap(help_heading("Report"))]
    #[clap(short = 'r')]
    #[clap(long = "ratios")]
    #[clap(help = "Print the count ratio after each breakdown")]
    pub ratios: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("gametes")))]
#[command(arg_required_else_help(true))]
pub struct GametesArgs {
    #[clap(required = true)]
    #[clap(value_name = "GENOTYPE")]
    #[clap(help = "Genotype to expand, e.g. SsYy")]
    pub genotype: String,

    #[clap(short = 'u')]
    #[clap(long = "unique")]
    #[clap(help = "Collapse repeated gametes and show their counts")]
    pub unique: bool,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    if path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }
    Ok(path.to_path_buf())
}
