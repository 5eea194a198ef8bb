use crate::cli::CrossArgs;
use crate::punnett::{parse_parents, write_report, PunnettSquare, ReportOptions};
use crate::utils::{create_writer, prompt_line, Result};
use std::io::{self, BufRead, Write};

/// Parents used when either genotype is left empty.
pub const DEFAULT_PARENTS: (&str, &str) = ("SsYyZz", "SsYyZz");

pub fn cross(args: CrossArgs) -> Result<()> {
    let (parent1, parent2) = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        resolve_parents(args.parent1, args.parent2, &mut input, &mut io::stderr())?
    };

    let parents = parse_parents(&parent1, &parent2)?;
    let square = PunnettSquare::new(&parents);
    log::info!(
        "{} x {}: {} offspring cells",
        parent1,
        parent2,
        square.num_cells()
    );

    let options = ReportOptions {
        show_grid: !args.no_grid,
        show_labels: args.labels,
        show_ratios: args.ratios,
    };
    let mut writer = create_writer(args.output_path.as_deref())?;
    write_report(&mut writer, &square, &options)
        .and_then(|_| writer.flush())
        .map_err(|e| format!("Failed to write report: {}", e))?;
    Ok(())
}

/// Prompts for any parent not given, then applies the defaults if either is empty.
fn resolve_parents<R: BufRead, W: Write>(
    parent1: Option<String>,
    parent2: Option<String>,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<(String, String)> {
    let parent1 = match parent1 {
        Some(p) => p,
        None => prompt_line("Parent 1 Genotype: ", input, prompt_out)?,
    };
    let parent2 = match parent2 {
        Some(p) => p,
        None => prompt_line("Parent 2 Genotype: ", input, prompt_out)?,
    };
    let (parent1, parent2) = (parent1.trim().to_string(), parent2.trim().to_string());

    if parent1.is_empty() || parent2.is_empty() {
        log::info!(
            "Empty parent genotype, using defaults {} x {}",
            DEFAULT_PARENTS.0,
            DEFAULT_PARENTS.1
        );
        return Ok((DEFAULT_PARENTS.0.to_string(), DEFAULT_PARENTS.1.to_string()));
    }
    Ok((parent1, parent2))
}
