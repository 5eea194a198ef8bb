use crate::punnett::{
    square::PunnettSquare,
    tabulate::{genotype_breakdown, phenotype_breakdown, Breakdown, Phenotype},
};
use std::io::{self, Write};

const CELL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_ratios: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: false,
            show_ratios: false,
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    square: &PunnettSquare,
    options: &ReportOptions,
) -> io::Result<()> {
    if options.show_grid {
        write_grid(out, square, options.show_labels)?;
    }

    let genotypes = genotype_breakdown(square);
    write_genotype_breakdown(out, &genotypes)?;
    if options.show_ratios {
        write_ratio(out, &genotypes)?;
    }

    let phenotypes = phenotype_breakdown(square);
    write_phenotype_breakdown(out, square, &phenotypes)?;
    if options.show_ratios {
        write_ratio(out, &phenotypes)?;
    }
    Ok(())
}

/// Bordered grid of canonical genotypes; with `labels`, parent-2 gametes head
/// the columns and each row starts with its parent-1 gamete.
pub fn write_grid<W: Write>(out: &mut W, square: &PunnettSquare, labels: bool) -> io::Result<()> {
    let columns = square.col_gametes().len() + usize::from(labels);
    let separator = "-".repeat(columns * CELL_WIDTH + 1);

    writeln!(out, "{}", separator)?;
    if labels {
        write!(out, "|\t|")?;
        for gamete in square.col_gametes() {
            write!(out, "{}\t|", gamete)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", separator)?;
    }

    for (gamete, row) in square.row_gametes().iter().zip(square.rows()) {
        write!(out, "|")?;
        if labels {
            write!(out, "{}\t|", gamete)?;
        }
        for cell in row {
            write!(out, "{}\t|", cell)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", separator)?;
    }
    Ok(())
}

pub fn write_genotype_breakdown<W: Write>(
    out: &mut W,
    breakdown: &Breakdown<String>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Overall Genotype Breakdown:-----------------")?;
    for (genotype, count) in breakdown.entries() {
        writeln!(out, "{} \t {}", genotype, count)?;
    }
    Ok(())
}

pub fn write_phenotype_breakdown<W: Write>(
    out: &mut W,
    square: &PunnettSquare,
    breakdown: &Breakdown<Phenotype>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Overall Phenotype Breakdown:----------------")?;
    for (phenotype, count) in breakdown.entries() {
        writeln!(out, "{}: {}", phenotype.describe(square.genes()), count)?;
    }
    Ok(())
}

fn write_ratio<W: Write, K>(out: &mut W, breakdown: &Breakdown<K>) -> io::Result<()> {
    writeln!(
        out,
        "Ratio ({} offspring): {}",
        breakdown.total(),
        breakdown.ratio()
    )
}
