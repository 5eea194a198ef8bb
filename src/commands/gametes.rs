use crate::cli::GametesArgs;
use crate::punnett::{expand_gametes, Genotype};
use crate::utils::{create_writer, Result};
use itertools::Itertools;
use std::io::{self, Write};

pub fn gametes(args: GametesArgs) -> Result<()> {
    let genotype = Genotype::from_string(args.genotype.trim())?;
    let mut writer = create_writer(None)?;
    write_gametes(&mut writer, &genotype, args.unique)
        .and_then(|_| writer.flush())
        .map_err(|e| format!("Failed to write gametes: {}", e))?;
    Ok(())
}

/// One gamete per line in expansion order; with `unique`, each distinct
/// gamete once (first-seen order) followed by its multiplicity.
fn write_gametes<W: Write>(out: &mut W, genotype: &Genotype, unique: bool) -> io::Result<()> {
    let gametes = expand_gametes(genotype);
    log::debug!("{} has {} gametes", genotype, gametes.len());

    if !unique {
        for gamete in &gametes {
            writeln!(out, "{}", gamete)?;
        }
        return Ok(());
    }

    let counts = gametes.iter().counts();
    for gamete in gametes.iter().unique() {
        writeln!(out, "{}\t{}", gamete, counts[gamete])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(encoding: &str, unique: bool) -> String {
        let genotype = Genotype::from_string(encoding).unwrap();
        let mut buf = Vec::new();
        write_gametes(&mut buf, &genotype, unique).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_all_gametes() {
        assert_eq!(render("SsYy", false), "SY\nSy\nsY\nsy\n");
    }

    #[test]
    fn collapses_repeated_gametes() {
        assert_eq!(render("SsYY", true), "SY\t2\nsY\t2\n");
        assert_eq!(render("SSYY", true), "SY\t4\n");
    }

    #[test]
    fn invalid_genotype_err() {
        let args = GametesArgs {
            genotype: "SsYz".to_string(),
            unique: false,
        };
        assert_eq!(
            gametes(args).unwrap_err(),
            "Invalid genotype input: allele pair Yz in SsYz mixes different genes"
        );
    }
}
