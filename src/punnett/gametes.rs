use crate::punnett::genotype::Genotype;
use itertools::Itertools;

/// Concatenates one element from every axis for each combination of the axes.
///
/// Combinations are produced in row-major order: the first axis varies
/// slowest and the last axis fastest, so the result can be reshaped into an
/// array whose shape is the list of axis lengths.
pub fn outer_product<S: AsRef<str>>(axes: &[&[S]]) -> Vec<String> {
    axes.iter()
        .map(|axis| axis.iter())
        .multi_cartesian_product()
        .map(|combination| {
            combination
                .into_iter()
                .map(|part| part.as_ref())
                .collect::<String>()
        })
        .collect()
}

/// All 2^n gametes of a parent, gene order preserved within each gamete.
///
/// Gamete `k` carries, for gene `i`, allele `(k >> (n - 1 - i)) & 1` of that
/// gene's pair: the first gene varies slowest. Homozygous genes yield
/// repeated gametes.
pub fn expand_gametes(genotype: &Genotype) -> Vec<String> {
    let alleles: Vec<[String; 2]> = genotype
        .pairs()
        .iter()
        .map(|pair| pair.alleles().map(String::from))
        .collect();
    let axes: Vec<&[String]> = alleles.iter().map(|pair| pair.as_slice()).collect();
    outer_product(&axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn outer_product_is_row_major() {
        let rows = ["A", "a"];
        let cols = ["B", "b", "X"];
        assert_eq!(
            outer_product(&[&rows[..], &cols[..]]),
            vec!["AB", "Ab", "AX", "aB", "ab", "aX"]
        );
    }

    #[test]
    fn outer_product_concatenates_multi_char_parts() {
        let first = ["SY".to_string(), "sy".to_string()];
        let second = ["Sy".to_string()];
        assert_eq!(
            outer_product(&[&first[..], &second[..]]),
            vec!["SYSy", "sySy"]
        );
    }

    #[test]
    fn expand_single_gene() {
        let genotype = Genotype::from_string("Aa").unwrap();
        assert_eq!(expand_gametes(&genotype), vec!["A", "a"]);
    }

    #[test]
    fn expand_two_genes_first_gene_slowest() {
        let genotype = Genotype::from_string("SsYy").unwrap();
        assert_eq!(expand_gametes(&genotype), vec!["SY", "Sy", "sY", "sy"]);
    }

    #[test]
    fn expand_homozygous_gene_repeats_gametes() {
        let genotype = Genotype::from_string("SSyy").unwrap();
        assert_eq!(expand_gametes(&genotype), vec!["Sy", "Sy", "Sy", "Sy"]);
    }

    #[test]
    fn expand_matches_bit_selection() {
        let genotype = Genotype::from_string("AaBbCcDd").unwrap();
        let n = genotype.num_genes();
        let gametes = expand_gametes(&genotype);
        assert_eq!(gametes.len(), 1 << n);
        for (k, gamete) in gametes.iter().enumerate() {
            let expected: String = genotype
                .pairs()
                .iter()
                .enumerate()
                .map(|(i, pair)| pair.alleles()[(k >> (n - 1 - i)) & 1])
                .collect();
            assert_eq!(gamete, &expected);
        }
    }

    #[test]
    fn expand_covers_cartesian_product() {
        for encoding in ["Aa", "AaBb", "AaBbCc", "AaBbCcDdEe"] {
            let genotype = Genotype::from_string(encoding).unwrap();
            let n = genotype.num_genes();
            let gametes = expand_gametes(&genotype);
            assert_eq!(gametes.len(), 1 << n);
            assert!(gametes.iter().all(|g| g.len() == n));
            let distinct: HashSet<&String> = gametes.iter().collect();
            assert_eq!(distinct.len(), 1 << n);
        }
    }
}
