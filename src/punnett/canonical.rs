use crate::punnett::genotype::Gene;
use itertools::Itertools;

/// Normalizes a raw offspring string (two gametes joined) into its canonical
/// genotype: each gene's alleles side by side with the dominant allele first,
/// and genes in the order given by `genes`.
///
/// Alleles are grouped by a stable case-insensitive sort, which relies on
/// distinct gene letters. Pairs whose letter is not in `genes` keep their
/// sorted position after the known genes.
pub fn canonicalize(raw: &str, genes: &[Gene]) -> String {
    let alleles: Vec<char> = raw
        .chars()
        .sorted_by_key(|allele| allele.to_ascii_lowercase())
        .collect();

    alleles
        .chunks(2)
        .map(|pair| pair.iter().copied().sorted().collect::<String>())
        .sorted_by_key(|pair| gene_position(pair, genes))
        .collect()
}

fn gene_position(pair: &str, genes: &[Gene]) -> usize {
    pair.chars()
        .next()
        .and_then(|allele| genes.iter().position(|gene| gene.matches(allele)))
        .unwrap_or(genes.len())
}
