use crate::punnett::{genotype::Gene, square::PunnettSquare};
use itertools::Itertools;
use std::{cmp::Ordering, hash::Hash};

/// Dominant (true) or recessive (false) expression per gene, in gene order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phenotype(Vec<bool>);

impl Phenotype {
    /// A gene is dominant when its canonical pair carries the upper-case allele.
    pub fn from_genotype(canonical: &str, genes: &[Gene]) -> Self {
        let alleles: Vec<char> = canonical.chars().collect();
        let bits = genes
            .iter()
            .zip(alleles.chunks(2))
            .map(|(gene, pair)| pair.contains(&gene.dominant()))
            .collect();
        Phenotype(bits)
    }

    pub fn is_dominant(&self, gene_index: usize) -> bool {
        self.0.get(gene_index).copied().unwrap_or(false)
    }

    /// Binary signature, e.g. `10` for dominant in the first gene only.
    pub fn signature(&self) -> String {
        self.0.iter().map(|&dom| if dom { '1' } else { '0' }).collect()
    }

    pub fn describe(&self, genes: &[Gene]) -> String {
        genes
            .iter()
            .zip(&self.0)
            .map(|(gene, &dom)| {
                let expression = if dom { "DOM" } else { "REC" };
                format!("{} in {}", expression, gene)
            })
            .join(", ")
    }

    /// Dominant sorts before recessive at the first differing gene.
    fn dominant_first(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// Distinct values with their counts, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown<K> {
    entries: Vec<(K, usize)>,
    total: usize,
}

impl<K: Eq + Hash> Breakdown<K> {
    fn tally<I, F>(values: I, tie_break: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&K, &K) -> Ordering,
    {
        let entries: Vec<(K, usize)> = values
            .into_iter()
            .counts()
            .into_iter()
            .sorted_by(|(a, count_a), (b, count_b)| {
                count_b.cmp(count_a).then_with(|| tie_break(a, b))
            })
            .collect();
        let total = entries.iter().map(|(_, count)| count).sum();
        Self { entries, total }
    }
}

impl<K> Breakdown<K> {
    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts in table order joined by `:`, e.g. `9:3:3:1`.
    pub fn ratio(&self) -> String {
        self.entries.iter().map(|(_, count)| count).join(":")
    }
}

/// Canonical genotypes by frequency; ties in ASCII order (`AA`, `Aa`, `aa`).
pub fn genotype_breakdown(square: &PunnettSquare) -> Breakdown<String> {
    Breakdown::tally(square.iter_cells().cloned(), |a: &String, b: &String| a.cmp(b))
}

/// Phenotype signatures by frequency; ties with dominant expression first.
pub fn phenotype_breakdown(square: &PunnettSquare) -> Breakdown<Phenotype> {
    let genes = square.genes();
    Breakdown::tally(
        square
            .iter_cells()
            .map(|cell| Phenotype::from_genotype(cell, genes)),
        Phenotype::dominant_first,
    )
}
