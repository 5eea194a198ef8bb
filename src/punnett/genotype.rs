use std::fmt;
use thiserror::Error;

/// Upper bound on genes per parent; the offspring grid holds 4^n cells.
pub const MAX_GENES: usize = 12;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenotypeError {
    #[error("Invalid genotype input: genotype is empty")]
    Empty,

    #[error("Invalid genotype input: {genotype} contains non-letter character '{ch}'")]
    NonLetter { genotype: String, ch: char },

    #[error("Invalid genotype input: {genotype} has odd length {len}")]
    OddLength { genotype: String, len: usize },

    #[error("Invalid genotype input: allele pair {pair} in {genotype} mixes different genes")]
    MixedPair { genotype: String, pair: String },

    #[error("Invalid genotype input: gene {gene} appears more than once in {genotype}")]
    RepeatedGene { genotype: String, gene: Gene },

    #[error("Invalid genotype input: {genotype} declares {count} genes, at most {max} are supported")]
    TooManyGenes {
        genotype: String,
        count: usize,
        max: usize,
    },

    #[error("Invalid genotype input: parents declare different numbers of genes ({first} vs {second})")]
    GeneCountMismatch { first: usize, second: usize },

    #[error("Invalid genotype input: parents disagree on gene {slot} ({first} vs {second})")]
    GeneMismatch {
        slot: usize,
        first: Gene,
        second: Gene,
    },
}

/// A locus identified by its letter, stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gene(char);

impl Gene {
    pub fn new(letter: char) -> Self {
        Gene(letter.to_ascii_uppercase())
    }

    pub fn dominant(&self) -> char {
        self.0
    }

    pub fn recessive(&self) -> char {
        self.0.to_ascii_lowercase()
    }

    pub fn matches(&self, allele: char) -> bool {
        self.0.eq_ignore_ascii_case(&allele)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Both alleles one parent carries at a gene, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllelePair {
    alleles: [char; 2],
}

impl AllelePair {
    pub fn gene(&self) -> Gene {
        Gene::new(self.alleles[0])
    }

    pub fn alleles(&self) -> [char; 2] {
        self.alleles
    }

    pub fn is_homozygous(&self) -> bool {
        self.alleles[0] == self.alleles[1]
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.alleles[0], self.alleles[1])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype {
    pairs: Vec<AllelePair>,
}

impl Genotype {
    /// Splits an encoding such as `SsYy` into allele pairs, keeping gene order.
    pub fn from_string(encoding: &str) -> Result<Self, GenotypeError> {
        if encoding.is_empty() {
            return Err(GenotypeError::Empty);
        }

        if let Some(ch) = encoding.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GenotypeError::NonLetter {
                genotype: encoding.to_string(),
                ch,
            });
        }

        // Only ASCII letters remain, so bytes and chars coincide
        let len = encoding.len();
        if len % 2 != 0 {
            return Err(GenotypeError::OddLength {
                genotype: encoding.to_string(),
                len,
            });
        }

        let count = len / 2;
        if count > MAX_GENES {
            return Err(GenotypeError::TooManyGenes {
                genotype: encoding.to_string(),
                count,
                max: MAX_GENES,
            });
        }

        let chars: Vec<char> = encoding.chars().collect();
        let mut pairs: Vec<AllelePair> = Vec::with_capacity(count);
        for chunk in chars.chunks(2) {
            let pair = AllelePair {
                alleles: [chunk[0], chunk[1]],
            };
            if !chunk[0].eq_ignore_ascii_case(&chunk[1]) {
                return Err(GenotypeError::MixedPair {
                    genotype: encoding.to_string(),
                    pair: pair.to_string(),
                });
            }
            if pairs.iter().any(|seen| seen.gene() == pair.gene()) {
                return Err(GenotypeError::RepeatedGene {
                    genotype: encoding.to_string(),
                    gene: pair.gene(),
                });
            }
            pairs.push(pair);
        }

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[AllelePair] {
        &self.pairs
    }

    pub fn genes(&self) -> Vec<Gene> {
        self.pairs.iter().map(AllelePair::gene).collect()
    }

    pub fn num_genes(&self) -> usize {
        self.pairs.len()
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}

/// Two validated parents sharing the same gene layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cross {
    pub genes: Vec<Gene>,
    pub first: Genotype,
    pub second: Genotype,
}

impl Cross {
    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    /// The same cross with the parents exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            genes: self.genes.clone(),
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

pub fn parse_parents(first: &str, second: &str) -> Result<Cross, GenotypeError> {
    let first = Genotype::from_string(first)?;
    let second = Genotype::from_string(second)?;

    if first.num_genes() != second.num_genes() {
        return Err(GenotypeError::GeneCountMismatch {
            first: first.num_genes(),
            second: second.num_genes(),
        });
    }

    let genes = first.genes();
    for (slot, (a, b)) in genes.iter().zip(second.genes()).enumerate() {
        if *a != b {
            return Err(GenotypeError::GeneMismatch {
                slot: slot + 1,
                first: *a,
                second: b,
            });
        }
    }

    Ok(Cross {
        genes,
        first,
        second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_genotype_keeps_gene_order() {
        let genotype = Genotype::from_string("SsyYZZ").unwrap();
        assert_eq!(genotype.num_genes(), 3);
        assert_eq!(
            genotype.genes(),
            vec![Gene::new('S'), Gene::new('y'), Gene::new('Z')]
        );
        assert_eq!(genotype.pairs()[1].alleles(), ['y', 'Y']);
        assert!(genotype.pairs()[2].is_homozygous());
        assert_eq!(genotype.to_string(), "SsyYZZ");
    }

    #[test]
    fn parse_genotype_empty_err() {
        assert_eq!(Genotype::from_string(""), Err(GenotypeError::Empty));
    }

    #[test]
    fn parse_genotype_odd_length_err() {
        assert_eq!(
            Genotype::from_string("SsY"),
            Err(GenotypeError::OddLength {
                genotype: "SsY".to_string(),
                len: 3
            })
        );
    }

    #[test]
    fn parse_genotype_non_letter_err() {
        assert_eq!(
            Genotype::from_string("Ss1y"),
            Err(GenotypeError::NonLetter {
                genotype: "Ss1y".to_string(),
                ch: '1'
            })
        );
    }

    #[test]
    fn parse_genotype_mixed_pair_err() {
        assert_eq!(
            Genotype::from_string("SsYz"),
            Err(GenotypeError::MixedPair {
                genotype: "SsYz".to_string(),
                pair: "Yz".to_string()
            })
        );
    }

    #[test]
    fn parse_genotype_repeated_gene_err() {
        assert_eq!(
            Genotype::from_string("SsYysS"),
            Err(GenotypeError::RepeatedGene {
                genotype: "SsYysS".to_string(),
                gene: Gene::new('S')
            })
        );
    }

    #[test]
    fn parse_genotype_too_many_genes_err() {
        let encoding = "AaBbCcDdEeFfGgHhIiJjKkLlMm";
        assert_eq!(
            Genotype::from_string(encoding),
            Err(GenotypeError::TooManyGenes {
                genotype: encoding.to_string(),
                count: 13,
                max: MAX_GENES
            })
        );
    }

    #[test]
    fn parse_parents_ok() {
        let cross = parse_parents("SsYy", "ssYY").unwrap();
        assert_eq!(cross.genes, vec![Gene::new('S'), Gene::new('Y')]);
        assert_eq!(cross.num_genes(), 2);
        assert_eq!(cross.second.to_string(), "ssYY");
    }

    #[test]
    fn parse_parents_gene_count_mismatch_err() {
        assert_eq!(
            parse_parents("SsYy", "Ss"),
            Err(GenotypeError::GeneCountMismatch {
                first: 2,
                second: 1
            })
        );
    }

    #[test]
    fn parse_parents_gene_mismatch_err() {
        assert_eq!(
            parse_parents("SsYy", "SsZz"),
            Err(GenotypeError::GeneMismatch {
                slot: 2,
                first: Gene::new('Y'),
                second: Gene::new('Z')
            })
        );
    }

    #[test]
    fn genotype_error_message_is_descriptive() {
        let err = parse_parents("Aa", "AaBb").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid genotype input: parents declare different numbers of genes (1 vs 2)"
        );
    }
}
