pub mod canonical;
pub mod gametes;
pub mod genotype;
pub mod report;
pub mod square;
pub mod tabulate;

pub use canonical::canonicalize;
pub use gametes::{expand_gametes, outer_product};
pub use genotype::{parse_parents, AllelePair, Cross, Gene, Genotype, GenotypeError, MAX_GENES};
pub use report::{write_report, ReportOptions};
pub use square::{raw_grid, PunnettSquare};
pub use tabulate::{genotype_breakdown, phenotype_breakdown, Breakdown, Phenotype};
