use crate::punnett::{
    canonical::canonicalize,
    gametes::{expand_gametes, outer_product},
    genotype::{Cross, Gene},
};

/// Joins every parent-1 gamete (row) with every parent-2 gamete (column).
///
/// Cell `[i][j]` is `rows[i]` followed by `cols[j]`, uninterleaved.
pub fn raw_grid(rows: &[String], cols: &[String]) -> Vec<Vec<String>> {
    if cols.is_empty() {
        return Vec::new();
    }
    outer_product(&[rows, cols])
        .chunks(cols.len())
        .map(<[String]>::to_vec)
        .collect()
}

#[derive(Debug, Clone)]
pub struct PunnettSquare {
    genes: Vec<Gene>,
    row_gametes: Vec<String>,
    col_gametes: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl PunnettSquare {
    pub fn new(cross: &Cross) -> Self {
        let row_gametes = expand_gametes(&cross.first);
        let col_gametes = expand_gametes(&cross.second);
        log::debug!(
            "Crossing {} x {}: {} genes, {} gametes per parent",
            cross.first,
            cross.second,
            cross.num_genes(),
            row_gametes.len()
        );

        let cells = raw_grid(&row_gametes, &col_gametes)
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|raw| canonicalize(raw, &cross.genes))
                    .collect()
            })
            .collect();

        Self {
            genes: cross.genes.clone(),
            row_gametes,
            col_gametes,
            cells,
        }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn row_gametes(&self) -> &[String] {
        &self.row_gametes
    }

    pub fn col_gametes(&self) -> &[String] {
        &self.col_gametes
    }

    /// Canonical offspring genotypes, one row per parent-1 gamete.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &String> {
        self.cells.iter().flatten()
    }

    pub fn num_cells(&self) -> usize {
        self.row_gametes.len() * self.col_gametes.len()
    }
}
