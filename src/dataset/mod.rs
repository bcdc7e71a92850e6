// src/dataset/mod.rs
pub mod load;
pub mod write;

pub use load::{load_csv, read_dataset};
pub use write::{write_if_absent, WriteOutcome};

use anyhow::{anyhow, Result};

/// An all-text table: every cell is a `String`, absent cells are `""`.
/// Rows keep their load position, which is the only row identity we have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// One `Vec<String>` per row, always `headers.len()` wide.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header row.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("missing column `{}`", name))
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
    }

    /// Exchange the values of two columns within one row.
    pub fn swap(&mut self, row: usize, a: usize, b: usize) {
        self.rows[row].swap(a, b);
    }

    /// All values of column `col`, top to bottom.
    pub fn values(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| r[col].as_str())
    }

    /// Eligibility mask that admits every row.
    pub fn mask_all(&self) -> Vec<bool> {
        vec![true; self.rows.len()]
    }

    /// Eligibility mask from a predicate over one column.
    pub fn mask_where(&self, name: &str, pred: impl Fn(&str) -> bool) -> Result<Vec<bool>> {
        let col = self.column(name)?;
        Ok(self.values(col).map(pred).collect())
    }
}
