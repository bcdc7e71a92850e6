// src/sampling/mod.rs
pub mod counts;
pub mod select;

pub use counts::SampleCounts;
pub use select::select_rows;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    /// The count range derived from the dataset size has `high < low`.
    #[error("sample-count range [{low}, {high}] is empty for a dataset of {rows} rows")]
    EmptyCountRange { low: u64, high: u64, rows: usize },

    /// A rule asked for more rows than its eligibility mask admits.
    #[error("requested {requested} rows but only {eligible} are eligible")]
    NotEnoughRows { requested: usize, eligible: usize },
}
