use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_SEED: u64 = 42;

/// Where clean data is read from, where defective data goes, and the seed
/// every defect maker starts from.
#[derive(Debug, Clone)]
pub struct DefectConfig {
    pub data_dir: PathBuf,
    pub defective_dir: PathBuf,
    pub seed: u64,
}

impl DefectConfig {
    pub fn new(data_dir: impl Into<PathBuf>, defective_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            defective_dir: defective_dir.into(),
            seed: DEFAULT_SEED,
        }
    }

    /// `./data` in, `./bad_data` out.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("resolving current directory")?;
        Ok(Self::new(cwd.join("data"), cwd.join("bad_data")))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
