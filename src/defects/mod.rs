// src/defects/mod.rs
pub mod challengers;
pub mod challenges;

pub use challengers::ChallengersDefectMaker;
pub use challenges::ChallengesDefectMaker;

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use tracing::info;

use crate::config::DefectConfig;
use crate::dataset::{load_csv, write_if_absent, Dataset, WriteOutcome};

/// One dataset's corruption pipeline: load, break, write.
pub trait DefectMaker: Sized {
    /// Shared by the clean input and the defective output.
    const FILE_NAME: &'static str;

    /// Seed the maker's generator against the loaded dataset.
    fn new(dataset: Dataset, seed: u64) -> Result<Self>;

    /// Apply every rule, in order, to the owned dataset.
    fn make_defective_data(&mut self) -> Result<()>;

    fn dataset(&self) -> &Dataset;
}

/// Outcome of both writers for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub challenges: WriteOutcome,
    pub challengers: WriteOutcome,
}

/// Load `<data_dir>/<FILE_NAME>`, corrupt it and write it to
/// `<defective_dir>/<FILE_NAME>` if nothing is there yet.
#[tracing::instrument(level = "info", skip(config), fields(file = D::FILE_NAME))]
pub fn run<D: DefectMaker>(config: &DefectConfig) -> Result<WriteOutcome> {
    let input = config.data_dir.join(D::FILE_NAME);
    let dataset = load_csv(&input)?;
    info!(rows = dataset.len(), path = %input.display(), "loaded clean data");

    let mut maker = D::new(dataset, config.seed)
        .with_context(|| format!("seeding defect maker for {}", D::FILE_NAME))?;
    maker
        .make_defective_data()
        .with_context(|| format!("making defective {}", D::FILE_NAME))?;

    let output = config.defective_dir.join(D::FILE_NAME);
    write_if_absent(maker.dataset(), &output)
}

/// Create the output directory, then run both makers.
pub fn run_all(config: &DefectConfig) -> Result<RunReport> {
    fs::create_dir_all(&config.defective_dir)
        .with_context(|| format!("creating {}", config.defective_dir.display()))?;

    let challenges = run::<ChallengesDefectMaker>(config)?;
    let challengers = run::<ChallengersDefectMaker>(config)?;
    Ok(RunReport {
        challenges,
        challengers,
    })
}

/// Uniform pick from a fixed, non-empty set of literals.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len() as u32) as usize]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::dataset::Dataset;

    pub const CHALLENGE_HEADERS: [&str; 11] = [
        "challenge_id",
        "provider_id",
        "challenge_type",
        "disposition",
        "technology",
        "reason_code",
        "challenge_date",
        "rebuttal_date",
        "response_file_id",
        "resolution_date",
        "resolution",
    ];

    /// Every row passes every eligibility filter; even rows have no
    /// rebuttal, odd rows have a rebuttal date and a response file.
    pub fn challenges(rows: usize) -> Dataset {
        let data = (0..rows)
            .map(|i| {
                let rebutted = i % 2 == 1;
                vec![
                    format!("C{:04}", i),
                    format!("{:06}", 130_000 + i),
                    "A".to_string(),
                    "R".to_string(),
                    "50".to_string(),
                    "1".to_string(),
                    format!("2023-01-{:02}T{:02}", i % 28 + 1, i % 24),
                    if rebutted {
                        format!("2023-02-{:02}T{:02}", i % 28 + 1, i % 24)
                    } else {
                        String::new()
                    },
                    if rebutted {
                        format!("r{}.pdf", i)
                    } else {
                        String::new()
                    },
                    format!("2023-03-{:02}T{:02}", i % 28 + 1, i % 24),
                    "resolved".to_string(),
                ]
            })
            .collect();
        Dataset::new(
            CHALLENGE_HEADERS.iter().map(|h| h.to_string()).collect(),
            data,
        )
    }

    /// Webpages cycle through https, http and empty.
    pub fn challengers(rows: usize) -> Dataset {
        let data = (0..rows)
            .map(|i| {
                let webpage = match i % 3 {
                    0 => format!("https://provider{}.example.org", i),
                    1 => format!("http://provider{}.example.org/http://x", i),
                    _ => String::new(),
                };
                vec![format!("CH{:03}", i), format!("Provider {}", i), webpage]
            })
            .collect();
        Dataset::new(
            vec!["challenger".into(), "name".into(), "webpage".into()],
            data,
        )
    }
}
