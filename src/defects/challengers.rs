use anyhow::{Context, Result};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use super::DefectMaker;
use crate::dataset::Dataset;
use crate::sampling::{select_rows, SampleCounts};

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_FAKE_ID_CHARS: u32 = 100;

/// Breaks the challenger-entities table: fabricated identifiers, then
/// rewritten webpage schemes.
pub struct ChallengersDefectMaker {
    df: Dataset,
    counts: SampleCounts,
}

impl DefectMaker for ChallengersDefectMaker {
    const FILE_NAME: &'static str = "challengers.csv";

    fn new(dataset: Dataset, seed: u64) -> Result<Self> {
        let counts = SampleCounts::for_challengers(seed, dataset.len())?;
        Ok(Self {
            df: dataset,
            counts,
        })
    }

    fn make_defective_data(&mut self) -> Result<()> {
        self.deface_challenger_ids()?;
        self.deface_webpages()?;
        Ok(())
    }

    fn dataset(&self) -> &Dataset {
        &self.df
    }
}

/// Letters-only string of 0..=100 chars.
fn fake_identifier<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..=MAX_FAKE_ID_CHARS);
    (0..len)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len() as u32) as usize] as char)
        .collect()
}

/// `https://` becomes `www.` (no scheme left at all), then `http://`
/// becomes `ftp://`. Every occurrence is rewritten, not just the prefix.
pub fn deface_webpage(webpage: &str) -> String {
    webpage.replace("https://", "www.").replace("http://", "ftp://")
}

impl ChallengersDefectMaker {
    /// Overwrite `n` challengers with identifiers that have no history.
    fn deface_challenger_ids(&mut self) -> Result<()> {
        let n = self.counts.next_count();
        let col = self.df.column("challenger")?;

        let mut seen: HashSet<String> = self.df.values(col).map(str::to_string).collect();
        let mut fresh = Vec::with_capacity(n);
        while fresh.len() < n {
            let candidate = fake_identifier(self.counts.rng());
            if seen.insert(candidate.clone()) {
                fresh.push(candidate);
            }
        }

        let rows = select_rows(&self.df.mask_all(), n, n as u64)
            .context("selecting rows for deface_challenger_ids")?;
        debug!(rule = "deface_challenger_ids", rows = n, "applying");
        for (row, id) in rows.into_iter().zip(fresh) {
            self.df.set(row, col, id);
        }
        Ok(())
    }

    fn deface_webpages(&mut self) -> Result<()> {
        let col = self.df.column("webpage")?;
        let mut touched = 0usize;
        for row in 0..self.df.len() {
            let current = self.df.get(row, col);
            if current.is_empty() {
                continue;
            }
            let defaced = deface_webpage(current);
            self.df.set(row, col, defaced);
            touched += 1;
        }
        debug!(rule = "deface_webpages", rows = touched, "applied");
        Ok(())
    }
}
