use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use super::{pick, DefectMaker};
use crate::dataset::Dataset;
use crate::sampling::{select_rows, SampleCounts};

/// Response files attached to challenges that were never rebutted.
pub const RESPONSE_FILES: [&str; 4] = ["a.pdf", "b.zip", "c.pdf d.pdf", "e.pdf"];
/// Reason codes outside (or ambiguous within) the valid domain.
pub const BAD_REASON_CODES: [&str; 3] = ["7", "0", "A"];
/// Dispositions under which a resolution is required.
pub const RESOLUTION_DISPOSITIONS: [&str; 3] = ["I", "R", "S"];

/// Breaks the challenges table with seven rules applied in a fixed order.
/// Rule order is part of the output: later rules see earlier rules' writes.
pub struct ChallengesDefectMaker {
    df: Dataset,
    counts: SampleCounts,
}

impl DefectMaker for ChallengesDefectMaker {
    const FILE_NAME: &'static str = "challenges.csv";

    fn new(dataset: Dataset, seed: u64) -> Result<Self> {
        let counts = SampleCounts::for_challenges(seed, dataset.len())?;
        Ok(Self {
            df: dataset,
            counts,
        })
    }

    fn make_defective_data(&mut self) -> Result<()> {
        self.break_rebuttal_file_and_date_rules()?;
        self.misorder_challenge_and_rebuttal_dates()?;
        self.misorder_challenge_and_resolution_dates()?;
        self.null_required_resolutions()?;
        self.null_required_technologies()?;
        self.deface_required_reason_codes()?;
        self.make_bad_provider_ids()?;
        Ok(())
    }

    fn dataset(&self) -> &Dataset {
        &self.df
    }
}

impl ChallengesDefectMaker {
    /// Draw the next count and select that many rows from `mask`.
    fn sample(&mut self, rule: &'static str, mask: &[bool]) -> Result<Vec<usize>> {
        let n = self.counts.next_count();
        let rows =
            select_rows(mask, n, n as u64).with_context(|| format!("selecting rows for {}", rule))?;
        debug!(rule, rows = n, "applying");
        Ok(rows)
    }

    /// Response file without a rebuttal date, then rebuttal date blanked
    /// despite a response file.
    fn break_rebuttal_file_and_date_rules(&mut self) -> Result<()> {
        let file_col = self.df.column("response_file_id")?;
        let date_col = self.df.column("rebuttal_date")?;

        let mask = self.df.mask_where("rebuttal_date", str::is_empty)?;
        let rows = self.sample("response_file_without_rebuttal", &mask)?;
        for row in rows {
            let file = pick(self.counts.rng(), &RESPONSE_FILES);
            self.df.set(row, file_col, file);
        }

        let mask = self.df.mask_where("response_file_id", |v| !v.is_empty())?;
        let rows = self.sample("rebuttal_date_missing", &mask)?;
        for row in rows {
            self.df.set(row, date_col, "");
        }
        Ok(())
    }

    fn misorder_challenge_and_rebuttal_dates(&mut self) -> Result<()> {
        self.swap_dates(
            "misorder_challenge_and_rebuttal_dates",
            "challenge_date",
            "rebuttal_date",
        )
    }

    fn misorder_challenge_and_resolution_dates(&mut self) -> Result<()> {
        self.swap_dates(
            "misorder_challenge_and_resolution_dates",
            "challenge_date",
            "resolution_date",
        )
    }

    /// Exchange two date columns on the sampled rows.
    fn swap_dates(&mut self, rule: &'static str, a: &str, b: &str) -> Result<()> {
        let (a_col, b_col) = (self.df.column(a)?, self.df.column(b)?);
        let mask = self.df.mask_all();
        for row in self.sample(rule, &mask)? {
            self.df.swap(row, a_col, b_col);
        }
        Ok(())
    }

    /// Resolution is required for dispositions I/R/S and for type E.
    fn null_required_resolutions(&mut self) -> Result<()> {
        let col = self.df.column("resolution")?;
        let by_disposition = self
            .df
            .mask_where("disposition", |v| RESOLUTION_DISPOSITIONS.contains(&v))?;
        let by_type = self.df.mask_where("challenge_type", |v| v == "E")?;
        let mask: Vec<bool> = by_disposition
            .iter()
            .zip(&by_type)
            .map(|(d, t)| *d || *t)
            .collect();

        for row in self.sample("null_required_resolutions", &mask)? {
            self.df.set(row, col, "");
        }
        Ok(())
    }

    /// Technology is required unless the challenge type is N.
    fn null_required_technologies(&mut self) -> Result<()> {
        let col = self.df.column("technology")?;
        let mask = self.df.mask_where("challenge_type", |v| v != "N")?;
        for row in self.sample("null_required_technologies", &mask)? {
            self.df.set(row, col, "");
        }
        Ok(())
    }

    /// Reason codes only mean something for type A challenges.
    fn deface_required_reason_codes(&mut self) -> Result<()> {
        let col = self.df.column("reason_code")?;
        let mask = self.df.mask_where("challenge_type", |v| v == "A")?;
        for row in self.sample("deface_required_reason_codes", &mask)? {
            let code = pick(self.counts.rng(), &BAD_REASON_CODES);
            self.df.set(row, col, code);
        }
        Ok(())
    }

    /// Provider ids that are too short or too long for the fixed-width code.
    fn make_bad_provider_ids(&mut self) -> Result<()> {
        let col = self.df.column("provider_id")?;
        let mask = self.df.mask_all();
        for row in self.sample("make_bad_provider_ids", &mask)? {
            let rng = self.counts.rng();
            let short = rng.gen_range(0..=999_999u32);
            let long = rng.gen_range(1_000_000..=100_000_000u32);
            let id = if rng.gen::<bool>() { short } else { long };
            self.df.set(row, col, id.to_string());
        }
        Ok(())
    }
}
