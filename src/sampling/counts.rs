use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SamplingError;

/// Seeded stream of "how many rows does the next rule touch".
///
/// Each defect maker owns exactly one of these, and the generator inside is
/// also the source for per-row replacement values, so a run is a pure
/// function of seed and input.
pub struct SampleCounts {
    rng: StdRng,
    low: u64,
    high: u64,
}

impl SampleCounts {
    /// Counts uniform over `[low, high]`. `rows` is only used for the error.
    pub fn new(seed: u64, low: u64, high: u64, rows: usize) -> Result<Self, SamplingError> {
        if high < low {
            return Err(SamplingError::EmptyCountRange { low, high, rows });
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            low,
            high,
        })
    }

    /// `[1, floor(rows / 5)]`
    pub fn for_challenges(seed: u64, rows: usize) -> Result<Self, SamplingError> {
        Self::new(seed, 1, rows as u64 / 5, rows)
    }

    /// `[4, floor(rows / 5 + 5)]`
    pub fn for_challengers(seed: u64, rows: usize) -> Result<Self, SamplingError> {
        Self::new(seed, 4, rows as u64 / 5 + 5, rows)
    }

    pub fn bounds(&self) -> (u64, u64) {
        (self.low, self.high)
    }

    /// Advance the stream. Drawn as `u64` so the sequence is the same on
    /// every target.
    pub fn next_count(&mut self) -> usize {
        self.rng.gen_range(self.low..=self.high) as usize
    }

    /// The shared generator, for rules that draw replacement values.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Iterator for SampleCounts {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        Some(self.next_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenges_golden_sequence() {
        let counts: Vec<usize> = SampleCounts::for_challenges(42, 50)
            .unwrap()
            .take(7)
            .collect();
        assert_eq!(counts, vec![6, 6, 7, 5, 1, 5, 8]);
    }

    #[test]
    fn test_challengers_golden_prefix() {
        let counts: Vec<usize> = SampleCounts::for_challengers(42, 20)
            .unwrap()
            .take(2)
            .collect();
        assert_eq!(counts, vec![7, 7]);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<usize> = SampleCounts::for_challenges(7, 1_000).unwrap().take(64).collect();
        let b: Vec<usize> = SampleCounts::for_challenges(7, 1_000).unwrap().take(64).collect();
        let c: Vec<usize> = SampleCounts::for_challenges(8, 1_000).unwrap().take(64).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_counts_stay_in_bounds() {
        let stream = SampleCounts::for_challengers(42, 103).unwrap();
        assert_eq!(stream.bounds(), (4, 25));
        assert!(stream.take(500).all(|n| (4..=25).contains(&n)));

        let stream = SampleCounts::for_challenges(42, 59).unwrap();
        assert_eq!(stream.bounds(), (1, 11));
        assert!(stream.take(500).all(|n| (1..=11).contains(&n)));
    }

    #[test]
    fn test_too_few_challenge_rows_is_an_error() {
        let err = SampleCounts::for_challenges(42, 4).err().unwrap();
        assert_eq!(
            err,
            SamplingError::EmptyCountRange {
                low: 1,
                high: 0,
                rows: 4
            }
        );
        assert!(SampleCounts::for_challenges(42, 5).is_ok());
        assert!(SampleCounts::for_challengers(42, 0).is_ok());
    }
}
