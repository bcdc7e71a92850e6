use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use super::SamplingError;

/// Pick exactly `n` distinct row indices among the rows where `mask` is true.
///
/// The selection generator is seeded with `seed` alone; callers pass the
/// count itself so a rule's selection does not depend on earlier draws.
pub fn select_rows(mask: &[bool], n: usize, seed: u64) -> Result<Vec<usize>, SamplingError> {
    let eligible: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(i, &ok)| ok.then_some(i))
        .collect();

    if n > eligible.len() {
        return Err(SamplingError::NotEnoughRows {
            requested: n,
            eligible: eligible.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok(index::sample(&mut rng, eligible.len(), n)
        .into_iter()
        .map(|i| eligible[i])
        .collect())
}
