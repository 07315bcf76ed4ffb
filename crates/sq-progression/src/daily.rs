//! Daily challenge rotation.

use rand::Rng;
use rand::seq::SliceRandom;
use sq_core::{Catalog, ChallengeDefinition, ChallengeInstance};

/// Sample `count` distinct challenges from the catalog for today's rotation.
///
/// Each returned instance is a fresh daily copy: incomplete and flagged
/// daily. A `count` larger than the catalog returns the whole catalog in
/// shuffled order.
pub fn select_daily<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Vec<ChallengeInstance> {
    if count > catalog.len() {
        tracing::warn!(
            requested = count,
            available = catalog.len(),
            "daily count exceeds catalog size, clamping"
        );
    }

    let mut pool: Vec<&ChallengeDefinition> = catalog.iter().collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool.into_iter()
        .map(ChallengeDefinition::instantiate_daily)
        .collect()
}
