use rand::Rng;

use crate::error::Result;
use crate::random::pick_one;

/// Resolve free-text input to the closest candidate.
///
/// Policy, in order: exact match on the lowercased forms, then first
/// candidate (declaration order) where either lowercased form contains the
/// other, then a uniformly random candidate. Guidance always resolves to a
/// real candidate; errors only if `candidates` is empty.
pub fn match_word<'a, R: Rng + ?Sized>(
    input: &str,
    candidates: &'a [&'a str],
    rng: &mut R,
) -> Result<&'a str> {
    let normalized = input.trim().to_lowercase();

    for candidate in candidates {
        if candidate.to_lowercase() == normalized {
            return Ok(candidate);
        }
    }

    for candidate in candidates {
        let lower = candidate.to_lowercase();
        if lower.contains(&normalized) || normalized.contains(&lower) {
            return Ok(candidate);
        }
    }

    pick_one(rng, candidates).copied()
}
