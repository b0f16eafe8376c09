use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::{Result, TeamNamerError};

/// Pick one uniformly random element.
pub fn pick_one<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T> {
    items.choose(rng).ok_or(TeamNamerError::EmptyInput)
}

/// Pick `min(count, items.len())` distinct elements in randomized order.
///
/// Uses a partial Fisher-Yates sample over indices, so the input is neither
/// cloned nor mutated.
pub fn pick_many<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T], count: usize) -> Vec<&'a T> {
    let amount = count.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
