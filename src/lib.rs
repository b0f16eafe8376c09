//! Whimsical team name generation from a fixed word bank.
//!
//! Names are assembled from 2-3 categorized terms (colors, adjectives,
//! places, animals, group nouns), either purely at random or guided by
//! partial form input. Free-text guidance is fuzzy-matched into the bank,
//! so output is always built from bank terms.
//!
//! [`TeamNameGenerator`] owns its RNG and can be seeded for reproducible
//! output; the free functions below run a fresh entropy-seeded generator
//! per call.

mod assoc;
mod bank;
mod error;
mod form;
mod generator;
mod matcher;
mod random;

pub use assoc::color_associations;
pub use bank::{Category, WordBank};
pub use error::{Result, TeamNamerError};
pub use form::TeamNameForm;
pub use generator::TeamNameGenerator;
pub use matcher::match_word;
pub use random::{pick_many, pick_one};

/// Generate one name guided by partial form input.
pub fn generate_team_name(form: &TeamNameForm) -> String {
    TeamNameGenerator::new().generate(form)
}

/// Generate one fully random name.
pub fn generate_random_team_name() -> String {
    TeamNameGenerator::new().generate_random()
}

/// Generate at least 15 pairwise-distinct names, optionally as variations
/// of one form input.
pub fn generate_multiple_names(count: usize, form: Option<&TeamNameForm>) -> Vec<String> {
    TeamNameGenerator::new().generate_many(count, form)
}
