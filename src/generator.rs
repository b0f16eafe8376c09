use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assoc::color_associations;
use crate::bank::{Category, WordBank};
use crate::form::TeamNameForm;
use crate::matcher::match_word;
use crate::random::{pick_many, pick_one};

/// Batch generation never returns fewer names than this.
const MIN_BATCH: usize = 15;

/// A name holds at most this many bank terms.
const MAX_PARTS: usize = 3;

/// Completion order when guided input leaves slots to fill.
const FILL_PRIORITY: [Category; 5] = [
    Category::Animal,
    Category::People,
    Category::Adjective,
    Category::Place,
    Category::Color,
];

/// Accumulates chosen terms and the categories they consumed during one
/// name build.
struct NameParts {
    parts: Vec<&'static str>,
    used: HashSet<Category>,
}

impl NameParts {
    fn new() -> Self {
        NameParts {
            parts: Vec::new(),
            used: HashSet::new(),
        }
    }

    fn push(&mut self, category: Category, word: &'static str) {
        self.parts.push(word);
        self.used.insert(category);
    }

    /// Push without consuming a category slot.
    fn push_extra(&mut self, word: &'static str) {
        self.parts.push(word);
    }

    fn is_used(&self, category: Category) -> bool {
        self.used.contains(&category)
    }

    fn len(&self) -> usize {
        self.parts.len()
    }

    fn finish(mut self) -> String {
        self.parts.truncate(MAX_PARTS);
        title_case(&self.parts.join(" "))
    }
}

/// Team name generator over the standard word bank.
///
/// Owns its RNG: `new` seeds from OS entropy, `with_seed` gives a
/// reproducible sequence for tests.
pub struct TeamNameGenerator {
    bank: &'static WordBank,
    rng: StdRng,
}

impl TeamNameGenerator {
    pub fn new() -> Self {
        TeamNameGenerator {
            bank: WordBank::standard(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        TeamNameGenerator {
            bank: WordBank::standard(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one name guided by partial form input.
    ///
    /// Every filled field is fuzzy-matched into its bank category, then the
    /// name is completed to 2-3 terms from the unused categories. An empty
    /// form degrades to [`generate_random`](Self::generate_random).
    pub fn generate(&mut self, form: &TeamNameForm) -> String {
        let filled = form.filled_count();
        if filled == 0 {
            return self.generate_random();
        }

        let mut parts = NameParts::new();
        for category in Category::ALL {
            let Some(text) = form.field(category) else {
                continue;
            };
            let word = match_word(text, self.bank.words(category), &mut self.rng).unwrap();
            parts.push(category, word);

            if category == Category::Color {
                let associations = color_associations(self.bank, text);
                if !associations.is_empty() && self.rng.gen_bool(0.5) {
                    let related = *pick_one(&mut self.rng, &associations).unwrap();
                    parts.push(Category::Adjective, related);
                }
            }
        }

        let target: usize = if filled >= 3 { 3 } else { 2 };
        let needed = target.saturating_sub(parts.len());
        if needed > 0 {
            let remaining: Vec<Category> = FILL_PRIORITY
                .into_iter()
                .filter(|&category| !parts.is_used(category))
                .collect();
            for &category in remaining.iter().take(needed) {
                let word = self.draw(category);
                parts.push(category, word);
            }
        }

        // A lone term can survive when the color roll misses and every
        // category is already marked used; pair it up.
        if parts.len() == 1 {
            let word = if parts.is_used(Category::Color) || parts.is_used(Category::Adjective) {
                self.draw_animal_or_people()
            } else {
                self.draw(Category::Adjective)
            };
            parts.push_extra(word);
        }

        parts.finish()
    }

    /// Generate one fully random name: 2 or 3 distinct categories, one
    /// random word each.
    pub fn generate_random(&mut self) -> String {
        let part_count = self.rng.gen_range(2..=3);
        let all = Category::ALL;
        let categories: Vec<Category> = pick_many(&mut self.rng, &all, part_count)
            .into_iter()
            .copied()
            .collect();

        let mut parts = NameParts::new();
        for category in categories {
            let word = self.draw(category);
            parts.push(category, word);
        }
        parts.finish()
    }

    /// Generate at least 15 pairwise-distinct names.
    ///
    /// With a form, each attempt perturbs the input by blanking a random
    /// subset of its filled fields before guided generation. After
    /// `target * 3` attempts the batch is topped up with pure random names;
    /// that loop has no formal bound, but the combinatorial space of 2-3
    /// term names dwarfs any realistic target.
    pub fn generate_many(&mut self, count: usize, form: Option<&TeamNameForm>) -> Vec<String> {
        let target = count.max(MIN_BATCH);
        let max_attempts = target * 3;
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::with_capacity(target);

        for _ in 0..max_attempts {
            let name = match form {
                Some(form) => {
                    let variant = self.perturb(form);
                    self.generate(&variant)
                }
                None => self.generate_random(),
            };
            if !name.is_empty() && seen.insert(name.clone()) {
                names.push(name);
                if names.len() >= target {
                    break;
                }
            }
        }

        if names.len() < target {
            debug!(
                "collected {} of {} unique names in {} attempts; topping up with random names",
                names.len(),
                target,
                max_attempts
            );
            while names.len() < target {
                let name = self.generate_random();
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }

        names
    }

    /// Copy of `form` with a random subset of its filled fields blanked.
    fn perturb(&mut self, form: &TeamNameForm) -> TeamNameForm {
        let mut variant = form.clone();
        let filled = form.filled_categories();
        if !filled.is_empty() {
            let clear_count = self.rng.gen_range(0..filled.len());
            let cleared: Vec<Category> = pick_many(&mut self.rng, &filled, clear_count)
                .into_iter()
                .copied()
                .collect();
            for category in cleared {
                variant.clear(category);
            }
        }
        variant
    }

    fn draw(&mut self, category: Category) -> &'static str {
        // standard bank categories are never empty
        pick_one(&mut self.rng, self.bank.words(category))
            .copied()
            .unwrap()
    }

    fn draw_animal_or_people(&mut self) -> &'static str {
        let animals = self.bank.words(Category::Animal);
        let people = self.bank.words(Category::People);
        let mut pool = Vec::with_capacity(animals.len() + people.len());
        pool.extend_from_slice(animals);
        pool.extend_from_slice(people);
        pick_one(&mut self.rng, &pool).copied().unwrap()
    }
}

impl Default for TeamNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first letter of each space-separated word, lowercase the
/// rest.
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
