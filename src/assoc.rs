use crate::bank::{Category, WordBank};

// Canonical color keys in match-priority order. Suggested adjectives are
// filtered against the adjective bank before use, so entries that have no
// bank counterpart (e.g. "Nature", "Dark") simply drop out.
const COLOR_ASSOCIATIONS: &[(&str, [&str; 5])] = &[
    ("red", ["Fire", "Storm", "Thunder", "Fierce", "Bold"]),
    ("blue", ["Storm", "Thunder", "Steel", "Noble", "Royal"]),
    ("green", ["Wild", "Nature", "Swift", "Agile", "Brave"]),
    ("yellow", ["Golden", "Lightning", "Fire", "Bold", "Royal"]),
    ("black", ["Steel", "Dark", "Fierce", "Bold", "Noble"]),
    ("white", ["Pure", "Light", "Noble", "Royal", "Elite"]),
    ("purple", ["Royal", "Noble", "Mythic", "Supreme", "Elite"]),
    ("orange", ["Fire", "Storm", "Bold", "Fierce", "Wild"]),
];

const DEFAULT_STRONG: [&str; 5] = ["Mighty", "Brave", "Elite", "Royal", "Supreme"];

/// Adjectives thematically related to a color.
///
/// The first canonical key that is a substring of the lowercased input (or
/// vice versa) wins; unknown colors fall back to a default strong set. The
/// result may be empty if filtering removes everything.
pub fn color_associations(bank: &WordBank, color: &str) -> Vec<&'static str> {
    let normalized = color.trim().to_lowercase();

    for (key, suggested) in COLOR_ASSOCIATIONS {
        if normalized.contains(key) || key.contains(normalized.as_str()) {
            return filter_to_bank(bank, suggested);
        }
    }

    filter_to_bank(bank, &DEFAULT_STRONG)
}

fn filter_to_bank(bank: &WordBank, suggested: &[&'static str]) -> Vec<&'static str> {
    let adjectives = bank.words(Category::Adjective);
    suggested
        .iter()
        .copied()
        .filter(|word| adjectives.iter().any(|adj| adj.eq_ignore_ascii_case(word)))
        .collect()
}
