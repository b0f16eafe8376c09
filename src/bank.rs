/// The five semantic slots a team name draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Color,
    Adjective,
    Place,
    Animal,
    People,
}

impl Category {
    /// All categories, in form-field order.
    pub const ALL: [Category; 5] = [
        Category::Color,
        Category::Adjective,
        Category::Place,
        Category::Animal,
        Category::People,
    ];
}

const COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Black", "White",
    "Gold", "Silver", "Crimson", "Navy", "Emerald", "Azure", "Scarlet", "Teal",
    "Violet", "Indigo", "Amber", "Coral", "Lime", "Magenta", "Turquoise", "Maroon",
];

const ADJECTIVES: &[&str] = &[
    "Mighty", "Swift", "Brave", "Agile", "Fierce", "Bold", "Elite", "Supreme",
    "Storm", "Thunder", "Fire", "Ice", "Lightning", "Steel", "Golden", "Diamond",
    "Royal", "Champion", "Legendary", "Mythic", "Peak", "Glory", "Victory", "Conquer",
    "Wild", "Savage", "Noble", "Proud", "Stalwart", "Valiant", "Dauntless", "Invincible",
];

const PLACES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Mountain", "Valley", "Ocean", "Forest", "Desert",
    "City", "Island", "River", "Lake", "Plains", "Highland", "Coast", "Bay",
    "East", "West", "North", "South", "Central", "Edge", "Peak", "Summit",
    "Brooklyn", "Manhattan", "Queens", "Bronx", "Phoenix", "Denver", "Seattle", "Portland",
];

// A few entries repeat; repeats weight the draw toward them.
const ANIMALS: &[&str] = &[
    "Eagles", "Tigers", "Panthers", "Lions", "Wolves", "Cheetahs", "Bears", "Sharks",
    "Dragons", "Phoenix", "Hawks", "Falcons", "Ravens", "Wolves", "Bulls", "Stallions",
    "Rhinos", "Elephants", "Jaguars", "Cobras", "Vipers", "Stallions", "Mustangs", "Thunder",
    "Lightning", "Storm", "Blaze", "Fury", "Rage", "Thunder", "Blizzard", "Tornado",
];

const PEOPLE: &[&str] = &[
    "Warriors", "Knights", "Heroes", "Champions", "Kings", "Leaders", "Pioneers", "Elite",
    "Cowboys", "Pirates", "Samurai", "Ninjas", "Gladiators", "Spartans", "Vikings", "Crusaders",
    "Guardians", "Conquerors", "Explorers", "Trailblazers", "Defenders", "Fighters", "Hunters", "Rangers",
    "Rebels", "Outlaws", "Mavericks", "Renegades", "Legends", "Masters", "Lords", "Titans",
];

/// Immutable categorized vocabulary backing all generated output.
#[derive(Debug)]
pub struct WordBank {
    colors: &'static [&'static str],
    adjectives: &'static [&'static str],
    places: &'static [&'static str],
    animals: &'static [&'static str],
    people: &'static [&'static str],
}

static STANDARD: WordBank = WordBank {
    colors: COLORS,
    adjectives: ADJECTIVES,
    places: PLACES,
    animals: ANIMALS,
    people: PEOPLE,
};

impl WordBank {
    /// The built-in vocabulary. Every category is non-empty.
    pub fn standard() -> &'static WordBank {
        &STANDARD
    }

    /// Words for a category, in declaration order.
    pub fn words(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Color => self.colors,
            Category::Adjective => self.adjectives,
            Category::Place => self.places,
            Category::Animal => self.animals,
            Category::People => self.people,
        }
    }
}
