use serde::{Deserialize, Serialize};

use crate::bank::Category;

/// Caller-supplied form data guiding name generation.
///
/// All fields are optional; whitespace-only values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamNameForm {
    pub color: Option<String>,
    pub adjective: Option<String>,
    pub place: Option<String>,
    pub animal: Option<String>,
    pub people: Option<String>,
}

impl TeamNameForm {
    /// The trimmed value for a category, or `None` if unset or blank.
    pub fn field(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Color => &self.color,
            Category::Adjective => &self.adjective,
            Category::Place => &self.place,
            Category::Animal => &self.animal,
            Category::People => &self.people,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Categories with a non-blank value, in form-field order.
    pub fn filled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.field(category).is_some())
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.filled_categories().len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Unset a field.
    pub fn clear(&mut self, category: Category) {
        match category {
            Category::Color => self.color = None,
            Category::Adjective => self.adjective = None,
            Category::Place => self.place = None,
            Category::Animal => self.animal = None,
            Category::People => self.people = None,
        }
    }
}
