use std::str::FromStr;

use thiserror::Error;

/// Food categories a user can narrow a spin to.
///
/// "No filter" is `None` at every call site that takes an
/// `Option<Category>`; there is no empty-string or `Any` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Burgers,
    Pizza,
    Asian,
    Mexican,
    Seafood,
    Diner,
    Dessert,
}

impl Category {
    /// Every category, in the order they are offered for selection.
    pub const ALL: [Category; 7] = [
        Category::Burgers,
        Category::Pizza,
        Category::Asian,
        Category::Mexican,
        Category::Seafood,
        Category::Diner,
        Category::Dessert,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Burgers => "Burgers",
            Category::Pizza => "Pizza",
            Category::Asian => "Asian",
            Category::Mexican => "Mexican",
            Category::Seafood => "Seafood",
            Category::Diner => "Diner",
            Category::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category \"{input}\" (expected one of: Burgers, Pizza, Asian, Mexican, Seafood, Diner, Dessert)")]
pub struct CategoryParseError {
    pub input: String,
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parses a category label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError {
                input: s.to_owned(),
            })
    }
}
