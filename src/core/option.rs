//! Option identifiers and the reference pool.
//!
//! An `OptionId` names one selectable answer. The renderer uses it both
//! as display text and as the key for looking up the option's image.

use serde::{Deserialize, Serialize};

/// Number of options shown for each question.
pub const VISIBLE_OPTIONS: usize = 3;

/// Questions per round unless configured otherwise.
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 8;

/// Countries available in the default game.
pub const DEFAULT_POOL: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK", "Ukraine", "US",
];

/// Identifier for a selectable option (a country name).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionId(String);

impl OptionId {
    /// Create a new option identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the default pool of identifiers.
    #[must_use]
    pub fn default_pool() -> Vec<OptionId> {
        DEFAULT_POOL.iter().map(|&name| OptionId::new(name)).collect()
    }
}

impl From<&str> for OptionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for OptionId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
