//! Tool categories
//!
//! The fixed taxonomy a description is classified into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a generated tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Converters,
    Calculators,
    Generators,
    Formatters,
    Validators,
    Encoders,
    /// Fallback when no keyword group matches
    Utilities,
}

impl Default for Category {
    fn default() -> Self {
        Self::Utilities
    }
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 7] = [
        Self::Converters,
        Self::Calculators,
        Self::Generators,
        Self::Formatters,
        Self::Validators,
        Self::Encoders,
        Self::Utilities,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Converters => "converters",
            Self::Calculators => "calculators",
            Self::Generators => "generators",
            Self::Formatters => "formatters",
            Self::Validators => "validators",
            Self::Encoders => "encoders",
            Self::Utilities => "utilities",
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == lower)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("converters"), Some(Category::Converters));
        assert_eq!(Category::parse("Encoders"), Some(Category::Encoders));
        assert_eq!(Category::parse(" utilities "), Some(Category::Utilities));
        assert_eq!(Category::parse("widgets"), None);
    }

    #[test]
    fn test_category_round_trips_through_as_str() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Formatters).unwrap();
        assert_eq!(json, "\"formatters\"");
        let category: Category = serde_json::from_str("\"validators\"").unwrap();
        assert_eq!(category, Category::Validators);
    }

    #[test]
    fn test_category_default_and_display() {
        assert_eq!(Category::default(), Category::Utilities);
        assert_eq!(Category::Calculators.to_string(), "calculators");
    }
}
