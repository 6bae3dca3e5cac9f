//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A catalog category.
///
/// Serialized as its display name (e.g. `"Electronics"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Wearables,
    Clothing,
    Home,
    Kitchen,
    Beauty,
    Footwear,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Wearables,
        Category::Clothing,
        Category::Home,
        Category::Kitchen,
        Category::Beauty,
        Category::Footwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Wearables => "Wearables",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Kitchen => "Kitchen",
            Category::Beauty => "Beauty",
            Category::Footwear => "Footwear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::UnknownCategory(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("kitchen".parse::<Category>().unwrap(), Category::Kitchen);
        assert_eq!("FOOTWEAR".parse::<Category>().unwrap(), Category::Footwear);
        assert!("Toys".parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&Category::Beauty).unwrap(),
            "\"Beauty\""
        );
    }
}
