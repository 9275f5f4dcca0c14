// SPDX-License-Identifier: MPL-2.0
//! Project classification tag.

use std::fmt;
use std::str::FromStr;

/// Classification of a project. Display-only: gallery navigation never
/// looks at it, the related-projects query groups by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Architectural,
    Interior,
    Landscape,
    Commercial,
    Residential,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Architectural,
        Category::Interior,
        Category::Landscape,
        Category::Commercial,
        Category::Residential,
    ];

    /// Returns the identifier used in catalog documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Architectural => "architectural",
            Category::Interior => "interior",
            Category::Landscape => "landscape",
            Category::Commercial => "commercial",
            Category::Residential => "residential",
        }
    }

    /// Returns the i18n message key for the category label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Architectural => "category-architectural",
            Category::Interior => "category-interior",
            Category::Landscape => "category-landscape",
            Category::Commercial => "category-commercial",
            Category::Residential => "category-residential",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Interior".parse::<Category>(), Ok(Category::Interior));
        assert_eq!(" landscape ".parse::<Category>(), Ok(Category::Landscape));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!("industrial".parse::<Category>().is_err());
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }
}
