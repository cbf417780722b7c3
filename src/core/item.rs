//! # Item
//!
//! The one domain entity: a lost-or-found listing.
//!
//! ```text
//! Item
//! ├── id: String            // unique across lost + found
//! ├── title / description / location: String
//! ├── category: Category    // closed set, never "All"
//! ├── date: NaiveDate       // listing date (ISO)
//! ├── image: Option<String> // carried, never read
//! ├── contact_*: String     // name, email, phone
//! ├── status: ItemStatus    // Active | Resolved
//! └── kind: ItemType        // Lost | Found
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }
}

/// Whether a listing is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Resolved,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Active => "Active",
            ItemStatus::Resolved => "Resolved",
        }
    }
}

/// Stored item categories. The "All" wildcard is a filter, see [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Bags,
    Clothing,
    Accessories,
    Documents,
    Jewelry,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Bags,
        Category::Clothing,
        Category::Accessories,
        Category::Documents,
        Category::Jewelry,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Bags => "Bags",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Documents => "Documents",
            Category::Jewelry => "Jewelry",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is case-sensitive: `"Jewelry"` parses, `"jewelry"` does not.
impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::new("category", s))
    }
}

/// Category selection on the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chip order shown on the list screens: `All` first, then every category.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Step through [`CategoryFilter::choices`], wrapping at both ends.
    pub fn cycle(&self, forward: bool) -> CategoryFilter {
        let choices = Self::choices();
        let idx = choices.iter().position(|c| c == self).unwrap_or(0);
        let len = choices.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        choices[next]
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A value that didn't match any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub what: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.what, self.value)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: ItemStatus,
    #[serde(rename = "type")]
    pub kind: ItemType,
}

impl Item {
    /// Long-form listing date, e.g. "Tuesday, February 24, 2026".
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert_eq!("Jewelry".parse::<Category>(), Ok(Category::Jewelry));
        assert!("jewelry".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_filter_parses_all_wildcard() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Bags".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Bags))
        );
        let err = "Shoes".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: \"Shoes\"");
    }

    #[test]
    fn test_choices_start_with_all() {
        let choices = CategoryFilter::choices();
        assert_eq!(choices.len(), 8);
        assert_eq!(choices[0], CategoryFilter::All);
        assert_eq!(choices[7], CategoryFilter::Only(Category::Other));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(
            CategoryFilter::All.cycle(false),
            CategoryFilter::Only(Category::Other)
        );
        assert_eq!(
            CategoryFilter::Only(Category::Other).cycle(true),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::All.cycle(true),
            CategoryFilter::Only(Category::Electronics)
        );
    }

    #[test]
    fn test_item_json_uses_type_key() {
        let item = crate::core::store::seed_items()
            .into_iter()
            .next()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "lost");
        assert_eq!(json["status"], "active");
        assert_eq!(json["date"], "2026-02-24");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_long_date() {
        let item = crate::core::store::seed_items()
            .into_iter()
            .next()
            .unwrap();
        assert_eq!(item.long_date(), "Tuesday, February 24, 2026");
    }
}
