//! Unit categories and category groups

use serde::{Serialize, Deserialize};
use crate::UnitDefinition;

/// A named, ordered collection of mutually convertible units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCategory {
    /// Unique across the catalog
    #[serde(rename = "categoryName")]
    pub name: String,
    /// Catalog order is preserved
    pub units: Vec<UnitDefinition>,
}

impl UnitCategory {
    pub fn new(name: &str, units: Vec<UnitDefinition>) -> Self {
        UnitCategory {
            name: name.to_string(),
            units,
        }
    }

    /// Find a unit by symbol within this category
    pub fn find(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.find(symbol).is_some()
    }

    /// True when the category holds temperature units
    pub fn is_temperature(&self) -> bool {
        self.units.iter().any(|u| u.is_temperature())
    }

    /// Default (from, to) selection: first and second unit, or the first twice
    /// when the category has a single unit
    pub fn default_pair(&self) -> Option<(&UnitDefinition, &UnitDefinition)> {
        let first = self.units.first()?;
        let second = self.units.get(1).unwrap_or(first);
        Some((first, second))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// A display grouping of categories (e.g. "Common", "Science")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    #[serde(rename = "categoryGroup")]
    pub name: String,
    pub categories: Vec<UnitCategory>,
}

impl CategoryGroup {
    pub fn new(name: &str, categories: Vec<UnitCategory>) -> Self {
        CategoryGroup {
            name: name.to_string(),
            categories,
        }
    }
}
