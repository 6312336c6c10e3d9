//! Read-only catalog of unit categories
//!
//! The catalog is built once and passed to callers explicitly. The engine
//! never consults it; callers resolve units here and hand them to
//! [`crate::convert`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use gauge_core::{codes, CategoryGroup, GaugeError, LookupError, UnitCategory, UnitDefinition};

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error("category {category} mixes temperature and non-temperature units")]
    MixedTemperature { category: String },
}

impl From<CatalogError> for GaugeError {
    fn from(err: CatalogError) -> Self {
        GaugeError::new(codes::CATALOG_ERROR, err.to_string())
    }
}

/// Immutable set of category groups
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
}

impl Catalog {
    /// Build a catalog, checking category-name uniqueness and that no
    /// category mixes temperature with non-temperature units
    pub fn new(groups: Vec<CategoryGroup>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for category in groups.iter().flat_map(|g| g.categories.iter()) {
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }

            let temperature = category.units.iter().filter(|u| u.is_temperature()).count();
            if temperature != 0 && temperature != category.units.len() {
                return Err(CatalogError::MixedTemperature { category: category.name.clone() });
            }

            for unit in category.units.iter().filter(|u| u.factor() == 0.0) {
                warn!(category = %category.name, unit = %unit.symbol, "unit has a zero conversion factor");
            }
        }

        let category_count = names.len();
        let catalog = Catalog { groups };
        debug!(
            groups = catalog.groups.len(),
            categories = category_count,
            units = catalog.categories().map(|c| c.units.len()).sum::<usize>(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON: an array of
    /// `{"categoryGroup": .., "categories": [{"categoryName": .., "units": [..]}]}`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<CategoryGroup> = serde_json::from_str(json)?;
        Self::new(groups)
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        Catalog { groups: crate::units::builtin_groups() }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// All categories in catalog order, across groups
    pub fn categories(&self) -> impl Iterator<Item = &UnitCategory> {
        self.groups.iter().flat_map(|g| g.categories.iter())
    }

    /// Categories of one group; empty when the group is unknown
    pub fn categories_in_group(&self, group: &str) -> &[UnitCategory] {
        self.groups.iter()
            .find(|g| g.name == group)
            .map(|g| g.categories.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_category(&self, name: &str) -> Option<&UnitCategory> {
        self.categories().find(|c| c.name == name)
    }

    /// Find a unit by symbol across all categories; the first match wins
    pub fn find_unit(&self, symbol: &str) -> Option<(&UnitDefinition, &UnitCategory)> {
        self.categories()
            .find_map(|c| c.find(symbol).map(|u| (u, c)))
    }

    /// Find a unit by symbol within one category
    pub fn find_unit_in<'a>(&self, symbol: &str, category: &'a UnitCategory) -> Option<&'a UnitDefinition> {
        category.find(symbol)
    }

    pub fn require_category(&self, name: &str) -> Result<&UnitCategory, LookupError> {
        self.find_category(name)
            .ok_or_else(|| LookupError::UnknownCategory(name.to_string()))
    }

    pub fn require_unit(&self, symbol: &str) -> Result<(&UnitDefinition, &UnitCategory), LookupError> {
        self.find_unit(symbol)
            .ok_or_else(|| LookupError::UnknownUnit(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "categoryGroup": "Common",
            "categories": [
                {
                    "categoryName": "Length",
                    "units": [
                        {"unitName": "Meters", "unitSymbol": "m", "conversionFactor": 1.0, "isBase": true},
                        {"unitName": "Kilometers", "unitSymbol": "km", "conversionFactor": 1000.0}
                    ]
                },
                {
                    "categoryName": "Temperature",
                    "units": [
                        {"unitName": "Celsius", "unitSymbol": "°C", "conversionFactor": 1.0, "offset": 0.0},
                        {"unitName": "Fahrenheit", "unitSymbol": "°F", "conversionFactor": 0.5555555555555556, "offset": -32.0}
                    ]
                }
            ]
        },
        {
            "categoryGroup": "Science",
            "categories": [
                {
                    "categoryName": "Astronomy",
                    "units": [
                        {"unitName": "Kilometers", "unitSymbol": "km", "conversionFactor": 1.0},
                        {"unitName": "Astronomical Units", "unitSymbol": "au", "conversionFactor": 149597870.7}
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.groups().len(), 2);
        assert_eq!(catalog.categories().count(), 3);
    }

    #[test]
    fn test_find_category() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.find_category("Length").is_some());
        assert!(catalog.find_category("length").is_none());
        assert!(matches!(
            catalog.require_category("Nope"),
            Err(LookupError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_find_unit_first_match_wins() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let (unit, category) = catalog.find_unit("km").unwrap();
        assert_eq!(category.name, "Length");
        assert_eq!(unit.factor(), 1000.0);
    }

    #[test]
    fn test_find_unit_in_category() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let astronomy = catalog.find_category("Astronomy").unwrap();
        assert_eq!(catalog.find_unit_in("km", astronomy).unwrap().factor(), 1.0);
        assert!(catalog.find_unit_in("m", astronomy).is_none());
    }

    #[test]
    fn test_require_unit_miss() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(
            catalog.require_unit("parsec").unwrap_err(),
            LookupError::UnknownUnit("parsec".to_string())
        );
    }

    #[test]
    fn test_categories_in_group() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let common: Vec<&str> = catalog.categories_in_group("Common").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(common, vec!["Length", "Temperature"]);
        assert!(catalog.categories_in_group("Unknown").is_empty());
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let groups = vec![
            CategoryGroup::new("A", vec![UnitCategory::new("Length", vec![])]),
            CategoryGroup::new("B", vec![UnitCategory::new("Length", vec![])]),
        ];
        assert!(matches!(Catalog::new(groups), Err(CatalogError::DuplicateCategory(name)) if name == "Length"));
    }

    #[test]
    fn test_mixed_temperature_rejected() {
        let groups = vec![CategoryGroup::new("A", vec![UnitCategory::new("Odd", vec![
            UnitDefinition::temperature("Celsius", "°C", 1.0, 0.0),
            UnitDefinition::linear("Meters", "m", 1.0),
        ])])];
        assert!(matches!(Catalog::new(groups), Err(CatalogError::MixedTemperature { .. })));
    }

    #[test]
    fn test_zero_factor_accepted() {
        let groups = vec![CategoryGroup::new("A", vec![UnitCategory::new("Broken", vec![
            UnitDefinition::linear("Meters", "m", 1.0),
            UnitDefinition::linear("Nothing", "zero", 0.0),
        ])])];
        assert!(Catalog::new(groups).is_ok());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Parse(_))));
        // temperature units cannot be inverse
        let json = r#"[{"categoryGroup": "A", "categories": [{"categoryName": "T", "units": [
            {"unitName": "x", "unitSymbol": "x", "conversionFactor": 1, "offset": 0, "isInverse": true}
        ]}]}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path("/definitely/not/here/Units.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        let gauge: GaugeError = err.into();
        assert_eq!(gauge.code, codes::CATALOG_ERROR);
    }
}
