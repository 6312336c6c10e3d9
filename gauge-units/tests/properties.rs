//! Property tests for the conversion engine over the built-in catalog

use approx::relative_eq;
use gauge_units::{convert, convert_to_all, Catalog, UnitCategory, UnitDefinition};
use proptest::prelude::*;

fn linear_categories(catalog: &Catalog) -> Vec<UnitCategory> {
    catalog.categories()
        .filter(|c| c.units.iter().all(|u| !u.is_temperature() && !u.is_inverse()))
        .cloned()
        .collect()
}

/// A unit with an arbitrary kind and factor, zero included
fn any_unit() -> impl Strategy<Value = UnitDefinition> {
    let factor = prop_oneof![Just(0.0), -1e6f64..1e6f64];
    (0u8..3, factor, -500.0f64..500.0, "[a-z]{1,3}").prop_map(|(kind, factor, offset, symbol)| {
        match kind {
            0 => UnitDefinition::linear(&symbol, &symbol, factor),
            1 => UnitDefinition::inverse(&symbol, &symbol, factor),
            _ => UnitDefinition::temperature(&symbol, &symbol, factor, offset),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn identity_conversion_linear(v in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO) {
        let catalog = Catalog::builtin();
        for unit in catalog.categories().flat_map(|c| c.units.iter()).filter(|u| !u.is_temperature()) {
            let out = convert(v, unit, unit).unwrap();
            prop_assert_eq!(out, v, "{}", unit.symbol);
        }
    }

    #[test]
    fn identity_conversion_temperature_is_exact(v in -1e6f64..1e6f64) {
        let catalog = Catalog::builtin();
        let temperature = catalog.find_category("Temperature").unwrap();
        for unit in &temperature.units {
            prop_assert_eq!(convert(v, unit, unit).unwrap(), v);
        }
    }

    #[test]
    fn linear_round_trip(v in -1e6f64..1e6f64) {
        let catalog = Catalog::builtin();
        for category in linear_categories(&catalog) {
            for a in &category.units {
                for b in &category.units {
                    let there = convert(v, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    prop_assert!(relative_eq!(back, v, epsilon = 1e-9, max_relative = 1e-9),
                        "{} -> {} -> {}: {} vs {}", a.symbol, b.symbol, a.symbol, v, back);
                }
            }
        }
    }

    #[test]
    fn temperature_never_mixes_with_linear(v in proptest::num::f64::ANY) {
        let catalog = Catalog::builtin();
        let (celsius, _) = catalog.find_unit("°C").unwrap();
        let (meter, _) = catalog.find_unit("m").unwrap();
        prop_assert!(convert(v, celsius, meter).is_err());
        prop_assert!(convert(v, meter, celsius).is_err());
    }

    #[test]
    fn zero_factor_destination_is_nan(v in -1e9f64..1e9f64) {
        let zero_linear = UnitDefinition::linear("Zero", "z", 0.0);
        let zero_temp = UnitDefinition::temperature("Zero", "z°", 0.0, 10.0);
        let meter = UnitDefinition::linear("Meters", "m", 1.0);
        let celsius = UnitDefinition::temperature("Celsius", "°C", 1.0, 0.0);
        prop_assert!(convert(v, &meter, &zero_linear).unwrap().is_nan());
        prop_assert!(convert(v, &celsius, &zero_temp).unwrap().is_nan());
    }

    #[test]
    fn batch_is_complete_for_valid_categories(v in -1e6f64..1e6f64, pick in any::<prop::sample::Index>()) {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let source = pick.get(&category.units);
            let results = convert_to_all(v, source, &category.units);
            prop_assert_eq!(results.len(), category.units.len());

            let own = results.iter().find(|r| r.unit.symbol == source.symbol).unwrap();
            prop_assert_eq!(own.value, v);
            prop_assert_eq!(&own.unit, source);
        }
    }

    #[test]
    fn batch_never_fails(
        v in proptest::num::f64::ANY,
        source in any_unit(),
        units in prop::collection::vec(any_unit(), 0..12),
    ) {
        let results = convert_to_all(v, &source, &units);
        prop_assert!(results.len() <= units.len());
        // every surviving entry keeps the input order
        let mut cursor = 0;
        for result in &results {
            let found = units[cursor..].iter().position(|u| u.symbol == result.unit.symbol);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }
}
