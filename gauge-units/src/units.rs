//! Built-in unit definitions organized by category
//!
//! Factors are relative to each category's base unit (factor 1). Temperature
//! units are expressed against Celsius: celsius = (value + offset) * factor.

use gauge_core::prelude::*;

/// Groups of the compiled-in catalog, in display order
pub(crate) fn builtin_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new("Common", vec![
            length_units(),
            mass_units(),
            volume_units(),
            temperature_units(),
            time_units(),
            speed_units(),
            area_units(),
        ]),
        CategoryGroup::new("Technical", vec![
            data_units(),
            pressure_units(),
            energy_units(),
            fuel_economy_units(),
        ]),
    ]
}

fn length_units() -> UnitCategory {
    UnitCategory::new("Length", vec![
        // SI length units
        UnitDefinition::linear("Meters", "m", 1.0).as_base()
            .with_description("The base unit of length in the SI system"),
        UnitDefinition::linear("Kilometers", "km", 1000.0),
        UnitDefinition::linear("Centimeters", "cm", 0.01),
        UnitDefinition::linear("Millimeters", "mm", 0.001),
        UnitDefinition::linear("Micrometers", "µm", 0.000001),

        // Imperial/US length units
        UnitDefinition::linear("Inches", "in", 0.0254),
        UnitDefinition::linear("Feet", "ft", 0.3048),
        UnitDefinition::linear("Yards", "yd", 0.9144),
        UnitDefinition::linear("Miles", "mi", 1609.344),
        UnitDefinition::linear("Nautical Miles", "nmi", 1852.0),
    ])
}

fn mass_units() -> UnitCategory {
    UnitCategory::new("Mass", vec![
        UnitDefinition::linear("Kilograms", "kg", 1.0).as_base()
            .with_description("The base unit of mass in the SI system"),
        UnitDefinition::linear("Grams", "g", 0.001),
        UnitDefinition::linear("Milligrams", "mg", 0.000001),
        UnitDefinition::linear("Metric Tons", "t", 1000.0),

        UnitDefinition::linear("Pounds", "lb", 0.45359237),
        UnitDefinition::linear("Ounces", "oz", 0.028349523125),
        UnitDefinition::linear("Stones", "st", 6.35029318),
        UnitDefinition::linear("Short Tons", "ton", 907.18474),
        UnitDefinition::linear("Carats", "ct", 0.0002),
    ])
}

fn volume_units() -> UnitCategory {
    UnitCategory::new("Volume", vec![
        UnitDefinition::linear("Liters", "L", 1.0).as_base(),
        UnitDefinition::linear("Milliliters", "mL", 0.001),
        UnitDefinition::linear("Cubic Meters", "m³", 1000.0),
        UnitDefinition::linear("Cubic Centimeters", "cm³", 0.001),

        // US fluid volumes
        UnitDefinition::linear("Gallons (US)", "gal", 3.785411784),
        UnitDefinition::linear("Quarts (US)", "qt", 0.946352946),
        UnitDefinition::linear("Pints (US)", "pt", 0.473176473),
        UnitDefinition::linear("Cups (US)", "cup", 0.2365882365),
        UnitDefinition::linear("Fluid Ounces (US)", "fl oz", 0.0295735295625),
        UnitDefinition::linear("Tablespoons (US)", "tbsp", 0.01478676478125),
        UnitDefinition::linear("Teaspoons (US)", "tsp", 0.00492892159375),

        // Imperial volumes
        UnitDefinition::linear("Gallons (Imperial)", "imp gal", 4.54609),
        UnitDefinition::linear("Cubic Feet", "ft³", 28.316846592),
    ])
}

fn temperature_units() -> UnitCategory {
    UnitCategory::new("Temperature", vec![
        UnitDefinition::temperature("Celsius", "°C", 1.0, 0.0).as_base(),
        // C = (F - 32) * 5/9
        UnitDefinition::temperature("Fahrenheit", "°F", 5.0 / 9.0, -32.0),
        // C = K - 273.15
        UnitDefinition::temperature("Kelvin", "K", 1.0, -273.15),
        // C = (R - 491.67) * 5/9
        UnitDefinition::temperature("Rankine", "°R", 5.0 / 9.0, -491.67),
    ])
}

fn time_units() -> UnitCategory {
    UnitCategory::new("Time", vec![
        UnitDefinition::linear("Seconds", "s", 1.0).as_base(),
        UnitDefinition::linear("Milliseconds", "ms", 0.001),
        UnitDefinition::linear("Microseconds", "µs", 0.000001),
        UnitDefinition::linear("Minutes", "min", 60.0),
        UnitDefinition::linear("Hours", "h", 3600.0),
        UnitDefinition::linear("Days", "d", 86400.0),
        UnitDefinition::linear("Weeks", "wk", 604800.0),
        // Gregorian averages
        UnitDefinition::linear("Months", "mo", 2629746.0),
        UnitDefinition::linear("Years", "yr", 31556952.0),
    ])
}

fn speed_units() -> UnitCategory {
    UnitCategory::new("Speed", vec![
        UnitDefinition::linear("Meters per Second", "m/s", 1.0).as_base(),
        UnitDefinition::linear("Kilometers per Hour", "km/h", 1000.0 / 3600.0),
        UnitDefinition::linear("Miles per Hour", "mph", 0.44704),
        UnitDefinition::linear("Feet per Second", "ft/s", 0.3048),
        UnitDefinition::linear("Knots", "kn", 1852.0 / 3600.0),
    ])
}

fn area_units() -> UnitCategory {
    UnitCategory::new("Area", vec![
        UnitDefinition::linear("Square Meters", "m²", 1.0).as_base(),
        UnitDefinition::linear("Square Kilometers", "km²", 1_000_000.0),
        UnitDefinition::linear("Square Centimeters", "cm²", 0.0001),
        UnitDefinition::linear("Hectares", "ha", 10000.0),
        UnitDefinition::linear("Acres", "ac", 4046.8564224),
        UnitDefinition::linear("Square Feet", "ft²", 0.09290304),
        UnitDefinition::linear("Square Inches", "in²", 0.00064516),
        UnitDefinition::linear("Square Miles", "mi²", 2589988.110336),
    ])
}

fn data_units() -> UnitCategory {
    UnitCategory::new("Data", vec![
        UnitDefinition::linear("Bytes", "B", 1.0).as_base(),
        UnitDefinition::linear("Bits", "bit", 0.125),
        UnitDefinition::linear("Kilobytes", "kB", 1e3),
        UnitDefinition::linear("Megabytes", "MB", 1e6),
        UnitDefinition::linear("Gigabytes", "GB", 1e9),
        UnitDefinition::linear("Terabytes", "TB", 1e12),
        UnitDefinition::linear("Kibibytes", "KiB", 1024.0),
        UnitDefinition::linear("Mebibytes", "MiB", 1_048_576.0),
        UnitDefinition::linear("Gibibytes", "GiB", 1_073_741_824.0),
    ])
}

fn pressure_units() -> UnitCategory {
    UnitCategory::new("Pressure", vec![
        UnitDefinition::linear("Pascals", "Pa", 1.0).as_base(),
        UnitDefinition::linear("Kilopascals", "kPa", 1000.0),
        UnitDefinition::linear("Bars", "bar", 100000.0),
        UnitDefinition::linear("Atmospheres", "atm", 101325.0),
        UnitDefinition::linear("Pounds per Square Inch", "psi", 6894.757293168),
        UnitDefinition::linear("Millimeters of Mercury", "mmHg", 133.322387415),
    ])
}

fn energy_units() -> UnitCategory {
    UnitCategory::new("Energy", vec![
        UnitDefinition::linear("Joules", "J", 1.0).as_base(),
        UnitDefinition::linear("Kilojoules", "kJ", 1000.0),
        UnitDefinition::linear("Calories", "cal", 4.184),
        UnitDefinition::linear("Kilocalories", "kcal", 4184.0),
        UnitDefinition::linear("Watt-hours", "Wh", 3600.0),
        UnitDefinition::linear("Kilowatt-hours", "kWh", 3_600_000.0),
        UnitDefinition::linear("British Thermal Units", "BTU", 1055.05585262),
    ])
}

fn fuel_economy_units() -> UnitCategory {
    UnitCategory::new("Fuel Economy", vec![
        UnitDefinition::linear("Kilometers per Liter", "km/L", 1.0).as_base(),
        // 1.609344 km / 3.785411784 L
        UnitDefinition::linear("Miles per Gallon (US)", "mpg", 0.425143707),
        // 1.609344 km / 4.54609 L
        UnitDefinition::linear("Miles per Gallon (Imperial)", "mpg imp", 0.354006189),
        UnitDefinition::inverse("Liters per 100 Kilometers", "L/100km", 100.0)
            .with_description("Consumption: volume per distance, inverse to economy"),
    ])
}
