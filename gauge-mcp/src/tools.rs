//! Tool definitions and handlers

use serde_json::{json, Value as JsonValue};
use tracing::debug;
use gauge_core::{GaugeError, UnitCategory, UnitDefinition};
use gauge_units::{convert_checked, convert_to_all, format_value, Catalog, ConversionResult};
use crate::McpError;

/// `tools/list` payload
pub(crate) fn list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value from one unit to another unit of the same category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Value to convert" },
                        "from": { "type": "string", "description": "Source unit symbol (e.g. \"km\")" },
                        "to": { "type": "string", "description": "Target unit symbol (e.g. \"mi\")" },
                        "category": { "type": "string", "description": "Resolve symbols within this category" }
                    },
                    "required": ["value", "from", "to"]
                }
            },
            {
                "name": "convert_all",
                "description": "Convert a value into every unit of the source unit's category. Units that cannot be converted are left out.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"], "description": "Value to convert" },
                        "from": { "type": "string", "description": "Source unit symbol" },
                        "category": { "type": "string", "description": "Resolve the symbol within this category" }
                    },
                    "required": ["value", "from"]
                }
            },
            {
                "name": "swap",
                "description": "Convert a value expressed in 'to' back into 'from'.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"] },
                        "from": { "type": "string" },
                        "to": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["value", "from", "to"]
                }
            },
            {
                "name": "list_categories",
                "description": "List unit categories, grouped. Pass a group to list only its categories.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "group": { "type": "string", "description": "Category group (e.g. \"Common\")" }
                    }
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category, in catalog order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category name (e.g. \"Length\")" }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "format",
                "description": "Render a number the way conversion results are rendered.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": ["number", "string"] }
                    },
                    "required": ["value"]
                }
            }
        ]
    })
}

/// Dispatch a `tools/call`
pub(crate) fn call(catalog: &Catalog, name: &str, args: &JsonValue) -> Result<JsonValue, McpError> {
    debug!(tool = name, "tool call");
    let outcome = match name {
        "convert" => tool_convert(catalog, args, false),
        "swap" => tool_convert(catalog, args, true),
        "convert_all" => tool_convert_all(catalog, args),
        "list_categories" => tool_list_categories(catalog, args),
        "list_units" => tool_list_units(catalog, args),
        "format" => tool_format(args),
        _ => return Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    };

    Ok(outcome.unwrap_or_else(error_result))
}

fn error_result(err: GaugeError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": format!("Error: {}", err) }],
        "error": err,
        "isError": true
    })
}

/// Numbers, or strings that parse as numbers
fn arg_number(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, GaugeError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(GaugeError::arg_missing(tool, arg)),
        Some(JsonValue::Number(n)) => n.as_f64().ok_or_else(|| GaugeError::arg_type(tool, arg, "a number")),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>()
            .map_err(|_| GaugeError::arg_type(tool, arg, "a number")),
        Some(_) => Err(GaugeError::arg_type(tool, arg, "a number")),
    }
}

fn arg_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<&'a str, GaugeError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(GaugeError::arg_missing(tool, arg)),
        Some(v) => v.as_str().ok_or_else(|| GaugeError::arg_type(tool, arg, "a string")),
    }
}

fn arg_optional_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<Option<&'a str>, GaugeError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| GaugeError::arg_type(tool, arg, "a string")),
    }
}

/// Resolve a symbol, within `category` when one is given
fn resolve<'a>(
    catalog: &'a Catalog,
    symbol: &str,
    category: Option<&'a UnitCategory>,
) -> Result<(&'a UnitDefinition, &'a UnitCategory), GaugeError> {
    match category {
        Some(category) => catalog.find_unit_in(symbol, category)
            .map(|unit| (unit, category))
            .ok_or_else(|| GaugeError::unknown_unit(symbol)),
        None => Ok(catalog.require_unit(symbol)?),
    }
}

fn resolve_category<'a>(catalog: &'a Catalog, name: Option<&str>) -> Result<Option<&'a UnitCategory>, GaugeError> {
    match name {
        Some(name) => Ok(Some(catalog.require_category(name)?)),
        None => Ok(None),
    }
}

/// First category holding both symbols; symbols may repeat across categories
fn shared_category<'a>(catalog: &'a Catalog, from: &str, to: &str) -> Option<&'a UnitCategory> {
    catalog.categories().find(|c| c.contains(from) && c.contains(to))
}

fn tool_convert(catalog: &Catalog, args: &JsonValue, swapped: bool) -> Result<JsonValue, GaugeError> {
    let tool = if swapped { "swap" } else { "convert" };
    let value = arg_number(args, tool, "value")?;
    let mut from_symbol = arg_text(args, tool, "from")?;
    let mut to_symbol = arg_text(args, tool, "to")?;
    if swapped {
        std::mem::swap(&mut from_symbol, &mut to_symbol);
    }
    let category = resolve_category(catalog, arg_optional_text(args, tool, "category")?)?;

    let scope = category.or_else(|| shared_category(catalog, from_symbol, to_symbol));
    let (from, from_category) = resolve(catalog, from_symbol, scope)?;
    let to = match catalog.find_unit_in(to_symbol, from_category) {
        Some(unit) => unit,
        None if category.is_none() && catalog.find_unit(to_symbol).is_some() => {
            return Err(GaugeError::category_mismatch(from_symbol, to_symbol));
        }
        None => return Err(GaugeError::unknown_unit(to_symbol)),
    };

    let converted = convert_checked(value, from, to)?;
    let result = ConversionResult::new(converted, to.clone());

    Ok(json!({
        "content": [{ "type": "text", "text": format!("{} {} = {}", format_value(value), from.symbol, result) }],
        "value": result.value,
        "formattedValue": result.formatted_value,
        "from": from.symbol,
        "to": to.symbol,
        "category": from_category.name,
        "isError": false
    }))
}

fn tool_convert_all(catalog: &Catalog, args: &JsonValue) -> Result<JsonValue, GaugeError> {
    let value = arg_number(args, "convert_all", "value")?;
    let from_symbol = arg_text(args, "convert_all", "from")?;
    let category = resolve_category(catalog, arg_optional_text(args, "convert_all", "category")?)?;
    let (from, category) = resolve(catalog, from_symbol, category)?;

    let results = convert_to_all(value, from, &category.units);
    let text = results.iter()
        .map(|r| format!("{} ({})", r, r.unit.name))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "category": category.name,
        "input": { "value": value, "unit": from.symbol },
        "results": results.iter().map(|r| json!({
            "value": r.value,
            "formattedValue": r.formatted_value,
            "unit": r.unit.symbol,
            "name": r.unit.name
        })).collect::<Vec<_>>(),
        "isError": false
    }))
}

fn tool_list_categories(catalog: &Catalog, args: &JsonValue) -> Result<JsonValue, GaugeError> {
    let group = arg_optional_text(args, "list_categories", "group")?;

    let groups: Vec<JsonValue> = catalog.groups().iter()
        .filter(|g| group.map_or(true, |name| g.name == name))
        .map(|g| json!({
            "group": g.name,
            "categories": g.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
        }))
        .collect();

    let text = groups.iter()
        .map(|g| format!("{}: {}", g["group"].as_str().unwrap_or(""), g["categories"]))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "groups": groups
    }))
}

fn tool_list_units(catalog: &Catalog, args: &JsonValue) -> Result<JsonValue, GaugeError> {
    let name = arg_text(args, "list_units", "category")?;
    let category = catalog.require_category(name)?;

    let units: Vec<JsonValue> = category.units.iter()
        .map(|u| json!({
            "symbol": u.symbol,
            "name": u.name,
            "base": u.is_base,
            "description": u.description
        }))
        .collect();

    let text = category.units.iter()
        .map(|u| format!("{} ({})", u.symbol, u.name))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "category": category.name,
        "units": units,
        "isError": false
    }))
}

fn tool_format(args: &JsonValue) -> Result<JsonValue, GaugeError> {
    let value = arg_number(args, "format", "value")?;
    let formatted = format_value(value);
    Ok(json!({
        "content": [{ "type": "text", "text": formatted }],
        "formattedValue": formatted,
        "isError": false
    }))
}
