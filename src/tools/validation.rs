//! Validate tool call arguments against JSON Schema before execution.

use serde_json::Value;

/// Validate tool arguments against a JSON Schema.
///
/// Checks the top-level type, required fields, property types, and for
/// array properties the item type and `minItems`. Returns the first
/// violation found as a message meant for the model.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), String> {
    if schema.get("type").and_then(Value::as_str) == Some("object") && !args.is_object() {
        return Err(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        ));
    }

    let Some(obj) = args.as_object() else {
        return Ok(());
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !obj.contains_key(name) {
                return Err(format!("missing required field '{name}'"));
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    for (key, value) in obj {
        if let Some(prop_schema) = properties.get(key) {
            validate_property(key, value, prop_schema)?;
        }
    }

    Ok(())
}

fn validate_property(key: &str, value: &Value, schema: &Value) -> Result<(), String> {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        if !value_matches_type(value, expected) {
            return Err(format!(
                "field '{key}' expected type '{expected}', got {}",
                json_type_name(value)
            ));
        }
    }

    if let Some(items) = value.as_array() {
        if let Some(min) = schema.get("minItems").and_then(Value::as_u64) {
            if (items.len() as u64) < min {
                return Err(format!(
                    "field '{key}' needs at least {min} item(s), got {}",
                    items.len()
                ));
            }
        }
        if let Some(item_type) = schema
            .get("items")
            .and_then(|i| i.get("type"))
            .and_then(Value::as_str)
        {
            if let Some((idx, bad)) = items
                .iter()
                .enumerate()
                .find(|(_, item)| !value_matches_type(item, item_type))
            {
                return Err(format!(
                    "field '{key}[{idx}]' expected type '{item_type}', got {}",
                    json_type_name(bad)
                ));
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
