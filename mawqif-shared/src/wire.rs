use serde_json::Value;

/// Ordered list of wire names accepted for one canonical field.
///
/// Backends have shipped the same attribute as PascalCase, camelCase and
/// snake_case at different times; readers try each alias in order and take
/// the first non-null hit.
pub type FieldAliases = &'static [&'static str];

/// First non-null value found under any of the aliases.
pub fn field<'a>(record: &'a Value, aliases: FieldAliases) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|name| record.get(name))
        .find(|value| !value.is_null())
}

/// String field, defaulting to empty when absent or mistyped.
pub fn string_field(record: &Value, aliases: FieldAliases) -> String {
    field(record, aliases)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional string field, None when absent, mistyped or empty.
pub fn opt_string_field(record: &Value, aliases: FieldAliases) -> Option<String> {
    field(record, aliases)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric field, defaulting to zero when absent or mistyped.
pub fn f64_field(record: &Value, aliases: FieldAliases) -> f64 {
    field(record, aliases).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Non-negative integer field, defaulting to zero. Negative wire values
/// clamp to zero rather than wrapping.
pub fn u32_field(record: &Value, aliases: FieldAliases) -> u32 {
    field(record, aliases)
        .and_then(Value::as_i64)
        .map(|n| n.max(0).min(u32::MAX as i64) as u32)
        .unwrap_or(0)
}

/// Identifier field: accepts either a JSON string or a number, normalized
/// to its string form. Defaults to empty when absent.
pub fn id_field(record: &Value, aliases: FieldAliases) -> String {
    match field(record, aliases) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
