//! Loose accessors for JSON-RPC responses. Nothing here validates the shape of a
//! response; a body that is not an object simply has no `result` or `error`.

use serde_json::Value;

/// The `result` member of a response, if there is one.
pub fn result_of(response: &Value) -> Option<&Value> {
    response.get("result")
}

/// The `error` member of a response, if there is one.
pub fn error_of(response: &Value) -> Option<&Value> {
    response.get("error")
}

/// Whether a value counts as present: `null`, `false`, zero and empty
/// strings, arrays and objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Parse a `0x`-prefixed hex quantity such as a header's `number`.
pub fn hex_quantity(value: &Value) -> Option<u64> {
    let digits = value.as_str()?.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}

/// Cut a string down to at most `max` characters.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
