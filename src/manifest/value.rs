//! Text rendering of loosely-typed manifest values.
//!
//! Override values in `extra.wordpress` and composer's `license` are free-form
//! JSON. They render the way a template literal would: strings verbatim,
//! integral numbers without a fraction, lists comma-joined. "Falsy" values
//! (`null`, `false`, `0`, `""`) count as absent.
use serde_json::Value;

/// Render `value` as header text, or `None` when it is falsy.
#[must_use]
pub fn header_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
        other => Some(render(other)),
    }
}

/// Render `value` as text regardless of truthiness (`null` renders empty).
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
