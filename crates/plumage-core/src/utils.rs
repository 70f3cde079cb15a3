use ryu_js::Buffer;
use serde_json::Value;

/// Formats a number the way the JavaScript renderer prints it (`3` rather than `3.0`,
/// `NaN`, `Infinity`).
pub fn fmt_number(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let mut b = Buffer::new();
    b.format(v).to_string()
}

/// Renders a scalar control value as plain text: strings verbatim, numbers via
/// [`fmt_number`], everything else through its JSON form. `None` for null.
pub fn value_to_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(fmt_number),
        },
        other => Some(other.to_string()),
    }
}

/// Interprets a loosely typed UI toggle. Accepts JSON booleans and the strings `yes`/`no`
/// (also `true`/`false`, `on`/`off`), case-insensitively.
pub fn value_is_enabled(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "yes" | "true" | "on"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Lenient number extraction: JSON numbers and numeric strings.
pub fn value_as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}
