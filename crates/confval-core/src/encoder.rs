//! Canonical serialization of a [`Value`] tree.
//!
//! The output grammar is JSON:
//!
//! - **Null / Bool**: `null`, `true`, `false`
//! - **Number**: shortest round-trip decimal, integral values without a fraction,
//!   exponent form outside `[1e-6, 1e21)`, `-0` as `0`, non-finite as `null`
//! - **String**: double-quoted with standard escapes
//! - **List / Dict**: bracketed and braced, dict entries in insertion order
//!
//! Compact output has no whitespace at all. Pretty output puts every element on
//! its own line with two spaces of indentation per level, and `"key": value`
//! separators. Empty containers are always `[]` / `{}`.
//!
//! # Example
//! ```
//! use confval_core::Value;
//! let v: Value = [("port", Value::from(7788)), ("debug", Value::from(true))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(v.to_text(false), r#"{"port":7788,"debug":true}"#);
//! assert_eq!(v.to_text(true), "{\n  \"port\": 7788,\n  \"debug\": true\n}");
//! ```

use std::fmt;

use crate::value::{Dict, Value};

impl Value {
    /// Render the canonical text. `pretty` selects the indented layout.
    pub fn to_text(&self, pretty: bool) -> String {
        encode(self, pretty)
    }
}

/// `{}` renders compact text, `{:#}` renders the pretty layout.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self, f.alternate()))
    }
}

/// Encode a value tree to its canonical text.
pub fn encode(value: &Value, pretty: bool) -> String {
    let mut out = String::new();
    encode_value(value, pretty, 0, &mut out);
    out
}

fn encode_value(value: &Value, pretty: bool, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => encode_string(s, out),
        Value::List(list) => encode_list(list, pretty, depth, out),
        Value::Dict(dict) => encode_dict(dict, pretty, depth, out),
    }
}

fn encode_list(list: &[Value], pretty: bool, depth: usize, out: &mut String) {
    if list.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            out.push_str(&make_indent(depth + 1));
        }
        encode_value(item, pretty, depth + 1, out);
    }
    close(']', pretty, depth, out);
}

fn encode_dict(dict: &Dict, pretty: bool, depth: usize, out: &mut String) {
    if dict.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in dict.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            out.push_str(&make_indent(depth + 1));
        }
        encode_string(key, out);
        out.push_str(if pretty { ": " } else { ":" });
        encode_value(value, pretty, depth + 1, out);
    }
    close('}', pretty, depth, out);
}

fn close(bracket: char, pretty: bool, depth: usize, out: &mut String) {
    if pretty {
        out.push('\n');
        out.push_str(&make_indent(depth));
    }
    out.push(bracket);
}

/// Format a number as the shortest decimal that parses back to the same `f64`.
///
/// `Display` for `f64` already picks the shortest digits, and prints integral
/// values without a fraction. Very large and very small magnitudes switch to
/// `LowerExp` so `1e300` does not expand to 301 digits.
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    // Normalize -0 to 0
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

/// Emit a double-quoted string with JSON escapes.
fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Generate a 2-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
