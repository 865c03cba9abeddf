// src/message.rs
//! Reduces a chat message of any JSON shape to the text that gets counted.
//!
//! Normalization is total: missing keys and unexpected shapes fall back to
//! empty or coerced text instead of failing.

use serde_json::Value;

/// Returns the countable text of one message.
///
/// Objects yield their `content` entry (see [`content_text`]); any other
/// value is coerced whole.
#[must_use]
pub fn normalize(message: &Value) -> String {
    match message {
        Value::Object(map) => map.get("content").map_or_else(String::new, content_text),
        other => coerce(other),
    }
}

/// Flattens a `content` entry.
///
/// A list is treated as content parts: the `text` of each object part is
/// concatenated in order with no separator. Parts that are not objects or
/// have no `text` add nothing.
#[must_use]
pub fn content_text(content: &Value) -> String {
    match content {
        Value::Array(parts) => parts.iter().filter_map(part_text).collect(),
        other => coerce(other),
    }
}

fn part_text(part: &Value) -> Option<String> {
    match part {
        Value::Object(map) => match map.get("text") {
            Some(Value::String(text)) => Some(text.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Textual form of a value, rendered the way a Python `str()` of the
/// decoded JSON reads: strings verbatim, `None`/`True`/`False`, and
/// containers as `{'key': value, ...}` / `[a, b]` in source order.
#[must_use]
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(&mut out, other);
            out
        }
    }
}

fn write_repr(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&number_repr(n)),
        Value::String(s) => write_str_repr(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_str_repr(out, key);
                out.push_str(": ");
                write_repr(out, item);
            }
            out.push('}');
        }
    }
}

/// Quoted string literal: single quotes unless the text holds a single
/// quote and no double quote.
fn write_str_repr(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn number_repr(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => float_repr(f),
        _ => n.to_string(),
    }
}

/// Shortest round-trip float text, positional for exponents in `-4..16`
/// and scientific (`1e+16`, `1.5e-07`) outside it.
fn float_repr(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }
    let sci = format!("{f:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    if (-4..16).contains(&exp) {
        let fixed = f.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}
