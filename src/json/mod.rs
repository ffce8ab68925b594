//! JSON parsing that keeps integers at full precision.
//!
//! Parsing happens in two passes:
//!
//! 1. `serde_json` (built with `arbitrary_precision`) parses the text into a tree
//!    whose number nodes still carry their literal text.
//! 2. That tree is walked and every number is decided on its own literal: integer
//!    literals become [`Value::Int`], everything else becomes [`Value::Float`].
//!
//! A value such as `123456789012345678` therefore comes back exactly, where an
//! `f64` would have rounded it to `123456789012345680`.

pub mod error;
pub mod value;

pub use error::ParseError;
pub use value::{Map, Value};

use num_bigint::BigInt;

/// Parses JSON text into a [`Value`] tree.
///
/// # Arguments
///
/// * `text` - The JSON document
///
/// # Returns
///
/// `Ok(Value)` on success, or `Err(ParseError)` if the text is not well-formed JSON
/// or contains a non-integer number too large for `f64`.
///
/// # Examples
///
/// ```
/// use sdk_utils::json::{parse_json, Value};
///
/// let value = parse_json(r#"{"a": 123456789012345678, "b": 0.5}"#).unwrap();
/// assert_eq!(value["a"].to_string(), "123456789012345678");
/// assert_eq!(value["b"], Value::Float(0.5));
/// ```
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    log::trace!("parsing {} bytes of JSON", text.len());
    let raw: serde_json::Value = serde_json::from_str(text)?;
    promote(raw)
}

/// Converts the intermediate tree, deciding each number from its own literal.
fn promote(node: serde_json::Value) -> Result<Value, ParseError> {
    Ok(match node {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => promote_number(&n.to_string())?,
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(promote)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_json::Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(key, value)| Ok((key, promote(value)?)))
                .collect::<Result<Map, ParseError>>()?,
        ),
    })
}

fn promote_number(literal: &str) -> Result<Value, ParseError> {
    let out_of_range = || ParseError::NumberOutOfRange {
        literal: literal.to_string(),
    };

    if is_integer_literal(literal) {
        let n: BigInt = literal.parse().map_err(|_| out_of_range())?;
        return Ok(Value::Int(n));
    }

    match literal.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(out_of_range()),
    }
}

/// An optional minus sign followed only by digits.
fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
