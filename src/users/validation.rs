//! Boundary validation for user payloads
//!
//! Validation semantics:
//! - Body must be well-formed JSON
//! - Body must be an object
//! - `id` and `age` must be integers that fit in i64; whole-number floats
//!   (`30.0`) and integer strings (`"30"`) are accepted as integers
//! - `name` must be a JSON string
//! - `null` is a type error, never a default
//! - Undeclared fields are ignored
//!
//! Every offending field is reported, not only the first one.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::user::User;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Location of the offending value, e.g. `["body", "age"]`
    pub loc: Vec<String>,
    /// Human-readable message
    pub msg: String,
    /// Expected type or condition
    pub expected: String,
    /// JSON type (or condition) actually found
    pub actual: String,
}

impl FieldIssue {
    pub fn new(
        loc: &[&str],
        msg: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(&["body", field], "Field required", "field to be present", "missing")
    }

    pub fn type_mismatch(loc: &[&str], expected: &str, actual: &str) -> Self {
        Self::new(
            loc,
            format!("Input should be a valid {}", expected),
            expected,
            actual,
        )
    }
}

/// A payload or path parameter did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", self.summary())]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn single(issue: FieldIssue) -> Self {
        Self::new(vec![issue])
    }

    /// Body could not be parsed as JSON at all.
    pub fn malformed_json(reason: impl Into<String>) -> Self {
        Self::single(FieldIssue::new(
            &["body"],
            format!("JSON decode error: {}", reason.into()),
            "valid JSON",
            "malformed",
        ))
    }

    /// Path segment `name` did not parse as an integer.
    pub fn invalid_path_integer(name: &str, raw: &str) -> Self {
        Self::single(FieldIssue::new(
            &["path", name],
            "Input should be a valid integer, unable to parse string as an integer",
            "integer",
            raw,
        ))
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.loc.join("."), i.msg))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Parse and validate a raw request body into a [`User`].
pub fn parse_user(body: &[u8]) -> Result<User, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::malformed_json(e.to_string()))?;
    validate_user(&value)
}

/// Validate an already-decoded JSON value into a [`User`].
pub fn validate_user(value: &Value) -> Result<User, ValidationError> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::single(FieldIssue::type_mismatch(
            &["body"],
            "object",
            json_type_name(value),
        ))
    })?;

    let mut issues = Vec::new();
    let id = integer_field(obj, "id", &mut issues);
    let name = string_field(obj, "name", &mut issues);
    let age = integer_field(obj, "age", &mut issues);

    match (id, name, age) {
        (Some(id), Some(name), Some(age)) if issues.is_empty() => Ok(User { id, name, age }),
        _ => Err(ValidationError::new(issues)),
    }
}

fn integer_field(obj: &Map<String, Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<i64> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(field));
            None
        }
        Some(value) => match lax_integer(value) {
            Ok(v) => Some(v),
            Err((msg, actual)) => {
                issues.push(FieldIssue::new(&["body", field], msg, "integer", actual));
                None
            }
        },
    }
}

/// Reads an integer the way a JSON client expects it to be read:
/// integers, floats without a fractional part and integer strings.
fn lax_integer(value: &Value) -> Result<i64, (&'static str, &'static str)> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() != 0.0 => Err((
                    "Input should be a valid integer, got a number with a fractional part",
                    "float",
                )),
                Some(f) if n.is_f64() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(("Input should fit in a signed 64-bit integer", "out of range")),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            (
                "Input should be a valid integer, unable to parse string as an integer",
                "string",
            )
        }),
        other => Err(("Input should be a valid integer", json_type_name(other))),
    }
}

fn string_field(obj: &Map<String, Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::missing_field(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(
                &["body", field],
                "string",
                json_type_name(other),
            ));
            None
        }
    }
}

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
