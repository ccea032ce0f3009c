//! Type conversion between Rust and Tarsier values
//!
//! Provides traits and implementations for bidirectional conversion:
//! - `ToTarsier` - Convert Rust types to Tarsier `Value`
//! - `FromTarsier` - Convert Tarsier `Value` to Rust types
//! - JSON interop through `serde_json::Value`
//!
//! # Examples
//!
//! ```
//! use tarsier_runtime::api::{FromTarsier, ToTarsier};
//! use tarsier_runtime::Value;
//!
//! let value: Value = vec![1i64, 2, 3].to_tarsier();
//! assert_eq!(value.to_string(), "[1, 2, 3]");
//!
//! let back: Vec<i64> = FromTarsier::from_tarsier(&value).unwrap();
//! assert_eq!(back, vec![1, 2, 3]);
//! ```

use crate::value::Value;
use thiserror::Error;

/// Error type for value conversion failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Type mismatch during conversion
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    /// Array element type mismatch
    #[error("Array element type mismatch at index {index}: expected {expected}, found {found}")]
    ArrayElementTypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Trait for converting Tarsier `Value` to Rust types
pub trait FromTarsier: Sized {
    /// Convert from Tarsier `Value` to Rust type
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if the value cannot be converted to the target type.
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError>;
}

/// Trait for converting Rust types to Tarsier `Value`
pub trait ToTarsier {
    /// Convert from Rust type to Tarsier `Value`
    fn to_tarsier(self) -> Value;
}

fn mismatch(expected: &str, value: &Value) -> ConversionError {
    ConversionError::TypeMismatch {
        expected: expected.to_string(),
        found: value.type_name().to_string(),
    }
}

// Value passes through unchanged

impl FromTarsier for Value {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl ToTarsier for Value {
    fn to_tarsier(self) -> Value {
        self
    }
}

// Implementations for i64 (integer)

impl FromTarsier for i64 {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Integer(n) => Ok(*n),
            _ => Err(mismatch("INTEGER", value)),
        }
    }
}

impl ToTarsier for i64 {
    fn to_tarsier(self) -> Value {
        Value::Integer(self)
    }
}

// Implementations for bool

impl FromTarsier for bool {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(mismatch("BOOLEAN", value)),
        }
    }
}

impl ToTarsier for bool {
    fn to_tarsier(self) -> Value {
        Value::Bool(self)
    }
}

// Implementations for String

impl FromTarsier for String {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::String(s) => Ok(s.to_string()),
            _ => Err(mismatch("STRING", value)),
        }
    }
}

impl ToTarsier for String {
    fn to_tarsier(self) -> Value {
        Value::string(self)
    }
}

impl ToTarsier for &str {
    fn to_tarsier(self) -> Value {
        Value::string(self)
    }
}

// Implementations for () (null)

impl FromTarsier for () {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(()),
            _ => Err(mismatch("NULL", value)),
        }
    }
}

impl ToTarsier for () {
    fn to_tarsier(self) -> Value {
        Value::Null
    }
}

// Option<T>: None <-> null

impl<T: FromTarsier> FromTarsier for Option<T> {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_tarsier(other).map(Some),
        }
    }
}

impl<T: ToTarsier> ToTarsier for Option<T> {
    fn to_tarsier(self) -> Value {
        match self {
            Some(v) => v.to_tarsier(),
            None => Value::Null,
        }
    }
}

// Vec<T> <-> array

impl<T: FromTarsier> FromTarsier for Vec<T> {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        let arr = value.as_array().ok_or_else(|| mismatch("ARRAY", value))?;
        arr.iter()
            .enumerate()
            .map(|(index, element)| {
                T::from_tarsier(element).map_err(|e| match e {
                    ConversionError::TypeMismatch { expected, found } => {
                        ConversionError::ArrayElementTypeMismatch {
                            index,
                            expected,
                            found,
                        }
                    }
                    nested => nested,
                })
            })
            .collect()
    }
}

impl<T: ToTarsier> ToTarsier for Vec<T> {
    fn to_tarsier(self) -> Value {
        Value::array(self.into_iter().map(ToTarsier::to_tarsier).collect())
    }
}

// JSON interop

impl FromTarsier for serde_json::Value {
    fn from_tarsier(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Integer(n) => Ok(serde_json::Value::from(*n)),
            Value::String(s) => Ok(serde_json::Value::String(s.to_string())),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Null => Ok(serde_json::Value::Null),
            Value::Array(arr) => arr
                .iter()
                .map(serde_json::Value::from_tarsier)
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::NativeFunction(_) => Err(mismatch("JSON-representable value", value)),
        }
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = ConversionError;

    /// JSON integers, strings, bools, null and arrays map onto Tarsier values.
    /// Floats and objects have no Tarsier counterpart.
    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::String(s) => Ok(Value::string(s.as_str())),
            serde_json::Value::Number(n) => {
                n.as_i64()
                    .map(Value::Integer)
                    .ok_or_else(|| ConversionError::TypeMismatch {
                        expected: "INTEGER".to_string(),
                        found: format!("number {}", n),
                    })
            }
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::array),
            serde_json::Value::Object(_) => Err(ConversionError::TypeMismatch {
                expected: "JSON array or scalar".to_string(),
                found: "object".to_string(),
            }),
        }
    }
}
