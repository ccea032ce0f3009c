//! Standard library functions

pub mod array;
pub mod ops;

use crate::span::Span;
use crate::value::{RuntimeError, Value, ValueArray};
use tarsier_config::OverflowMode;
use tracing::trace;

/// Names of all builtins, in registration order
pub const BUILTINS: &[&str] = &["map", "reduce", "sum"];

/// Check if a function name is a stdlib builtin
pub fn is_builtin(name: &str) -> bool {
    matches!(name, "map" | "reduce" | "sum")
}

/// Call a builtin by name
pub fn call_builtin(
    name: &str,
    args: &[Value],
    span: Span,
    overflow: OverflowMode,
) -> Result<Value, RuntimeError> {
    trace!(builtin = name, argc = args.len(), span = %span, "dispatching builtin");

    match name {
        "map" => array::map(args, span),
        "reduce" => array::reduce(args, span),
        "sum" => array::sum(args, span, overflow),
        _ => Err(RuntimeError::UnknownFunction {
            name: name.to_string(),
            span,
        }),
    }
}

/// Check the argument count of a builtin call
fn expect_arity(
    name: &str,
    args: &[Value],
    expected: usize,
    span: Span,
) -> Result<(), RuntimeError> {
    if args.len() != expected {
        return Err(RuntimeError::WrongArgumentCount {
            name: name.to_string(),
            expected,
            found: args.len(),
            span,
        });
    }
    Ok(())
}

/// Extract array from value
fn extract_array<'a>(
    name: &str,
    value: &'a Value,
    span: Span,
) -> Result<&'a ValueArray, RuntimeError> {
    value.as_array().ok_or_else(|| RuntimeError::NotAnArray {
        name: name.to_string(),
        found: value.type_name().to_string(),
        span,
    })
}

/// Extract a callable from value
fn extract_callable(value: &Value, span: Span) -> Result<&Value, RuntimeError> {
    if value.is_callable() {
        Ok(value)
    } else {
        Err(RuntimeError::NotAFunction {
            found: value.type_name().to_string(),
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list_matches_predicate() {
        for name in BUILTINS {
            assert!(is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!is_builtin("filter"));
        assert!(!is_builtin("len"));
    }

    #[test]
    fn test_builtins_match_config_prelude() {
        assert_eq!(BUILTINS, tarsier_config::DEFAULT_PRELUDE);
    }

    #[test]
    fn test_unknown_builtin() {
        let err =
            call_builtin("filter", &[], Span::new(1, 7), OverflowMode::Checked).unwrap_err();
        assert_eq!(err.to_string(), "identifier not found: filter");
        assert_eq!(err.span(), Span::new(1, 7));
    }

    #[test]
    fn test_dispatch_sum() {
        let arr = Value::array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        let result = call_builtin("sum", &[arr], Span::dummy(), OverflowMode::Checked).unwrap();
        assert_eq!(result, Value::Integer(6));
    }
}
