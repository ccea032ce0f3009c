//! Callback-based array functions: map, reduce, sum
//!
//! Each builtin validates its arguments up front (count, array, callable),
//! then runs the generic loop from [`crate::sequence`] over the array's
//! elements. The input array is never modified; callback errors stop the
//! iteration and are returned unchanged.

use super::{expect_arity, extract_array, extract_callable, ops};
use crate::sequence;
use crate::span::Span;
use crate::value::{RuntimeError, Value, ValueArray};
use std::slice;
use tarsier_config::OverflowMode;

/// `map(array, transform)`
///
/// Returns a new array holding `transform(e)` for each element `e`, in order.
pub fn map(args: &[Value], span: Span) -> Result<Value, RuntimeError> {
    expect_arity("map", args, 2, span)?;
    let arr = extract_array("map", &args[0], span)?;
    let transform = extract_callable(&args[1], span)?;

    let mapped = sequence::try_map_into(
        arr.as_slice(),
        ValueArray::with_capacity(arr.len()),
        |element| transform.call(slice::from_ref(element), span),
    )?;

    Ok(Value::Array(mapped))
}

/// `reduce(array, initial, combine)`
///
/// Left fold: `combine(combine(combine(initial, a), b), c)`. Returns
/// `initial` when the array is empty.
pub fn reduce(args: &[Value], span: Span) -> Result<Value, RuntimeError> {
    expect_arity("reduce", args, 3, span)?;
    let arr = extract_array("reduce", &args[0], span)?;
    let combine = extract_callable(&args[2], span)?;

    sequence::try_reduce(arr.as_slice(), args[1].clone(), |result, element| {
        combine.call(&[result, element.clone()], span)
    })
}

/// `sum(array)`
///
/// `reduce(array, 0, +)` with the host `+`: integers add, and anything else
/// fails the way `0 + element` would.
///
/// Integer overflow follows `overflow`. The default, `Checked`, reports
/// `IntegerOverflow` where the host's own `+` wraps silently; pass
/// `OverflowMode::Wrapping` to get the host's result.
pub fn sum(args: &[Value], span: Span, overflow: OverflowMode) -> Result<Value, RuntimeError> {
    expect_arity("sum", args, 1, span)?;
    let arr = extract_array("sum", &args[0], span)?;

    sequence::try_reduce(arr.as_slice(), Value::Integer(0), |total, element| {
        ops::add(&total, element, span, overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ints(values: &[i64]) -> Value {
        Value::array(values.iter().copied().map(Value::Integer).collect())
    }

    fn double() -> Value {
        Value::native(|args| match args {
            [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
            [other] => Err(RuntimeError::TypeError {
                msg: format!("cannot double {}", other.type_name()),
                span: Span::dummy(),
            }),
            _ => Ok(Value::Null),
        })
    }

    fn add_fn() -> Value {
        Value::native(|args| ops::add(&args[0], &args[1], Span::dummy(), OverflowMode::Checked))
    }

    #[test]
    fn test_map_doubles() {
        let result = map(&[ints(&[1, 2, 3]), double()], Span::dummy()).unwrap();
        assert_eq!(result, ints(&[2, 4, 6]));
    }

    #[test]
    fn test_map_empty() {
        let result = map(&[ints(&[]), double()], Span::dummy()).unwrap();
        assert_eq!(result, ints(&[]));
    }

    #[test]
    fn test_map_leaves_input_untouched() {
        let input = ints(&[1, 2, 3]);
        let _ = map(&[input.clone(), double()], Span::dummy()).unwrap();
        assert_eq!(input, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_map_propagates_callback_error() {
        let input = Value::array(vec![Value::Integer(1), Value::Bool(true)]);
        let err = map(&[input, double()], Span::dummy()).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot double BOOLEAN");
    }

    #[test]
    fn test_map_wrong_arity() {
        let err = map(&[ints(&[1])], Span::new(0, 3)).unwrap_err();
        assert_eq!(err.to_string(), "wrong number of arguments to map: want=2, got=1");
    }

    #[test]
    fn test_map_non_array() {
        let err = map(&[Value::Integer(5), double()], Span::dummy()).unwrap_err();
        assert_eq!(err.to_string(), "argument to `map` must be ARRAY, got INTEGER");
    }

    #[test]
    fn test_map_non_function_rejected_even_for_empty_array() {
        let err = map(&[ints(&[]), Value::Integer(1)], Span::dummy()).unwrap_err();
        assert_eq!(err.to_string(), "not a function: INTEGER");
    }

    #[test]
    fn test_reduce_sums() {
        let result = reduce(&[ints(&[1, 2, 3]), Value::Integer(0), add_fn()], Span::dummy());
        assert_eq!(result.unwrap(), Value::Integer(6));
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let initial = Value::string("unchanged");
        let result = reduce(&[ints(&[]), initial.clone(), add_fn()], Span::dummy()).unwrap();
        assert_eq!(result, initial);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let words = Value::array(vec![Value::string("a"), Value::string("b"), Value::string("c")]);
        let result = reduce(&[words, Value::string(""), add_fn()], Span::dummy()).unwrap();
        assert_eq!(result, Value::string("abc"));
    }

    #[test]
    fn test_reduce_wrong_arity() {
        let err = reduce(&[ints(&[1]), add_fn()], Span::dummy()).unwrap_err();
        assert_eq!(err.to_string(), "wrong number of arguments to reduce: want=3, got=2");
    }

    #[test]
    fn test_sum() {
        assert_eq!(
            sum(&[ints(&[])], Span::dummy(), OverflowMode::Checked).unwrap(),
            Value::Integer(0)
        );
        assert_eq!(
            sum(&[ints(&[1, 2, 3])], Span::dummy(), OverflowMode::Checked).unwrap(),
            Value::Integer(6)
        );
    }

    #[test]
    fn test_sum_non_numeric() {
        let input = Value::array(vec![Value::Integer(1), Value::string("x")]);
        let err = sum(&[input], Span::dummy(), OverflowMode::Checked).unwrap_err();
        assert_eq!(err.to_string(), "type mismatch: INTEGER + STRING");
    }

    #[test]
    fn test_sum_overflow_modes() {
        let input = ints(&[i64::MAX, 1]);
        let err = sum(&[input.clone()], Span::dummy(), OverflowMode::Checked).unwrap_err();
        assert!(matches!(err, RuntimeError::IntegerOverflow { .. }));

        let wrapped = sum(&[input], Span::dummy(), OverflowMode::Wrapping).unwrap();
        assert_eq!(wrapped, Value::Integer(i64::MIN));
    }
}
