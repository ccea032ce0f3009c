//! Host `+` operator
//!
//! `sum` folds with the host's addition, so its behavior on mixed or
//! non-numeric input is exactly what `+` does for those operands.

use crate::span::Span;
use crate::value::{RuntimeError, Value};
use tarsier_config::OverflowMode;

/// Evaluate `left + right`
///
/// - INTEGER + INTEGER: integer addition, overflow handled per `overflow`
/// - STRING + STRING: concatenation
/// - operands of different types: type mismatch
/// - anything else: unknown operator
pub fn add(
    left: &Value,
    right: &Value,
    span: Span,
    overflow: OverflowMode,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match overflow {
            OverflowMode::Checked => a
                .checked_add(*b)
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::IntegerOverflow {
                    operator: "+".to_string(),
                    span,
                }),
            OverflowMode::Wrapping => Ok(Value::Integer(a.wrapping_add(*b))),
        },
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name().to_string(),
            operator: "+".to_string(),
            right: right.type_name().to_string(),
            span,
        }),
        _ => Err(RuntimeError::UnknownOperator {
            left: left.type_name().to_string(),
            operator: "+".to_string(),
            right: right.type_name().to_string(),
            span,
        }),
    }
}
