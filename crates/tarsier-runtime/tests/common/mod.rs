//! Shared helpers for runtime integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tarsier_runtime::api::Runtime;
use tarsier_runtime::span::Span;
use tarsier_runtime::value::{RuntimeError, Value};

/// Array of integers
pub fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Integer).collect())
}

/// Unary integer callback
pub fn int_fn(f: impl Fn(i64) -> i64 + Send + Sync + 'static) -> Value {
    Value::native(move |args| match args {
        [Value::Integer(n)] => Ok(Value::Integer(f(*n))),
        _ => Err(RuntimeError::TypeError {
            msg: format!("expected one INTEGER, got {:?}", args),
            span: Span::dummy(),
        }),
    })
}

/// Binary integer callback
pub fn int_fn2(f: impl Fn(i64, i64) -> i64 + Send + Sync + 'static) -> Value {
    Value::native(move |args| match args {
        [Value::Integer(a), Value::Integer(b)] => Ok(Value::Integer(f(*a, *b))),
        _ => Err(RuntimeError::TypeError {
            msg: format!("expected two INTEGERs, got {:?}", args),
            span: Span::dummy(),
        }),
    })
}

/// Callback that records how many times it ran, failing on the `fail_at`-th call (1-based)
pub fn counting_fn(fail_at: usize) -> (Value, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let f = Value::native(move |args| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n == fail_at {
            return Err(RuntimeError::TypeError {
                msg: format!("failed on call {}", n),
                span: Span::dummy(),
            });
        }
        Ok(args.last().cloned().unwrap_or(Value::Null))
    });
    (f, calls)
}

/// Call a prelude function on a fresh default runtime
pub fn call(name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
    Runtime::new().call(name, args)
}

pub fn call_ok(name: &str, args: &[Value]) -> Value {
    match call(name, args) {
        Ok(v) => v,
        Err(e) => panic!("{}() failed: {}", name, e),
    }
}

pub fn call_err(name: &str, args: &[Value]) -> RuntimeError {
    match call(name, args) {
        Ok(v) => panic!("{}() unexpectedly returned {}", name, v),
        Err(e) => e,
    }
}
