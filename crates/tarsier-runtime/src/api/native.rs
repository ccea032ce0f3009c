//! Native function registration and builder
//!
//! Registers Rust closures as callable values, either with a fixed arity
//! (argument count checked before the closure runs) or variadic.
//!
//! # Examples
//!
//! ```rust
//! # use tarsier_runtime::value::{Value, RuntimeError};
//! # use tarsier_runtime::span::Span;
//! use tarsier_runtime::api::native::NativeFunctionBuilder;
//!
//! let double = NativeFunctionBuilder::new("double")
//!     .with_arity(1)
//!     .with_implementation(|args| match &args[0] {
//!         Value::Integer(n) => Ok(Value::Integer(n * 2)),
//!         other => Err(RuntimeError::TypeError {
//!             msg: format!("Expected INTEGER, got {}", other.type_name()),
//!             span: Span::dummy(),
//!         }),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = double.call(&[Value::Integer(21)], Span::dummy()).unwrap();
//! assert_eq!(result, Value::Integer(42));
//! ```

use crate::span::Span;
use crate::value::{NativeFn, RuntimeError, Value};
use std::sync::Arc;
use thiserror::Error;

/// Type alias for native function implementation
pub(crate) type NativeFnImpl = Box<dyn Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync>;

/// Builder for constructing native functions with arity validation
pub struct NativeFunctionBuilder {
    name: String,
    arity: Option<usize>,
    implementation: Option<NativeFnImpl>,
}

impl NativeFunctionBuilder {
    /// Create a new native function builder with the given name
    ///
    /// The name shows up in arity error messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: None,
            implementation: None,
        }
    }

    /// Set the function's arity (required argument count)
    ///
    /// Calls with too few or too many arguments fail with
    /// [`RuntimeError::WrongArgumentCount`] without running the implementation.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Mark this function as variadic (accepts any number of arguments)
    pub fn variadic(mut self) -> Self {
        self.arity = None;
        self
    }

    /// Set the function implementation
    pub fn with_implementation<F>(mut self, implementation: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    {
        self.implementation = Some(Box::new(implementation));
        self
    }

    /// Build the native function value
    ///
    /// Fails only when no implementation was provided.
    pub fn build(self) -> Result<Value, BuildError> {
        let implementation = self
            .implementation
            .ok_or_else(|| BuildError::MissingImplementation(self.name.clone()))?;

        Ok(wrap(self.name, self.arity, implementation))
    }
}

/// Wrap an implementation into a callable value, checking arity when fixed
pub(crate) fn wrap(name: String, arity: Option<usize>, implementation: NativeFnImpl) -> Value {
    let wrapped_fn: NativeFn = match arity {
        Some(expected) => Arc::new(move |args: &[Value]| {
            if args.len() != expected {
                return Err(RuntimeError::WrongArgumentCount {
                    name: name.clone(),
                    expected,
                    found: args.len(),
                    span: Span::dummy(),
                });
            }
            implementation(args)
        }),
        None => Arc::new(move |args: &[Value]| implementation(args)),
    };

    Value::NativeFunction(wrapped_fn)
}

/// Errors that can occur when building a native function
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No implementation was provided
    #[error("Native function '{0}' missing implementation")]
    MissingImplementation(String),
}
