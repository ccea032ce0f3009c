//! Runtime value representation
//!
//! Values exchanged between the host language and the standard library.
//! - Integers, Bools, Null: Immediate values
//! - Strings: Heap-allocated, reference-counted (Arc<String>), immutable
//! - Arrays: Copy-on-write (ValueArray wrapping Arc<Vec<Value>>), value semantics
//! - NativeFunction: Rust closures callable as callbacks

use crate::span::Span;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Copy-on-write array. Cheap to clone (refcount bump).
/// Mutations on a shared array clone the inner Vec first (Arc::make_mut).
#[derive(Clone, Debug)]
pub struct ValueArray(Arc<Vec<Value>>);

impl ValueArray {
    pub fn new() -> Self {
        ValueArray(Arc::new(Vec::new()))
    }

    pub fn from_vec(v: Vec<Value>) -> Self {
        ValueArray(Arc::new(v))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ValueArray(Arc::new(Vec::with_capacity(capacity)))
    }

    /// Read access, no clone needed.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mutating access; clones the backing Vec first if it is shared.
    pub fn push(&mut self, value: Value) {
        Arc::make_mut(&mut self.0).push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl Default for ValueArray {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ValueArray {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice() == other.0.as_slice()
    }
}

/// Native function signature: receives the call arguments, returns a value or error
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync>;

/// Runtime value type
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// String value (reference-counted, immutable)
    String(Arc<String>),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
    /// Array (copy-on-write)
    Array(ValueArray),
    /// Rust closure callable from the host
    NativeFunction(NativeFn),
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a new array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(ValueArray::from_vec(values))
    }

    /// Wrap a closure as a callable value
    pub fn native(
        f: impl Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    ) -> Self {
        Value::NativeFunction(Arc::new(f))
    }

    /// Get the type name of this value, spelled the way the host reports it
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::String(_) => "STRING",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::NativeFunction(_) => "FUNCTION",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::NativeFunction(_))
    }

    pub fn as_array(&self) -> Option<&ValueArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Invoke this value as a function
    ///
    /// Only native functions are callable; anything else is reported as
    /// `not a function` at `span`.
    pub fn call(&self, args: &[Value], span: Span) -> Result<Value, RuntimeError> {
        match self {
            Value::NativeFunction(f) => f(args),
            other => Err(RuntimeError::NotAFunction {
                found: other.type_name().to_string(),
                span,
            }),
        }
    }

    /// Get a display string representation
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    /// Scalars and arrays compare by content; native functions only equal
    /// themselves (same allocation).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Array(arr) => {
                let elements: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Value::NativeFunction(_) => write!(f, "<native fn>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Null => write!(f, "Null"),
            Value::Array(arr) => write!(f, "Array({:?})", arr.as_slice()),
            Value::NativeFunction(_) => write!(f, "NativeFunction(<closure>)"),
        }
    }
}

/// Runtime error type with source span information
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Type error raised by user-supplied native functions
    #[error("Type error: {msg}")]
    TypeError { msg: String, span: Span },
    /// Builtin called with the wrong number of arguments
    #[error("wrong number of arguments to {name}: want={expected}, got={found}")]
    WrongArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },
    /// Builtin expected an array argument
    #[error("argument to `{name}` must be ARRAY, got {found}")]
    NotAnArray {
        name: String,
        found: String,
        span: Span,
    },
    /// Attempted to call a non-function value
    #[error("not a function: {found}")]
    NotAFunction { found: String, span: Span },
    /// Operands of different types
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: String,
        operator: String,
        right: String,
        span: Span,
    },
    /// Operator not defined for these operand types
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownOperator {
        left: String,
        operator: String,
        right: String,
        span: Span,
    },
    /// Integer result does not fit in 64 bits
    #[error("integer overflow in {operator}")]
    IntegerOverflow { operator: String, span: Span },
    /// Unknown function
    #[error("identifier not found: {name}")]
    UnknownFunction { name: String, span: Span },
}

impl RuntimeError {
    /// Get the source span for this error
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::TypeError { span, .. } => *span,
            RuntimeError::WrongArgumentCount { span, .. } => *span,
            RuntimeError::NotAnArray { span, .. } => *span,
            RuntimeError::NotAFunction { span, .. } => *span,
            RuntimeError::TypeMismatch { span, .. } => *span,
            RuntimeError::UnknownOperator { span, .. } => *span,
            RuntimeError::IntegerOverflow { span, .. } => *span,
            RuntimeError::UnknownFunction { span, .. } => *span,
        }
    }
}
