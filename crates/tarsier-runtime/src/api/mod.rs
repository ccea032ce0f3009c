//! Public embedding API for the Tarsier standard library
//!
//! - Native function construction with arity checking
//! - Value conversion between Rust and Tarsier types
//! - A runtime holding the configured prelude and user globals
//!
//! # Examples
//!
//! ```
//! use tarsier_runtime::api::{FromTarsier, Runtime, ToTarsier};
//!
//! let mut runtime = Runtime::new();
//! runtime.register_function("square", 1, |args| {
//!     let n = i64::from_tarsier(&args[0]).unwrap_or_default();
//!     Ok((n * n).to_tarsier())
//! });
//!
//! let square = runtime.get_global("square").unwrap();
//! let squares = runtime.call("map", &[vec![1i64, 2, 3].to_tarsier(), square]).unwrap();
//! let total = runtime.call("sum", &[squares]).unwrap();
//! assert_eq!(i64::from_tarsier(&total).unwrap(), 14);
//! ```

pub mod conversion;
pub mod native;
pub mod runtime;

// Re-export main types for convenience
pub use conversion::{ConversionError, FromTarsier, ToTarsier};
pub use native::{BuildError, NativeFunctionBuilder};
pub use runtime::Runtime;
