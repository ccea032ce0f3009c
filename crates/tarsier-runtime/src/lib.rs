//! Tarsier Runtime - array standard library
//!
//! This library provides the array helpers of the Tarsier language:
//! - `map`, `reduce` and `sum` over the host's sequence primitives
//! - Runtime values and errors shared with the host
//! - An embedding API for registering native callbacks

/// Tarsier runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod sequence;
pub mod span;
pub mod stdlib;
pub mod value;

// Re-export commonly used types
pub use api::Runtime;
pub use sequence::{CheckedAdd, Push, Sequence};
pub use span::Span;
pub use tarsier_config::OverflowMode;
pub use value::{NativeFn, RuntimeError, Value, ValueArray};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
