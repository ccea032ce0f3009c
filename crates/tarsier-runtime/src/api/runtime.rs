//! Embedding runtime: configured prelude plus user-registered globals

use crate::api::native::{self, NativeFunctionBuilder};
use crate::span::Span;
use crate::stdlib;
use crate::value::{RuntimeError, Value};
use std::collections::HashMap;
use tarsier_config::{Config, OverflowMode};
use tracing::debug;

/// Global function table for embedding the standard library
///
/// On construction the configured prelude (`map`, `reduce`, `sum` by
/// default) is installed as globals. Prelude entries are ordinary
/// [`Value::NativeFunction`]s, so they can be passed as callbacks to each
/// other.
///
/// # Examples
///
/// ```
/// use tarsier_runtime::api::Runtime;
/// use tarsier_runtime::Value;
///
/// let runtime = Runtime::new();
/// let nested = Value::array(vec![
///     Value::array(vec![Value::Integer(1), Value::Integer(2)]),
///     Value::array(vec![Value::Integer(3)]),
/// ]);
/// let sum = runtime.get_global("sum").unwrap();
/// let totals = runtime.call("map", &[nested, sum]).unwrap();
/// assert_eq!(totals.to_string(), "[3, 3]");
/// ```
pub struct Runtime {
    globals: HashMap<String, Value>,
    overflow: OverflowMode,
}

impl Runtime {
    /// Create a runtime with the default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a runtime from a loaded configuration
    pub fn with_config(config: &Config) -> Self {
        let overflow = config.overflow();
        let mut runtime = Self {
            globals: HashMap::new(),
            overflow,
        };

        let prelude = config.prelude();
        for name in &prelude {
            runtime.install_builtin(name);
        }
        debug!(prelude = ?prelude, overflow = %overflow, "installed prelude");

        runtime
    }

    fn install_builtin(&mut self, name: &str) {
        let builtin = name.to_string();
        let overflow = self.overflow;
        // Builtins validate their own argument counts.
        let value = native::wrap(
            builtin.clone(),
            None,
            Box::new(move |args: &[Value]| {
                stdlib::call_builtin(&builtin, args, Span::dummy(), overflow)
            }),
        );
        self.set_global(name, value);
    }

    /// Integer overflow mode used by `sum`
    pub fn overflow(&self) -> OverflowMode {
        self.overflow
    }

    /// Bind (or rebind) a global
    pub fn set_global(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }

    pub fn get_global(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }

    /// Names of all globals, sorted
    pub fn global_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Register a native function with fixed arity
    pub fn register_function<F>(&mut self, name: &str, arity: usize, implementation: F)
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    {
        let native_fn = native::wrap(name.to_string(), Some(arity), Box::new(implementation));
        self.set_global(name, native_fn);
    }

    /// Register a variadic native function
    ///
    /// The implementation is responsible for validating the argument count and types.
    pub fn register_variadic<F>(&mut self, name: &str, implementation: F)
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    {
        let native_fn = native::wrap(name.to_string(), None, Box::new(implementation));
        self.set_global(name, native_fn);
    }

    /// Register a function built with [`NativeFunctionBuilder`]
    pub fn register_builder(
        &mut self,
        name: &str,
        builder: NativeFunctionBuilder,
    ) -> Result<(), native::BuildError> {
        let native_fn = builder.build()?;
        self.set_global(name, native_fn);
        Ok(())
    }

    /// Call a global function by name
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let span = Span::dummy();
        let function = self
            .globals
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownFunction {
                name: name.to_string(),
                span,
            })?;
        function.call(args, span)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
