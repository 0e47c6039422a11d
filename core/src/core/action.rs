// salvage/src/core/action.rs

//! Defines the deferred computations the engine runs: the wrapped action and
//! the lazily evaluated substitute values attached to rules.

/// A zero-argument, fallible, value-producing computation.
///
/// `Ok(None)` is the "empty" outcome that value rules such as `equals_to_none`
/// match against. Any `Err` is a failure that failure rules match against.
pub type Supplier<T> = Box<dyn FnOnce() -> anyhow::Result<Option<T>> + Send>;

/// The operation wrapped by `Conditionals`. It is invoked exactly once per
/// `execute()` and never retried.
pub type Action<T> = Supplier<T>;

/// Boxes a closure into a [`Supplier`].
pub fn supplier<T, F>(f: F) -> Supplier<T>
where
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
{
  Box::new(f)
}
