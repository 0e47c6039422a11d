// salvage/src/operators.rs

//! Recovery idioms built on [`Conditionals`]: safe calls, elvis defaults and
//! first-non-empty across a list of fallbacks.
//!
//! All of them treat [`MissingValue`](crate::MissingValue) (raised by
//! [`Required::required`](crate::Required::required)) as the null dereference
//! they recover from. Every other failure propagates unchanged.

use crate::conditional::category::Category;
use crate::core::action::Supplier;
use crate::engine::Conditionals;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{event, Level};

type FallbackQueue<T> = Arc<Mutex<VecDeque<Supplier<T>>>>;

/// Runs `operation`, turning a null dereference into an empty result.
///
/// ```
/// use salvage::{safe_call, Required};
///
/// struct User { address: Option<Address> }
/// struct Address { city: Option<String> }
///
/// let user = User { address: Some(Address { city: None }) };
/// let city = safe_call(move || {
///   let city = user.address.required("address")?.city.required("address.city")?;
///   Ok(Some(city))
/// })
/// .unwrap();
/// assert_eq!(city, None);
/// ```
pub fn safe_call<T, F>(operation: F) -> anyhow::Result<Option<T>>
where
  T: Send + 'static,
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
{
  Conditionals::when(operation)
    .throws_exception(Category::null_dereference())
    .then_return_none()
    .execute()
}

/// Same as [`safe_call`].
pub fn safe<T, F>(operation: F) -> anyhow::Result<Option<T>>
where
  T: Send + 'static,
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
{
  safe_call(operation)
}

/// Runs `operation`, returning `default_value` when it dereferences a missing
/// value or yields an empty result.
pub fn elvis<T, F>(operation: F, default_value: T) -> anyhow::Result<T>
where
  T: Send + 'static,
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
{
  Ok(safe_call(operation)?.unwrap_or(default_value))
}

/// Like [`elvis`], but the default is only produced when it is needed.
pub fn elvis_with<T, F, D>(operation: F, default_supplier: D) -> anyhow::Result<T>
where
  T: Send + 'static,
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
  D: FnOnce() -> anyhow::Result<T>,
{
  match safe_call(operation)? {
    Some(value) => Ok(value),
    None => default_supplier(),
  }
}

/// Returns the first non-empty result among `operation` and `fallbacks`.
///
/// Operations run in order, each at most once, and evaluation stops at the
/// first one that yields a value. An operation that dereferences a missing
/// value counts as empty; any other failure aborts the whole chain. Returns
/// `Ok(None)` once every fallback is used up. See also [`first_non_null!`].
pub fn first_non_null<T, F>(operation: F, fallbacks: impl IntoIterator<Item = Supplier<T>>) -> anyhow::Result<Option<T>>
where
  T: Send + 'static,
  F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
{
  let queue: FallbackQueue<T> = Arc::new(Mutex::new(fallbacks.into_iter().collect()));
  first_non_null_from(Box::new(operation), queue)
}

fn first_non_null_from<T>(operation: Supplier<T>, queue: FallbackQueue<T>) -> anyhow::Result<Option<T>>
where
  T: Send + 'static,
{
  // When the null-dereference rule drains the queue, the empty-result rule
  // still fires on its `None` and finds the queue empty.
  let on_missing = Arc::clone(&queue);
  Conditionals::when(operation)
    .throws_exception(Category::null_dereference())
    .then_return_with(move || next_fallback(on_missing))
    .equals_to_none()
    .then_return_with(move || next_fallback(queue))
    .execute()
}

fn next_fallback<T>(queue: FallbackQueue<T>) -> anyhow::Result<Option<T>>
where
  T: Send + 'static,
{
  let next = queue.lock().pop_front();
  match next {
    Some(operation) => {
      event!(Level::TRACE, remaining = queue.lock().len(), "Trying next fallback.");
      first_non_null_from(operation, queue)
    }
    None => Ok(None),
  }
}

/// Variadic form of [`first_non_null`](crate::first_non_null()):
///
/// ```
/// use salvage::{first_non_null, MissingValue};
///
/// let value = first_non_null!(
///   || Err(MissingValue::new("primary").into()),
///   || Ok(None),
///   || Ok(Some(3)),
/// )
/// .unwrap();
/// assert_eq!(value, Some(3));
/// ```
#[macro_export]
macro_rules! first_non_null {
  ($operation:expr $(, $fallback:expr)* $(,)?) => {
    $crate::first_non_null($operation, ::std::vec![$($crate::supplier($fallback)),*])
  };
}
