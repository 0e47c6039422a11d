// salvage/src/conditional/category.rs

//! Failure categories: what a failure rule is keyed by.
//!
//! A category is matched against the *resolved* failure (the root cause) by a
//! dynamic downcast, never by comparing type names. Matching is
//! subtype-inclusive: `Category::of::<E>()` matches every failure whose root
//! cause is an `E`, including each narrower category built with
//! [`Category::of_where`] over the same `E`.

use crate::error::MissingValue;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

type Matcher = Arc<dyn Fn(&(dyn StdError + 'static)) -> bool + Send + Sync + 'static>;

/// A classification of failures, identified by a display name.
#[derive(Clone)]
pub struct Category {
  name: Cow<'static, str>,
  matcher: Matcher,
}

impl Category {
  /// The universal category: matches every failure.
  pub fn any() -> Self {
    Self {
      name: Cow::Borrowed("any"),
      matcher: Arc::new(|_: &(dyn StdError + 'static)| true),
    }
  }

  /// Matches failures whose resolved cause is of type `E`.
  pub fn of<E>() -> Self
  where
    E: StdError + 'static,
  {
    Self {
      name: Cow::Borrowed(std::any::type_name::<E>()),
      matcher: Arc::new(|failure: &(dyn StdError + 'static)| failure.downcast_ref::<E>().is_some()),
    }
  }

  /// Matches failures of type `E` for which `predicate` holds. Use it to single
  /// out one variant of an error enum or one `std::io::ErrorKind`.
  pub fn of_where<E, P>(name: impl Into<Cow<'static, str>>, predicate: P) -> Self
  where
    E: StdError + 'static,
    P: Fn(&E) -> bool + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      matcher: Arc::new(move |failure: &(dyn StdError + 'static)| {
        failure.downcast_ref::<E>().map_or(false, |e| predicate(e))
      }),
    }
  }

  /// The null-dereference category, i.e. [`MissingValue`].
  pub fn null_dereference() -> Self {
    Self::of::<MissingValue>()
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns true if `failure` belongs to this category.
  pub fn matches(&self, failure: &(dyn StdError + 'static)) -> bool {
    (self.matcher)(failure)
  }
}

impl fmt::Debug for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Category").field(&self.name).finish()
  }
}
