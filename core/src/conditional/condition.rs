// salvage/src/conditional/condition.rs

//! Defines the registered rules ("conditions") the engine evaluates.
//!
//! Failure conditions are keyed by [`Category`] sets and looked at only when the
//! action fails. Value conditions (equality or predicate) are looked at
//! afterwards, against the candidate result.

use crate::conditional::category::Category;
use crate::core::action::Supplier;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// One-argument test over a candidate result. `None` is the empty candidate.
pub type ResultPredicate<T> = Arc<dyn Fn(Option<&T>) -> bool + Send + Sync + 'static>;

/// What a condition does once it is the first match.
pub enum Outcome<T> {
  /// Produce a substitute value. The supplier runs only at that point.
  Substitute(Supplier<T>),
  /// Abort `execute()` with this failure instead of the original.
  Raise(anyhow::Error),
  /// Neither substitute nor raise configured. A matched failure condition
  /// swallows the failure and yields `None`; a matched value condition leaves
  /// the candidate untouched.
  PassThrough,
}

impl<T> fmt::Debug for Outcome<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::Substitute(_) => f.write_str("Substitute(..)"),
      Outcome::Raise(e) => f.debug_tuple("Raise").field(&e.to_string()).finish(),
      Outcome::PassThrough => f.write_str("PassThrough"),
    }
  }
}

/// A failure-match rule.
pub struct FailureCondition<T> {
  pub(crate) categories: Vec<Category>,
  pub(crate) outcome: Outcome<T>,
}

impl<T> FailureCondition<T> {
  /// The categories of this condition that `resolved` belongs to. Computed
  /// into a fresh vector; the condition itself is never narrowed.
  pub fn matching_categories(&self, resolved: &(dyn StdError + 'static)) -> Vec<&Category> {
    self.categories.iter().filter(|c| c.matches(resolved)).collect()
  }
}

/// An equality-match rule over a set of acceptance values, `None` included.
pub struct EqualsValueCondition<T> {
  pub(crate) accepted: Vec<Option<T>>,
  pub(crate) eq: fn(&Option<T>, &Option<T>) -> bool,
}

impl<T> EqualsValueCondition<T> {
  /// Null-aware membership: two `None`s are equal, `None` never equals `Some`.
  pub fn accepts(&self, candidate: &Option<T>) -> bool {
    self.accepted.iter().any(|accepted| (self.eq)(accepted, candidate))
  }
}

/// A predicate-match rule.
pub struct EqualsPredicateCondition<T> {
  pub(crate) predicate: ResultPredicate<T>,
}

impl<T> EqualsPredicateCondition<T> {
  pub fn accepts(&self, candidate: &Option<T>) -> bool {
    (self.predicate)(candidate.as_ref())
  }
}

/// How a value condition decides whether it matches.
pub enum ValueMatcher<T> {
  Equals(EqualsValueCondition<T>),
  Predicate(EqualsPredicateCondition<T>),
}

/// An equality or predicate rule, evaluated after the failure phase.
pub struct ValueCondition<T> {
  pub(crate) matcher: ValueMatcher<T>,
  pub(crate) outcome: Outcome<T>,
}

impl<T> ValueCondition<T> {
  pub fn is_fulfilled_by(&self, candidate: &Option<T>) -> bool {
    match &self.matcher {
      ValueMatcher::Equals(condition) => condition.accepts(candidate),
      ValueMatcher::Predicate(condition) => condition.accepts(candidate),
    }
  }
}
