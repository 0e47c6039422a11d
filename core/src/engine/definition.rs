// salvage/src/engine/definition.rs

//! Contains the `Conditionals<T>` struct definition and the methods that
//! register rules on it.

use crate::conditional::builder::{ConditionConfigurator, PendingCondition};
use crate::conditional::category::Category;
use crate::conditional::condition::{
  EqualsPredicateCondition, EqualsValueCondition, FailureCondition, ValueCondition, ValueMatcher,
};
use crate::conditional::predicate::is_blank;
use crate::core::action::Action;
use crate::error::SalvageError;
use std::error::Error as StdError;
use std::sync::Arc;
use tracing::{event, Level};

/// Runs an action once and resolves its outcome against ordered rules.
///
/// ```
/// use salvage::Conditionals;
///
/// let value = Conditionals::when(|| Ok(Some(String::from("   "))))
///   .equals_to_blank()
///   .then_return("fallback".to_string())
///   .execute()
///   .unwrap();
/// assert_eq!(value.as_deref(), Some("fallback"));
/// ```
///
/// Failure rules are consulted first, in registration order, and only when the
/// action fails. Value rules (equality and predicate) are consulted next, in
/// registration order, against whatever candidate result the first phase left.
pub struct Conditionals<T>
where
  T: Send + 'static,
{
  pub(crate) action: Action<T>,
  pub(crate) failure_conditions: Vec<FailureCondition<T>>,
  pub(crate) value_conditions: Vec<ValueCondition<T>>,
  /// First rejected registration, reported by `execute()`.
  pub(crate) configuration_error: Option<SalvageError>,
}

impl<T> Conditionals<T>
where
  T: Send + 'static,
{
  /// Wraps an action whose result may be empty (`Ok(None)`).
  pub fn when<F>(action: F) -> Self
  where
    F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
  {
    Self {
      action: Box::new(action),
      failure_conditions: Vec::new(),
      value_conditions: Vec::new(),
      configuration_error: None,
    }
  }

  /// Wraps an action that always yields a value when it succeeds.
  pub fn when_some<F>(action: F) -> Self
  where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
  {
    Self::when(move || action().map(Some))
  }

  pub fn failure_condition_count(&self) -> usize {
    self.failure_conditions.len()
  }

  pub fn value_condition_count(&self) -> usize {
    self.value_conditions.len()
  }

  // --- Failure rules ---

  /// A rule matching every failure.
  pub fn throws_any_exception(self) -> ConditionConfigurator<T> {
    self.throws_any_of([Category::any()])
  }

  /// A rule matching failures whose root cause is an `E`.
  pub fn throws<E>(self) -> ConditionConfigurator<T>
  where
    E: StdError + 'static,
  {
    self.throws_any_of([Category::of::<E>()])
  }

  pub fn throws_exception(self, category: Category) -> ConditionConfigurator<T> {
    self.throws_any_of([category])
  }

  /// A rule matching failures in any of `categories`. An empty list is
  /// rejected and makes `execute()` fail with a configuration error.
  pub fn throws_any_of(mut self, categories: impl IntoIterator<Item = Category>) -> ConditionConfigurator<T> {
    let categories: Vec<Category> = categories.into_iter().collect();
    if categories.is_empty() {
      self.reject("throws_any_of", "at least one failure category is required");
      return ConditionConfigurator::new(self, PendingCondition::Rejected);
    }
    ConditionConfigurator::new(self, PendingCondition::Failure(categories))
  }

  // --- Value rules ---

  /// A rule matching the empty result.
  pub fn equals_to_none(self) -> ConditionConfigurator<T> {
    let matcher = ValueMatcher::Equals(EqualsValueCondition {
      accepted: vec![None],
      eq: |accepted, candidate| accepted.is_none() && candidate.is_none(),
    });
    ConditionConfigurator::new(self, PendingCondition::Value(matcher))
  }

  /// A predicate rule matching the empty result and whitespace-only text.
  /// Text means `String`, `&'static str`, `Box<str>`, `Arc<str>`, `Rc<str>`
  /// or `Cow<'static, str>`; see [`is_blank`].
  pub fn equals_to_blank(self) -> ConditionConfigurator<T> {
    self.equals_to_predicate(|candidate: Option<&T>| is_blank(candidate))
  }

  /// A rule matching when `predicate` holds for the candidate result.
  pub fn equals_to_predicate<P>(self, predicate: P) -> ConditionConfigurator<T>
  where
    P: Fn(Option<&T>) -> bool + Send + Sync + 'static,
  {
    let matcher = ValueMatcher::Predicate(EqualsPredicateCondition {
      predicate: Arc::new(predicate),
    });
    ConditionConfigurator::new(self, PendingCondition::Value(matcher))
  }

  fn reject(&mut self, rule: &str, message: &str) {
    event!(Level::DEBUG, rule = rule, "Rule registration rejected: {}", message);
    if self.configuration_error.is_none() {
      self.configuration_error = Some(SalvageError::Configuration {
        rule: rule.to_string(),
        message: message.to_string(),
      });
    }
  }
}

impl<T> Conditionals<T>
where
  T: PartialEq + Send + 'static,
{
  /// A rule matching when the result equals `value`.
  pub fn equals_to(self, value: T) -> ConditionConfigurator<T> {
    self.equals_to_any_option([Some(value)])
  }

  /// A rule matching when the result equals any of `values`. An empty list is
  /// rejected and makes `execute()` fail with a configuration error.
  pub fn equals_to_any(self, values: impl IntoIterator<Item = T>) -> ConditionConfigurator<T> {
    self.equals_to_any_option(values.into_iter().map(Some))
  }

  /// Like [`equals_to_any`](Self::equals_to_any), but `None` may be listed to
  /// also accept the empty result.
  pub fn equals_to_any_option(mut self, values: impl IntoIterator<Item = Option<T>>) -> ConditionConfigurator<T> {
    let accepted: Vec<Option<T>> = values.into_iter().collect();
    if accepted.is_empty() {
      self.reject("equals_to_any", "at least one acceptance value is required");
      return ConditionConfigurator::new(self, PendingCondition::Rejected);
    }
    let matcher = ValueMatcher::Equals(EqualsValueCondition {
      accepted,
      eq: <Option<T> as PartialEq>::eq,
    });
    ConditionConfigurator::new(self, PendingCondition::Value(matcher))
  }
}
