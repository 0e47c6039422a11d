// salvage/src/conditional/builder.rs

//! Implements the per-rule half of the fluent API.
//!
//! Every registration call on [`Conditionals`] hands back a
//! [`ConditionConfigurator`]; choosing what the rule does (`then_return`,
//! `then_throw`, ...) appends the finished condition and returns the engine,
//! so rules chain naturally:
//!
//! ```
//! use salvage::{Conditionals, MissingValue};
//!
//! let value = Conditionals::when(|| Err(MissingValue::new("user.name").into()))
//!   .throws::<std::io::Error>()
//!   .then_return("io".to_string())
//!   .throws::<MissingValue>()
//!   .then_return("anonymous".to_string())
//!   .execute()
//!   .unwrap();
//! assert_eq!(value.as_deref(), Some("anonymous"));
//! ```

use crate::conditional::category::Category;
use crate::conditional::condition::{FailureCondition, Outcome, ValueCondition, ValueMatcher};
use crate::engine::Conditionals;
use tracing::{event, Level};

/// The rule a configurator is about to append.
pub(crate) enum PendingCondition<T> {
  Failure(Vec<Category>),
  Value(ValueMatcher<T>),
  /// Registration was rejected; the engine already holds the configuration
  /// error, so the terminal call only hands the engine back.
  Rejected,
}

/// Intermediate builder for a single rule. Exactly one terminal method must be
/// called to get the engine back.
#[must_use = "a rule is only registered once then_return/then_throw/then_pass_through is called"]
pub struct ConditionConfigurator<T>
where
  T: Send + 'static,
{
  engine: Conditionals<T>,
  pending: PendingCondition<T>,
}

impl<T> ConditionConfigurator<T>
where
  T: Send + 'static,
{
  pub(crate) fn new(engine: Conditionals<T>, pending: PendingCondition<T>) -> Self {
    Self { engine, pending }
  }

  /// Substitutes a constant. Use [`then_return_with`](Self::then_return_with)
  /// when producing the value takes work, so it only happens on a match.
  pub fn then_return(self, value: T) -> Conditionals<T> {
    self.finish(Outcome::Substitute(Box::new(move || Ok(Some(value)))))
  }

  /// Substitutes the empty result.
  pub fn then_return_none(self) -> Conditionals<T> {
    self.finish(Outcome::Substitute(Box::new(|| Ok(None))))
  }

  /// Substitutes the value produced by `supplier`, invoked only if this rule is
  /// the first match. A failure from the supplier propagates out of `execute()`.
  pub fn then_return_with<F>(self, supplier: F) -> Conditionals<T>
  where
    F: FnOnce() -> anyhow::Result<Option<T>> + Send + 'static,
  {
    self.finish(Outcome::Substitute(Box::new(supplier)))
  }

  /// Raises `failure` in place of the original outcome. The original failure
  /// is not chained onto it.
  pub fn then_throw(self, failure: impl Into<anyhow::Error>) -> Conditionals<T> {
    self.finish(Outcome::Raise(failure.into()))
  }

  /// Registers the rule with neither substitute nor raise: a matching failure
  /// is swallowed into an empty result, a matching value is kept as is.
  pub fn then_pass_through(self) -> Conditionals<T> {
    self.finish(Outcome::PassThrough)
  }

  fn finish(self, outcome: Outcome<T>) -> Conditionals<T> {
    let mut engine = self.engine;
    match self.pending {
      PendingCondition::Failure(categories) => {
        event!(Level::TRACE, categories = categories.len(), outcome = ?outcome, "Failure condition registered.");
        engine.failure_conditions.push(FailureCondition { categories, outcome });
      }
      PendingCondition::Value(matcher) => {
        event!(Level::TRACE, outcome = ?outcome, "Value condition registered.");
        engine.value_conditions.push(ValueCondition { matcher, outcome });
      }
      PendingCondition::Rejected => {
        event!(Level::TRACE, "Rejected condition dropped.");
      }
    }
    engine
  }
}
