// salvage/src/engine/execution.rs

//! Contains `Conditionals::execute()`, which runs the action and resolves its
//! outcome against the registered conditions.

use crate::conditional::condition::{FailureCondition, Outcome, ValueCondition};
use crate::core::cause::root_cause;
use crate::engine::definition::Conditionals;
use std::error::Error as StdError;
use tracing::{event, instrument, Level};

impl<T> Conditionals<T>
where
  T: Send + 'static,
{
  /// Runs the action exactly once and resolves the outcome.
  ///
  /// - On failure, the root cause is matched against failure conditions in
  ///   registration order. The first match substitutes a value, raises its own
  ///   failure, or (pass-through) swallows the failure into `None`. With no
  ///   match the original failure is returned untouched, so callers can still
  ///   `downcast_ref` it.
  /// - The candidate result is then matched against value conditions in
  ///   registration order; the first match decides the final result. With no
  ///   match the candidate is returned as is.
  ///
  /// A rejected registration surfaces here as `SalvageError::Configuration`,
  /// before the action runs.
  #[instrument(
        name = "Conditionals::execute",
        skip_all,
        fields(
            value_type = %std::any::type_name::<T>(),
            failure_conditions = self.failure_conditions.len(),
            value_conditions = self.value_conditions.len(),
        )
    )]
  pub fn execute(self) -> anyhow::Result<Option<T>> {
    let Conditionals {
      action,
      failure_conditions,
      value_conditions,
      configuration_error,
    } = self;

    if let Some(config_err) = configuration_error {
      event!(Level::DEBUG, error = %config_err, "Refusing to run action with rejected rules.");
      return Err(config_err.into());
    }

    let candidate = match action() {
      Ok(value) => {
        event!(Level::TRACE, present = value.is_some(), "Action succeeded.");
        value
      }
      Err(failure) => resolve_failure(failure, failure_conditions)?,
    };

    if value_conditions.is_empty() {
      return Ok(candidate);
    }
    resolve_value(candidate, value_conditions)
  }
}

fn resolve_failure<T>(failure: anyhow::Error, conditions: Vec<FailureCondition<T>>) -> anyhow::Result<Option<T>> {
  let matched = {
    let top: &(dyn StdError + 'static) = failure.as_ref();
    let resolved = root_cause(top);
    conditions.iter().enumerate().find_map(|(idx, condition)| {
      let categories = condition.matching_categories(resolved);
      if categories.is_empty() {
        return None;
      }
      let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
      event!(Level::DEBUG, condition_index = idx, categories = ?names, "Failure condition matched.");
      Some(idx)
    })
  };

  let Some(idx) = matched else {
    event!(Level::DEBUG, error = %failure, "No failure condition matched. Re-raising original failure.");
    return Err(failure);
  };

  match conditions.into_iter().nth(idx).map(|c| c.outcome) {
    Some(Outcome::Substitute(supplier)) => supplier(),
    Some(Outcome::Raise(replacement)) => {
      event!(Level::DEBUG, error = %replacement, "Raising configured failure in place of the original.");
      Err(replacement)
    }
    Some(Outcome::PassThrough) | None => Ok(None),
  }
}

fn resolve_value<T>(candidate: Option<T>, conditions: Vec<ValueCondition<T>>) -> anyhow::Result<Option<T>> {
  let Some(idx) = conditions.iter().position(|c| c.is_fulfilled_by(&candidate)) else {
    event!(Level::TRACE, "No value condition matched. Returning candidate.");
    return Ok(candidate);
  };
  event!(Level::DEBUG, condition_index = idx, "Value condition matched.");

  match conditions.into_iter().nth(idx).map(|c| c.outcome) {
    Some(Outcome::Substitute(supplier)) => supplier(),
    Some(Outcome::Raise(replacement)) => Err(replacement),
    Some(Outcome::PassThrough) | None => Ok(candidate),
  }
}
