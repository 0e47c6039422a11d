// src/lib.rs

//! Salvage: a declarative fallback engine for Rust.
//!
//! Salvage runs a fallible operation once and resolves what came out of it
//! against an ordered set of rules declared by the caller:
//!  - "if it fails with this kind of error, return Y" (failure rules, matched
//!    against the root cause of the failure).
//!  - "if it fails that way, raise Z instead".
//!  - "if the result equals W, is empty or is blank, replace it" (value rules).
//!  - Ready-made idioms: `safe_call`, `elvis`, `first_non_null`.
//!
//! Failures that no rule matches are returned untouched, so the engine never
//! hides an error the caller did not ask it to handle.

pub mod conditional;
pub mod core;
pub mod engine;
pub mod error;
pub mod operators;

// --- Re-exports for the Public API ---

// The engine and the per-rule configurator of its fluent API
pub use crate::engine::Conditionals;
pub use crate::conditional::builder::ConditionConfigurator;

pub use crate::conditional::category::Category;
pub use crate::conditional::condition::{Outcome, ResultPredicate};
pub use crate::conditional::predicate::is_blank;

pub use crate::core::action::{supplier, Action, Supplier};
pub use crate::core::cause::{cause_chain, render_chain, root_cause};

pub use crate::error::{MissingValue, Required, SalvageError, SalvageResult};

pub use crate::operators::{elvis, elvis_with, first_non_null, safe, safe_call};

/*
    Core Workflow:
    1. Wrap the operation: `Conditionals::when(|| ...)`; it returns
       `anyhow::Result<Option<T>>`, `Ok(None)` being the empty result.
    2. Chain failure rules (`.throws::<E>()`, `.throws_any_exception()`, ...)
       and value rules (`.equals_to(..)`, `.equals_to_none()`,
       `.equals_to_blank()`, `.equals_to_predicate(..)`), each finished with
       `.then_return(..)`, `.then_return_with(..)`, `.then_throw(..)` or
       `.then_pass_through()`.
    3. Call `.execute()`. Failure rules are consulted before value rules, and
       within each group the first registered match wins.
*/
