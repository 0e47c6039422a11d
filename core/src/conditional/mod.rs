// salvage/src/conditional/mod.rs

//! Rules ("conditions") that decide how an outcome is recovered.
//!
//! This module provides the failure categories rules are keyed by, the
//! condition types the engine evaluates, and the `ConditionConfigurator` that
//! finishes each rule in the fluent API.

pub mod builder;
pub mod category;
pub mod condition;
pub mod predicate;

pub use builder::ConditionConfigurator;
pub use category::Category;
pub use predicate::is_blank;
