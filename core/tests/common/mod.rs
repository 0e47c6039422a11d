// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use salvage::MissingValue;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

pub const EXPECTED_VALUE: &str = "expectedValue";

// --- Common Error Types for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Illegal state: {0}")]
  IllegalState(String),

  #[error("Io-like failure: {0}")]
  Io(String),

  #[error("Custom failure: {0}")]
  Custom(String),
}

/// Generic envelope that hides the meaningful failure behind `source()`, the
/// way reflection or framework layers wrap the error they observed.
#[derive(Debug, thiserror::Error)]
#[error("Invocation failed")]
pub struct InvocationWrapper {
  #[source]
  pub cause: anyhow::Error,
}

impl InvocationWrapper {
  pub fn around(cause: impl Into<anyhow::Error>) -> Self {
    Self { cause: cause.into() }
  }
}

// --- Common Nested Data for Safe-Call Tests ---
#[derive(Clone, Debug)]
pub struct Pojo {
  pub a: Option<A>,
}

#[derive(Clone, Debug)]
pub struct A {
  pub b: Option<B>,
}

#[derive(Clone, Debug)]
pub struct B {
  pub c: Option<String>,
}

impl Default for Pojo {
  fn default() -> Self {
    Pojo {
      a: Some(A {
        b: Some(B { c: Some("test".to_string()) }),
      }),
    }
  }
}

/// The `pojo.a.b.c` lookup: fails with `MissingValue` when `a` or `b` is
/// absent, and yields the (possibly absent) `c`.
pub fn read_c(pojo: Pojo) -> anyhow::Result<Option<String>> {
  use salvage::Required;
  Ok(pojo.a.required("a")?.b.required("a.b")?.c)
}

pub fn missing(what: &str) -> anyhow::Error {
  MissingValue::new(what).into()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static INVOCATION_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static SUPPLIER_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  INVOCATION_COUNTER.store(0, Ordering::SeqCst);
  SUPPLIER_COUNTER.store(0, Ordering::SeqCst);
}

pub fn invocations() -> usize {
  INVOCATION_COUNTER.load(Ordering::SeqCst)
}

pub fn supplier_calls() -> usize {
  SUPPLIER_COUNTER.load(Ordering::SeqCst)
}

/// Counts one invocation and hands `retval` back.
pub fn count_and_return<T>(retval: Option<T>) -> anyhow::Result<Option<T>> {
  INVOCATION_COUNTER.fetch_add(1, Ordering::SeqCst);
  Ok(retval)
}

/// Counts one invocation and fails with a null dereference.
pub fn count_and_fail<T>(what: &str) -> anyhow::Result<Option<T>> {
  INVOCATION_COUNTER.fetch_add(1, Ordering::SeqCst);
  Err(missing(what))
}
