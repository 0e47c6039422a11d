// salvage/examples/fallback_rules.rs

use salvage::{Category, Conditionals, MissingValue};
use tracing::{error, info};

// 1. Define a custom application error type
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("Upstream timed out after {0} ms")]
  Timeout(u64),

  #[error("Upstream rejected the request: {0}")]
  Rejected(String),
}

// 2. A lookup that fails in different ways depending on its input
fn lookup_price(sku: &str) -> anyhow::Result<Option<String>> {
  match sku {
    "slow" => Err(ExampleAppError::Timeout(1500).into()),
    "banned" => Err(anyhow::Error::new(ExampleAppError::Rejected(sku.to_string())).context("price lookup")),
    "unlisted" => Ok(None),
    "blank" => Ok(Some("   ".to_string())),
    "ghost" => Err(MissingValue::new("catalog.entry").into()),
    other => Ok(Some(format!("{}: 9.99", other))),
  }
}

fn resolve(sku: &'static str) -> anyhow::Result<Option<String>> {
  let timeout = Category::of_where::<ExampleAppError, _>("timeout", |e| matches!(e, ExampleAppError::Timeout(_)));

  Conditionals::when(move || lookup_price(sku))
    // Failure rules, evaluated against the root cause
    .throws_exception(timeout)
    .then_return("cached: 9.49".to_string())
    .throws::<MissingValue>()
    .then_return_none()
    // Value rules, evaluated against the result of the phase above
    .equals_to_blank()
    .then_return_with(|| Ok(Some("price on request".to_string())))
    .execute()
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Fallback Rules Example ---");

  for sku in ["widget", "slow", "unlisted", "blank", "ghost", "banned"] {
    match resolve(sku) {
      Ok(price) => info!("{:>8} => {:?}", sku, price),
      // Unmatched failures come back exactly as the action raised them.
      Err(e) => error!("{:>8} => failed: {:#}", sku, e),
    }
  }
}
