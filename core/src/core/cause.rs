// salvage/src/core/cause.rs

//! Root-cause resolution for failures that wrap other failures.
//!
//! Library code often wraps the meaningful failure inside generic wrappers
//! (context layers, "operation failed" envelopes). Failure rules are matched
//! against the deepest cause, found by following `Error::source()`.

use std::error::Error as StdError;
use std::fmt::Write as _;

/// Returns the deepest failure in the chain starting at `failure`, or
/// `failure` itself when it has no cause.
pub fn root_cause<'a>(failure: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
  anyhow::Chain::new(failure).last().unwrap_or(failure)
}

/// Returns every failure in the chain, outermost first, root cause last.
pub fn cause_chain<'a>(failure: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
  anyhow::Chain::new(failure).collect()
}

/// Renders the chain as one line per failure:
///
/// ```text
/// loading profile
/// Caused by: reading config
/// Caused by: Missing value: user.name
/// ```
pub fn render_chain(failure: &(dyn StdError + 'static)) -> String {
  let mut rendered = String::new();
  for (depth, link) in cause_chain(failure).into_iter().enumerate() {
    if depth > 0 {
      rendered.push_str("\nCaused by: ");
    }
    // Writing into a String cannot fail.
    let _ = write!(rendered, "{}", link);
  }
  rendered
}
