pub mod action;
pub mod cause;

// Re-export key types for easier access from other salvage modules (and lib.rs)
pub use action::{Action, Supplier};
pub use cause::{cause_chain, render_chain, root_cause};
