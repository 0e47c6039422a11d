// salvage/src/engine/mod.rs

pub mod definition;
pub mod execution;

pub use definition::Conditionals;
