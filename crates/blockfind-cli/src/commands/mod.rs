//! Command implementations.

pub mod catalog;
mod search;

pub use catalog::{list_blocks, list_types};
pub use search::search;
