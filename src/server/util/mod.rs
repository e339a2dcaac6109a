//! Small self-contained helpers shared across layers.

pub mod availability;
pub mod parse;
pub mod password;
