//! Grouping of transcript lines into messages and date sections.

pub mod accumulator;
pub mod lines;

pub use accumulator::{Accumulator, accumulate};
pub use lines::split_lines;
