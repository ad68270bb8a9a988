//! Step Generation Engines
//!
//! Pure algorithm logic behind every visualizer. Each module turns parsed
//! input into a finite step sequence (or a small mutable model); the
//! playback layer only advances through the result. Nothing in here
//! touches the DOM or a timer, so all of it is testable natively.

pub mod array_ops;
pub mod list;
pub mod parse;
pub mod search;
pub mod sort;
pub mod stack_queue;
pub mod string_ops;
pub mod tree;
