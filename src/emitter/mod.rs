//! Generated-fragment writers.
//!
//! This module serializes the classified registry into the two source
//! fragments consumed by the scoring component:
//! - score-event macro lists
//! - score-event registration statements

pub mod macro_list;
pub mod register;

// Re-export main functions
pub use macro_list::emit_macro_lists;
pub use register::emit_registrations;
