//! Wrapper event extraction.
//!
//! This module handles:
//! - Describing wrapper sources and their declaration conventions
//! - Scanning function-context search output
//! - Grouping in-vocabulary events by wrapper function

pub mod scan;
pub mod wrapper;

// Re-export main types and functions
pub use scan::{extract_wrapper_events, EventSet, FunctionEventMap};
pub use wrapper::{WrapperFamily, WrapperSource};
