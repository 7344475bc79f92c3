//! Classification of wrapper functions into I/O operation categories.
//!
//! This module handles:
//! - The fixed category set and its precedence chain
//! - The per-run registry of classified functions
//! - The last-writer-wins fold across wrapper sources

pub mod category;
pub mod registry;

// Re-export main types and functions
pub use category::{classify, Category};
pub use registry::{classify_wrapper_events, ClassifiedRegistry};
