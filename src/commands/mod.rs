//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod classify;
pub mod generate;

// Re-export main command functions
pub use classify::{execute_classify, ClassifyArgs};
pub use generate::{execute_generate, validate_args, GenerateArgs};
