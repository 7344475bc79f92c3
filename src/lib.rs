//! Score Event Generator
//!
//! Scans a measurement framework's instrumented I/O wrapper sources to
//! discover which trace events each wrapped function emits, classifies every
//! wrapped function into an I/O operation category, and generates the
//! score-event macro lists and registration statements consumed by the
//! scoring component.
//!
//! This crate provides the core implementation for the
//! `score-event-gen` CLI tool.

pub mod classifier;
pub mod commands;
pub mod emitter;
pub mod extractor;
pub mod search;
pub mod utils;
pub mod vocabulary;
