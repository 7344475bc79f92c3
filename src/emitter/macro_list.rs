//! Score-event macro list emitter.
//!
//! For every non-empty category this writes a continued `#define` listing the
//! category's functions as quoted score-event invocations. The format is
//! consumed verbatim by the scoring component, so it is byte-exact: every
//! line but the last ends in a backslash continuation, and each block is
//! followed by one blank line.

use crate::classifier::ClassifiedRegistry;
use crate::utils::error::EmitError;
use log::debug;
use std::io::Write;

/// Write the macro-list fragment for the whole registry
///
/// **Public** - main entry point for macro-list output
///
/// # Errors
/// * `EmitError::WriteFailed` - I/O error on the underlying writer
pub fn emit_macro_lists(
    registry: &ClassifiedRegistry,
    out: &mut impl Write,
) -> Result<(), EmitError> {
    for (category, functions) in registry.iter() {
        debug!(
            "Emitting {} with {} functions",
            category.macro_name(),
            functions.len()
        );

        writeln!(out, "#define {} \\", category.macro_name())?;

        for (index, (function, _)) in functions.iter().enumerate() {
            if index == functions.len() - 1 {
                writeln!(out, "\tSCOREP_SCORE_EVENT( \"{}\" )", function)?;
                writeln!(out)?;
            } else {
                writeln!(out, "\tSCOREP_SCORE_EVENT( \"{}\" )\\", function)?;
            }
        }
    }

    Ok(())
}
