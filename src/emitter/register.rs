//! Score-event registration emitter.
//!
//! For every non-empty category this writes a reset of the reusable region
//! set, a reference to the category's macro, and one registration call per
//! event of the category's representative event set. The representative set
//! is taken from the category's busiest function: the one emitting the most
//! distinct events.

use crate::classifier::ClassifiedRegistry;
use crate::extractor::EventSet;
use crate::utils::config::EVENT_NAME_PREFIX;
use crate::utils::error::EmitError;
use log::debug;
use std::io::Write;

/// Write the registration fragment for the whole registry
///
/// **Public** - main entry point for registration output
///
/// # Errors
/// * `EmitError::WriteFailed` - I/O error on the underlying writer
pub fn emit_registrations(
    registry: &ClassifiedRegistry,
    out: &mut impl Write,
) -> Result<(), EmitError> {
    for (category, functions) in registry.iter() {
        writeln!(out, "region_set.clear();")?;
        writeln!(out, "{};", category.macro_name())?;

        let events = representative_events(functions);
        debug!(
            "Registering {} events for {}",
            events.len(),
            category.macro_name()
        );

        for event in events {
            writeln!(
                out,
                "registerEvent( new SCOREP_Score_NameMatchEvent( \"{}\",\n\
                 {pad}region_set,\n\
                 {pad}true ) );",
                strip_prefix(event),
                pad = " ".repeat(49),
            )?;
        }
    }

    Ok(())
}

/// Pick the event set of the function with the most distinct events
///
/// **Private** - ties keep the first function in insertion order, so the
/// selection is stable across runs
fn representative_events(functions: &[(String, EventSet)]) -> &EventSet {
    let mut best = &functions[0].1;
    for (_, events) in &functions[1..] {
        if events.len() > best.len() {
            best = events;
        }
    }
    best
}

/// Drop the vocabulary prefix from an event identifier
///
/// **Private** - `SCOREP_IoCreateHandle` registers as `IoCreateHandle`
fn strip_prefix(event: &str) -> &str {
    event.strip_prefix(EVENT_NAME_PREFIX).unwrap_or(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Category;
    use pretty_assertions::assert_eq;

    fn events(names: &[&str]) -> EventSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn emit_to_string(registry: &ClassifiedRegistry) -> String {
        let mut buffer = Vec::new();
        emit_registrations(registry, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_registration_block_format() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoCreate,
            "open".to_string(),
            events(&["SCOREP_IoCreateHandle"]),
        );

        let output = emit_to_string(&registry);
        let pad = " ".repeat(49);

        assert_eq!(
            output,
            format!(
                "region_set.clear();\n\
                 SCOREP_SCORE_EVENT_IO_CREATE;\n\
                 registerEvent( new SCOREP_Score_NameMatchEvent( \"IoCreateHandle\",\n\
                 {pad}region_set,\n\
                 {pad}true ) );\n"
            )
        );
    }

    #[test]
    fn test_representative_set_is_largest() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoCreate,
            "creat".to_string(),
            events(&["SCOREP_IoCreateHandle"]),
        );
        registry.insert(
            Category::IoCreate,
            "open".to_string(),
            events(&["SCOREP_IoCreateHandle", "SCOREP_IoOperationBegin"]),
        );

        let output = emit_to_string(&registry);

        // Two events registered, from "open", not one from "creat"
        assert_eq!(output.matches("registerEvent").count(), 2);
        assert!(output.contains("\"IoOperationBegin\""));
    }

    #[test]
    fn test_tie_keeps_first_function() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoSeek,
            "lseek".to_string(),
            events(&["SCOREP_IoSeek"]),
        );
        registry.insert(
            Category::IoSeek,
            "fseek".to_string(),
            events(&["SCOREP_IoOperationBegin"]),
        );

        let output = emit_to_string(&registry);

        assert!(output.contains("\"IoSeek\""));
        assert!(!output.contains("\"IoOperationBegin\""));
    }

    #[test]
    fn test_events_registered_in_sorted_order() {
        let mut registry = ClassifiedRegistry::new();
        registry.insert(
            Category::IoBlockingTransfer,
            "read".to_string(),
            events(&["SCOREP_IoOperationComplete", "SCOREP_IoOperationBegin"]),
        );

        let output = emit_to_string(&registry);
        let begin_pos = output.find("\"IoOperationBegin\"").unwrap();
        let complete_pos = output.find("\"IoOperationComplete\"").unwrap();
        assert!(begin_pos < complete_pos);
    }

    #[test]
    fn test_unprefixed_event_passes_through() {
        assert_eq!(strip_prefix("CustomEvent"), "CustomEvent");
        assert_eq!(strip_prefix("SCOREP_IoSeek"), "IoSeek");
    }
}
