//! Linear scan of function-context search output.
//!
//! The input is the line stream produced by the context-aware search: context
//! markers of the form `<path>=<line>` interleaved with matching body lines.
//! The scan groups every in-vocabulary event match by the enclosing wrapper
//! function.

use super::wrapper::WrapperSource;
use crate::utils::config::CONTEXT_SEPARATOR_LINES;
use crate::utils::error::ExtractError;
use crate::vocabulary::EventVocabulary;
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;

/// Events observed in one wrapper function's body
pub type EventSet = BTreeSet<String>;

/// Function name to observed-event-set mapping for one wrapper source
///
/// **Public** - insertion-ordered: functions appear in the order their
/// declarations were encountered, which keeps all downstream output stable
/// across runs. A repeated declaration of the same name resets its entry
/// (last wins).
#[derive(Debug, Clone, Default)]
pub struct FunctionEventMap {
    entries: Vec<(String, EventSet)>,
}

impl FunctionEventMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reset the entry for `name`
    pub fn insert(&mut self, name: String, events: EventSet) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = events;
        } else {
            self.entries.push((name, events));
        }
    }

    pub fn get(&self, name: &str) -> Option<&EventSet> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, events)| events)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventSet)> {
        self.entries
            .iter()
            .map(|(name, events)| (name.as_str(), events))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scan one wrapper source's context output into a FunctionEventMap
///
/// **Public** - second stage of the pipeline
///
/// # Arguments
/// * `source` - the wrapper source the lines came from
/// * `lines` - function-context search output for that source
/// * `vocabulary` - legal event identifiers; matches outside it are dropped
/// * `pattern` - compiled event pattern
///
/// # Returns
/// Map of every recognized wrapper function to its observed events. Functions
/// without any event keep an empty set here; the classifier drops them.
///
/// # Errors
/// * `ExtractError::MalformedDeclaration` - a function-start line yields no
///   name. Fatal: a silently skipped declaration would corrupt the maps.
pub fn extract_wrapper_events(
    source: &WrapperSource,
    lines: &[String],
    vocabulary: &EventVocabulary,
    pattern: &Regex,
) -> Result<FunctionEventMap, ExtractError> {
    let mut map = FunctionEventMap::new();

    // End-of-function framing: the next context marker for this same file
    let marker = format!("{}=", source.file_basename());
    let family = source.family();

    let mut index = 0;
    while index < lines.len() {
        let line = &lines[index];

        if !family.is_function_start(line) {
            index += 1;
            continue;
        }

        let name = family
            .function_name(line)
            .ok_or_else(|| ExtractError::MalformedDeclaration {
                file: source.file_basename().to_string(),
                line: line.clone(),
            })?;

        // Step past the declaration and the search tool's separator line(s)
        index += 1 + CONTEXT_SEPARATOR_LINES;

        let mut events = EventSet::new();
        while index < lines.len() && !lines[index].contains(&marker) {
            if let Some(found) = pattern.find(&lines[index]) {
                if vocabulary.contains(found.as_str()) {
                    events.insert(found.as_str().to_string());
                }
            }
            index += 1;
        }

        debug!("{}: {} events", name, events.len());
        map.insert(name, events);
        // The terminating marker line is left for the outer scan: it may
        // itself start the next wrapped function
    }

    Ok(map)
}
