//! Event vocabulary loading.
//!
//! The vocabulary is the authoritative set of event identifiers a wrapper is
//! allowed to emit. It is loaded once per run from a reference header and used
//! only for membership tests: any token matched during extraction that is not
//! in the vocabulary is silently dropped.

use crate::search;
use crate::utils::error::VocabularyError;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// The set of legal event identifiers
///
/// **Public** - read-only after loading
///
/// May contain an empty string when the reference artifact ends with a match
/// terminator; membership tests are only ever performed with non-empty
/// pattern matches, so the empty entry is inert.
#[derive(Debug, Clone, Default)]
pub struct EventVocabulary {
    events: HashSet<String>,
}

impl EventVocabulary {
    /// Build a vocabulary from an iterator of identifiers
    pub fn from_events<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test, the only supported query
    pub fn contains(&self, event: &str) -> bool {
        self.events.contains(event)
    }

    /// Number of known identifiers (including an empty entry, if present)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Load the event vocabulary from a reference header
///
/// **Public** - first stage of the pipeline
///
/// # Arguments
/// * `header` - artifact listing every legal event identifier
/// * `pattern` - identifier-family pattern (e.g. `SCOREP_Io[A-Za-z]*`)
///
/// # Errors
/// * `VocabularyError` - the search tool failed or found nothing. Fatal for
///   the run: without a vocabulary nothing can be classified.
pub fn load_vocabulary(header: &Path, pattern: &str) -> Result<EventVocabulary, VocabularyError> {
    info!("Loading event vocabulary from {}", header.display());

    let matches = search::matches(pattern, header)?;
    let vocabulary = EventVocabulary::from_events(matches);

    debug!("Vocabulary holds {} identifiers", vocabulary.len());

    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let vocab = EventVocabulary::from_events(["SCOREP_IoSeek", "SCOREP_IoCreateHandle"]);

        assert!(vocab.contains("SCOREP_IoSeek"));
        assert!(!vocab.contains("SCOREP_IoDeleteFile"));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let vocab = EventVocabulary::from_events(["SCOREP_IoSeek", "SCOREP_IoSeek"]);
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_empty_entry_is_tolerated() {
        // A trailing match terminator in the artifact yields an empty string;
        // it must be carried without affecting real lookups
        let vocab = EventVocabulary::from_events(["SCOREP_IoSeek", ""]);

        assert!(vocab.contains("SCOREP_IoSeek"));
        assert!(vocab.contains(""));
        assert_eq!(vocab.len(), 2);
    }
}
