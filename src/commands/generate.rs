//! Generate command implementation.
//!
//! The generate command:
//! 1. Loads the event vocabulary from the reference header
//! 2. Extracts per-function events from each wrapper source
//! 3. Classifies every function into its I/O category
//! 4. Emits the macro-list and registration fragments

use crate::classifier::{classify_wrapper_events, ClassifiedRegistry};
use crate::emitter::{emit_macro_lists, emit_registrations};
use crate::extractor::{extract_wrapper_events, FunctionEventMap, WrapperFamily, WrapperSource};
use crate::search;
use crate::utils::config::{
    DEFAULT_EVENT_HEADER, DEFAULT_EVENT_PATTERN, DEFAULT_ISOC_WRAPPER, DEFAULT_MPI_WRAPPER,
    DEFAULT_POSIX_WRAPPER,
};
use crate::vocabulary::{load_vocabulary, EventVocabulary};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Reference header listing every legal event identifier
    pub event_header: PathBuf,

    /// Event identifier pattern
    pub pattern: String,

    /// MPI wrapper source path
    pub mpi_wrapper: PathBuf,

    /// POSIX wrapper source path
    pub posix_wrapper: PathBuf,

    /// ISO C wrapper source path
    pub isoc_wrapper: PathBuf,

    /// Output path for the macro-list fragment (stdout when absent)
    pub macro_out: Option<PathBuf>,

    /// Output path for the registration fragment (stdout when absent)
    pub register_out: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            event_header: PathBuf::from(DEFAULT_EVENT_HEADER),
            pattern: DEFAULT_EVENT_PATTERN.to_string(),
            mpi_wrapper: PathBuf::from(DEFAULT_MPI_WRAPPER),
            posix_wrapper: PathBuf::from(DEFAULT_POSIX_WRAPPER),
            isoc_wrapper: PathBuf::from(DEFAULT_ISOC_WRAPPER),
            macro_out: None,
            register_out: None,
        }
    }
}

impl GenerateArgs {
    /// The wrapper sources in the fixed processing order: MPI, then POSIX,
    /// then ISO C. The order decides which source wins when the same
    /// function name appears in more than one of them.
    pub fn sources(&self) -> [WrapperSource; 3] {
        [
            WrapperSource::new(&self.mpi_wrapper, WrapperFamily::Mpi),
            WrapperSource::new(&self.posix_wrapper, WrapperFamily::LibWrap),
            WrapperSource::new(&self.isoc_wrapper, WrapperFamily::LibWrap),
        ]
    }
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.pattern.is_empty() {
        anyhow::bail!("Event pattern cannot be empty");
    }

    Regex::new(&args.pattern)
        .with_context(|| format!("Invalid event pattern: {:?}", args.pattern))?;

    if args.event_header.as_os_str().is_empty() {
        anyhow::bail!("Event header path cannot be empty");
    }

    for source in args.sources() {
        if source.file_basename().is_empty() {
            anyhow::bail!(
                "Wrapper source path has no file name: {}",
                source.path().display()
            );
        }
    }

    Ok(())
}

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Vocabulary load failures (fatal, nothing can be classified)
/// * Malformed wrapper declarations (fatal, no partial output)
/// * File write errors
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    let registry = build_registry(&args)?;

    info!("Step 3/3: Writing generated fragments...");

    match &args.macro_out {
        Some(path) => {
            let mut out = BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            );
            emit_macro_lists(&registry, &mut out).context("Failed to write macro lists")?;
            out.flush()?;
            info!("✓ Macro lists written to: {}", path.display());
        }
        None => {
            emit_macro_lists(&registry, &mut io::stdout().lock())
                .context("Failed to write macro lists")?;
        }
    }

    match &args.register_out {
        Some(path) => {
            let mut out = BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            );
            emit_registrations(&registry, &mut out).context("Failed to write registrations")?;
            out.flush()?;
            info!("✓ Registrations written to: {}", path.display());
        }
        None => {
            emit_registrations(&registry, &mut io::stdout().lock())
                .context("Failed to write registrations")?;
        }
    }

    let elapsed = start_time.elapsed();
    info!("Generation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Run the pipeline up to and including classification
///
/// **Public** - shared by the generate and classify commands
pub fn build_registry(args: &GenerateArgs) -> Result<ClassifiedRegistry> {
    info!("Step 1/3: Loading event vocabulary...");
    let vocabulary = load_vocabulary(&args.event_header, &args.pattern)
        .context("Failed to load event vocabulary")?;

    info!("Vocabulary holds {} identifiers", vocabulary.len());

    let pattern = Regex::new(&args.pattern)
        .with_context(|| format!("Invalid event pattern: {:?}", args.pattern))?;

    let mut registry = ClassifiedRegistry::new();

    info!("Step 2/3: Scanning and classifying wrapper sources...");
    for source in args.sources() {
        let wrapper_events = scan_source(&source, &vocabulary, &pattern)
            .with_context(|| format!("Failed to scan {}", source.path().display()))?;

        debug!(
            "{}: {} wrapper functions",
            source.file_basename(),
            wrapper_events.len()
        );

        classify_wrapper_events(&wrapper_events, &mut registry);
    }

    info!(
        "Classified {} functions ({} unclassified)",
        registry.len(),
        registry.unclassified().len()
    );

    Ok(registry)
}

/// Extract one wrapper source's function events
///
/// **Private** - a failed context search degrades to an empty map
fn scan_source(
    source: &WrapperSource,
    vocabulary: &EventVocabulary,
    pattern: &Regex,
) -> Result<FunctionEventMap> {
    let Some(lines) = search::function_context(pattern.as_str(), source.path()) else {
        warn!(
            "No context output for {}, continuing with empty result",
            source.path().display()
        );
        return Ok(FunctionEventMap::new());
    };

    let map = extract_wrapper_events(source, &lines, vocabulary, pattern)?;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = GenerateArgs::default();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_pattern() {
        let args = GenerateArgs {
            pattern: String::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_pattern() {
        let args = GenerateArgs {
            pattern: "SCOREP_Io[".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_header() {
        let args = GenerateArgs {
            event_header: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_sources_in_fixed_order() {
        let args = GenerateArgs::default();
        let sources = args.sources();

        assert_eq!(sources[0].family(), WrapperFamily::Mpi);
        assert_eq!(sources[1].family(), WrapperFamily::LibWrap);
        assert_eq!(sources[2].family(), WrapperFamily::LibWrap);
        assert_eq!(sources[0].file_basename(), "SCOREP_Mpi_Io.c");
    }
}
