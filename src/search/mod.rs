//! External text-search invocations.
//!
//! The tool never parses wrapper sources itself. It delegates to two search
//! utilities and scans their output:
//! - `grep -o` over the event header, to load the vocabulary
//! - `git grep -p` over a wrapper source, to get every matching line together
//!   with its enclosing function signature as context
//!
//! Both invocations are one-shot: no retries, no timeouts.

use crate::utils::error::VocabularyError;
use log::{debug, warn};
use std::path::Path;
use std::process::Command;

/// Search an artifact for all occurrences of a pattern
///
/// **Public** - used by the vocabulary loader
///
/// Runs `grep -o <pattern> <artifact>`, one match per output line. The
/// returned list retains the trailing empty string left by splitting the
/// final newline; callers must ignore empty "matches".
///
/// # Errors
/// * `VocabularyError::SpawnFailed` - the tool could not be started
/// * `VocabularyError::NoMatches` - the tool exited non-zero (grep exits 1
///   when nothing matched)
pub fn matches(pattern: &str, artifact: &Path) -> Result<Vec<String>, VocabularyError> {
    debug!("grep -o {:?} {}", pattern, artifact.display());

    let output = Command::new("grep")
        .arg("-o")
        .arg(pattern)
        .arg(artifact)
        .output()?;

    if !output.status.success() {
        return Err(VocabularyError::NoMatches {
            status: output.status,
        });
    }

    Ok(split_lines(&output.stdout))
}

/// Search a wrapper source, returning matches with function context
///
/// **Public** - used by the extractor
///
/// Runs `git grep -p <pattern> <path>`. Every returned line is either a
/// context marker (`<path>=<line>`, the enclosing function signature) or a
/// matching body line. A failed invocation is treated as "no output": a
/// warning is logged and `None` is returned, and the caller continues with
/// an empty result rather than aborting the run.
pub fn function_context(pattern: &str, artifact: &Path) -> Option<Vec<String>> {
    debug!("git grep -p {:?} {}", pattern, artifact.display());

    let output = Command::new("git")
        .arg("grep")
        .arg("-p")
        .arg(pattern)
        .arg(artifact)
        .output();

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            warn!("git grep could not be started: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        warn!(
            "git grep failed with exit status {} for {}",
            output.status,
            artifact.display()
        );
        return None;
    }

    Some(split_lines(&output.stdout))
}

/// Split raw tool output into lines
///
/// **Private** - internal utility
fn split_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .split('\n')
        .map(str::to_string)
        .collect()
}
