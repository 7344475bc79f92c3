//! Wrapper source descriptions.
//!
//! Each wrapper source file follows one of a small number of syntactic
//! conventions for declaring wrapped functions. The convention decides two
//! things: how to recognize a function-start line in the function-context
//! search output, and how to recover the wrapped function's name from it.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Marker introducing a library-wrapper function declaration
const LIBWRAP_DECL_MARKER: &str = "SCOREP_LIBWRAP_FUNC_NAME";

/// Syntactic family of a wrapper source
///
/// **Public** - closed set; adding a family means adding a variant here,
/// not registering a callback somewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperFamily {
    /// Library-wrapping convention: declarations read
    /// `SCOREP_LIBWRAP_FUNC_NAME( name )( args... )`
    LibWrap,
    /// MPI convention: declarations name the wrapped routine directly,
    /// e.g. `int MPI_File_open( ... )`
    Mpi,
}

impl WrapperFamily {
    /// Does this context line start a wrapped function?
    ///
    /// Function-start lines are context markers, so the family token appears
    /// right after the `=` separator inserted by the search tool.
    pub fn is_function_start(&self, line: &str) -> bool {
        match self {
            WrapperFamily::LibWrap => line.contains("=SCOREP_LIBWRAP_FUNC_NAME"),
            WrapperFamily::Mpi => line.contains("=MPI_File"),
        }
    }

    /// Recover the wrapped function's name from a function-start line
    ///
    /// Returns `None` when the line satisfies `is_function_start` but carries
    /// no parseable name; callers treat that as a fatal malformed declaration.
    pub fn function_name(&self, line: &str) -> Option<String> {
        match self {
            WrapperFamily::LibWrap => libwrap_function_name(line),
            WrapperFamily::Mpi => mpi_function_name(line),
        }
    }
}

/// Extract the wrapped name from a libwrap declaration
///
/// **Private** - `SCOREP_LIBWRAP_FUNC_NAME( open )( ... )` becomes `open`:
/// take the declaration from the marker onward, rewrite `(` to `,` and pick
/// the token after the first space.
fn libwrap_function_name(line: &str) -> Option<String> {
    let start = line.find(LIBWRAP_DECL_MARKER)?;
    let decl = line[start..].replace('(', ",");

    let name = decl.split(' ').nth(1)?;
    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}

/// Extract the wrapped name from an MPI declaration
///
/// **Private** - the name is the leading `MPI(_[A-Za-z]*)*` match,
/// e.g. `MPI_File_open`
fn mpi_function_name(line: &str) -> Option<String> {
    static MPI_NAME: OnceLock<Regex> = OnceLock::new();
    let re = MPI_NAME.get_or_init(|| {
        Regex::new("MPI(_[A-Za-z]*)*").expect("MPI name pattern is valid")
    });

    re.find(line).map(|m| m.as_str().to_string())
}

/// A wrapper source artifact bound to its syntactic family
#[derive(Debug, Clone)]
pub struct WrapperSource {
    path: PathBuf,
    family: WrapperFamily,
}

impl WrapperSource {
    pub fn new(path: impl Into<PathBuf>, family: WrapperFamily) -> Self {
        Self {
            path: path.into(),
            family,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn family(&self) -> WrapperFamily {
        self.family
    }

    /// File name without directories, as it appears in context markers
    pub fn file_basename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}
