//! Configuration and constants for the CLI.

/// Current classification report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Default event pattern: an event-type identifier with an alphabetic suffix
pub const DEFAULT_EVENT_PATTERN: &str = "SCOREP_Io[A-Za-z]*";

/// Default reference header listing all legal event identifiers
pub const DEFAULT_EVENT_HEADER: &str = "../../measurement/include/SCOREP_Events.h";

// Default wrapper source locations inside the measurement framework tree
pub const DEFAULT_MPI_WRAPPER: &str = "../../adapters/mpi/SCOREP_Mpi_Io.c";
pub const DEFAULT_POSIX_WRAPPER: &str = "../../adapters/io/posix/scorep_posix_io_wrap.c";
pub const DEFAULT_ISOC_WRAPPER: &str = "../../adapters/io/posix/scorep_posix_io_wrap_isoc.c";

/// Lines between a wrapper declaration and its body in the function-context
/// search output. `git grep -p` prints the matched signature and then one
/// separator line before the body lines; a different context tool may need a
/// different skip count.
pub const CONTEXT_SEPARATOR_LINES: usize = 1;

/// Prefix shared by every event identifier in the vocabulary, stripped when
/// emitting registration statements
pub const EVENT_NAME_PREFIX: &str = "SCOREP_";

/// Prefix of the emitted score-event macro names
pub const MACRO_NAME_PREFIX: &str = "SCOREP_SCORE_EVENT_";
