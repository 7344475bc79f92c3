//! Score Event Generator CLI
//!
//! Scans instrumented I/O wrapper sources and generates the score-event
//! macro lists and registration statements for the scoring component.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use score_event_gen::commands::{
    execute_classify, execute_generate, validate_args, ClassifyArgs, GenerateArgs,
};
use score_event_gen::utils::config::{
    DEFAULT_EVENT_HEADER, DEFAULT_EVENT_PATTERN, DEFAULT_ISOC_WRAPPER, DEFAULT_MPI_WRAPPER,
    DEFAULT_POSIX_WRAPPER, REPORT_VERSION,
};

/// Score Event Generator - I/O event lists for the scoring component
#[derive(Parser, Debug)]
#[command(name = "score-event-gen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Shared pipeline input arguments
#[derive(clap::Args, Debug)]
struct PipelineOpts {
    /// Reference header listing every legal event identifier
    #[arg(long, default_value = DEFAULT_EVENT_HEADER)]
    event_header: PathBuf,

    /// Event identifier pattern
    #[arg(long, default_value = DEFAULT_EVENT_PATTERN)]
    pattern: String,

    /// MPI wrapper source path
    #[arg(long, default_value = DEFAULT_MPI_WRAPPER)]
    mpi: PathBuf,

    /// POSIX wrapper source path
    #[arg(long, default_value = DEFAULT_POSIX_WRAPPER)]
    posix: PathBuf,

    /// ISO C wrapper source path
    #[arg(long, default_value = DEFAULT_ISOC_WRAPPER)]
    isoc: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the macro-list and registration fragments
    Generate {
        #[command(flatten)]
        pipeline: PipelineOpts,

        /// Output path for the macro-list fragment (stdout if omitted)
        #[arg(long)]
        macro_out: Option<PathBuf>,

        /// Output path for the registration fragment (stdout if omitted)
        #[arg(long)]
        register_out: Option<PathBuf>,
    },

    /// Classify wrapper functions and write a JSON report
    Classify {
        #[command(flatten)]
        pipeline: PipelineOpts,

        /// Output path for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Display version information
    Version,
}

impl PipelineOpts {
    fn into_args(self) -> GenerateArgs {
        GenerateArgs {
            event_header: self.event_header,
            pattern: self.pattern,
            mpi_wrapper: self.mpi,
            posix_wrapper: self.posix,
            isoc_wrapper: self.isoc,
            macro_out: None,
            register_out: None,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Generate {
            pipeline,
            macro_out,
            register_out,
        } => {
            let args = GenerateArgs {
                macro_out,
                register_out,
                ..pipeline.into_args()
            };

            // Validate args first
            validate_args(&args)?;

            // Execute generation
            execute_generate(args)?;
        }

        Commands::Classify {
            pipeline,
            output,
            summary,
        } => {
            let pipeline = pipeline.into_args();
            validate_args(&pipeline)?;

            execute_classify(ClassifyArgs {
                pipeline,
                output,
                print_summary: summary,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Score Event Generator v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Generates scorep-score I/O event lists from instrumented wrapper sources.");
}
