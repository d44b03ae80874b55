// ============================================================================
// spatialmedia-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Why an invocation produced no Configuration
//
// KEY COMPONENTS:
// - CliError: help requested, unrecognized option, malformed crop
// - CliResult: Type alias for CLI operations
// - Exit status and reporting for each case

// ---- External crate imports ----
use spatialmedia_core::ConfigError;
use thiserror::Error;

// ---- Internal crate imports ----
use crate::help;

/// Exit status for an explicit help request.
pub const EXIT_HELP: i32 = 0;

/// Exit status for any input error.
pub const EXIT_USAGE: i32 = 2;

/// Reasons the parser stops without producing a Configuration.
#[derive(Error, Debug)]
pub enum CliError {
    /// `-h`, `-?` or `--help` appeared somewhere in the arguments.
    #[error("help requested")]
    UsageRequested,

    /// clap rejected the arguments (unknown flag, missing value, ...).
    #[error("{0}")]
    UnrecognizedOption(String),

    /// The crop argument did not resolve to six components.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit status for this error.
    ///
    /// Help exits successfully; input errors exit with the conventional
    /// usage-error status.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UsageRequested => EXIT_HELP,
            CliError::UnrecognizedOption(_) | CliError::Config(_) => EXIT_USAGE,
        }
    }

    /// Writes the user-facing report for this error.
    ///
    /// Help and crop diagnostics go to stdout; an unrecognized option adds a
    /// one-line note on stderr before the help listing.
    pub fn report(&self) {
        match self {
            CliError::UsageRequested => help::print_help(),
            CliError::UnrecognizedOption(reason) => {
                eprintln!("spatialmedia: {}", reason);
                help::print_help();
            }
            CliError::Config(err) => println!("Error: {}", err),
        }
    }
}
