// spatialmedia-cli/src/lib.rs
//
// Library portion of the spatialmedia CLI application.
// Contains the option table, the argument parser and output helpers.

pub mod error;
pub mod help;
pub mod logging;
mod long_only;
pub mod options;
pub mod output;
pub mod parser;

// Re-export items needed by the binary or integration tests
pub use error::{CliError, CliResult};
pub use parser::{parse, try_parse};
