// ============================================================================
// spatialmedia-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger set-up for the spatialmedia binary
//
// The application uses env_logger with the RUST_LOG environment variable:
// - unset (default): warnings and errors only
// - RUST_LOG=debug: options as they are applied, resolved file paths
// - RUST_LOG=trace: the argument vector after long option normalization
//
// Log lines go to stderr so they never mix with the help listing or the
// configuration summary on stdout.

use std::io::Write;

use env_logger::Env;

/// Default filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes the global logger.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
