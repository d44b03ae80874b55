//! Error types for the spatialmedia-core library.
//!
//! Enumerated options never fail: unrecognized projection or stereo text
//! resolves to the default variant. The only fatal input is a crop region
//! that does not resolve to exactly six components.

use thiserror::Error;

/// Custom error types for spatialmedia-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The crop argument did not split into exactly six components.
    #[error("Invalid crop params: {spec}")]
    MalformedCrop {
        /// The literal argument as supplied on the command line
        spec: String,
        /// Number of tokens found after splitting on ':'
        found: usize,
    },
}

/// Result type for spatialmedia-core operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
