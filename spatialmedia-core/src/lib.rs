//! Configuration model for the spatialmedia metadata tool.
//!
//! This crate describes how 360° video and spatial audio metadata should be
//! injected into (or reported from) an MP4/MOV container: the spherical
//! projection, the stereoscopic frame layout, an optional crop region, the
//! stitching software label and whether ambisonic audio metadata is written.
//!
//! ## Usage Example
//!
//! ```rust
//! use spatialmedia_core::{ConfigurationBuilder, Crop, Projection, StereoMode};
//!
//! let crop: Crop = "2048:1024:3186:1482:100:100".parse().unwrap();
//! let config = ConfigurationBuilder::new()
//!     .input_path("input.mp4")
//!     .output_path("output.mp4")
//!     .projection(Projection::from_arg("cubemap"))
//!     .stereo_mode(StereoMode::from_arg("TOP-BOTTOM"))
//!     .crop(crop)
//!     .spatial_audio(true)
//!     .build();
//!
//! assert_eq!(config.projection(), Projection::Cubemap);
//! assert_eq!(config.stereo_mode(), StereoMode::TopBottom);
//! assert_eq!(config.crop().map(Crop::as_array), Some([2048, 1024, 3186, 1482, 100, 100]));
//! ```

pub mod config;
pub mod crop;
pub mod error;
pub mod projection;
pub mod stereo;

// Re-exports for public API
pub use config::{Configuration, ConfigurationBuilder};
pub use crop::Crop;
pub use error::{ConfigError, ConfigResult};
pub use projection::Projection;
pub use stereo::StereoMode;
