//! Configuration structures and constants for the spatialmedia-core library.
//!
//! A [`Configuration`] is built once per invocation, normally by the
//! command-line parser, and handed read-only to the injection engine.

mod builder;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use builder::ConfigurationBuilder;

use crate::crop::Crop;
use crate::projection::Projection;
use crate::stereo::StereoMode;

// Default constants

/// Stitching software label written when none is given.
pub const DEFAULT_STITCHING_SOFTWARE: &str = "Spherical Metadata Tool";

/// Metadata is injected unless the caller says otherwise.
/// The `-i/--inject` flag therefore has no visible effect.
pub const DEFAULT_INJECT: bool = true;

/// Spatial audio metadata is opt-in.
pub const DEFAULT_SPATIAL_AUDIO: bool = false;

/// Number of colon-separated components in a crop argument.
pub const CROP_COMPONENTS: usize = 6;

/// Resolved spatial media configuration.
///
/// Fields are private; use [`ConfigurationBuilder`] to construct a
/// non-default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Source media file
    input_path: Option<PathBuf>,

    /// Destination media file
    output_path: Option<PathBuf>,

    /// Write metadata rather than only report it
    inject: bool,

    projection: Projection,

    stereo_mode: StereoMode,

    /// All-zero when no crop was given
    crop: Crop,

    stitching_software: String,

    /// First-order ambisonics (ACN channel ordering, SN3D normalization)
    spatial_audio: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            inject: DEFAULT_INJECT,
            projection: Projection::default(),
            stereo_mode: StereoMode::default(),
            crop: Crop::default(),
            stitching_software: DEFAULT_STITCHING_SOFTWARE.to_string(),
            spatial_audio: DEFAULT_SPATIAL_AUDIO,
        }
    }
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn inject(&self) -> bool {
        self.inject
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn stereo_mode(&self) -> StereoMode {
        self.stereo_mode
    }

    /// Returns the crop region, or `None` if every component is zero.
    pub fn crop(&self) -> Option<&Crop> {
        if self.crop.is_unspecified() {
            None
        } else {
            Some(&self.crop)
        }
    }

    pub fn stitching_software(&self) -> &str {
        &self.stitching_software
    }

    pub fn spatial_audio(&self) -> bool {
        self.spatial_audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert!(config.input_path().is_none());
        assert!(config.output_path().is_none());
        assert!(config.inject());
        assert_eq!(config.projection(), Projection::Equirect);
        assert_eq!(config.stereo_mode(), StereoMode::None);
        assert!(config.crop().is_none());
        assert_eq!(config.stitching_software(), "Spherical Metadata Tool");
        assert!(!config.spatial_audio());
    }

    #[test]
    fn test_serializes_with_command_line_spellings() {
        let config = Configuration::builder()
            .input_path("in.mp4")
            .projection(Projection::SingleFisheye)
            .stereo_mode(StereoMode::LeftRight)
            .build();

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["projection"], "single_fisheye");
        assert_eq!(json["stereo_mode"], "left-right");
        assert_eq!(json["input_path"], "in.mp4");
        assert!(json["output_path"].is_null());

        let decoded: Configuration = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, config);
    }
}
