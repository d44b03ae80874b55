// ============================================================================
// spatialmedia-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for Configuration
//
// Fluent, by-value construction of Configuration. Every field starts at the
// documented default, so a builder that is never touched yields exactly
// Configuration::default().

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::Configuration;
use crate::crop::Crop;
use crate::projection::Projection;
use crate::stereo::StereoMode;

/// Builder for creating Configuration instances.
///
/// # Examples
///
/// ```rust
/// use spatialmedia_core::{ConfigurationBuilder, Projection, StereoMode};
///
/// let config = ConfigurationBuilder::new()
///     .input_path("input.mp4")
///     .output_path("output.mp4")
///     .projection(Projection::Cubemap)
///     .stereo_mode(StereoMode::LeftRight)
///     .stitching_software("Custom Stitcher")
///     .spatial_audio(true)
///     .build();
///
/// assert!(config.inject());
/// assert_eq!(config.stitching_software(), "Custom Stitcher");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Creates a new ConfigurationBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source media file.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = Some(path.into());
        self
    }

    /// Sets the destination media file.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = Some(path.into());
        self
    }

    /// Sets whether metadata is written (true) or only reported (false).
    pub fn inject(mut self, inject: bool) -> Self {
        self.config.inject = inject;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.config.projection = projection;
        self
    }

    pub fn stereo_mode(mut self, stereo_mode: StereoMode) -> Self {
        self.config.stereo_mode = stereo_mode;
        self
    }

    /// Sets the crop region. An all-zero crop reads back as unspecified.
    pub fn crop(mut self, crop: Crop) -> Self {
        self.config.crop = crop;
        self
    }

    /// Sets the stitching software label, verbatim.
    pub fn stitching_software(mut self, label: impl Into<String>) -> Self {
        self.config.stitching_software = label.into();
        self
    }

    /// Enables ambisonic spatial audio metadata.
    pub fn spatial_audio(mut self, enable: bool) -> Self {
        self.config.spatial_audio = enable;
        self
    }

    /// Builds the Configuration.
    pub fn build(self) -> Configuration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_untouched_builder_yields_defaults() {
        assert_eq!(ConfigurationBuilder::new().build(), Configuration::default());
    }

    #[test]
    fn test_later_setters_overwrite_earlier_ones() {
        let config = ConfigurationBuilder::new()
            .stereo_mode(StereoMode::TopBottom)
            .stereo_mode(StereoMode::LeftRight)
            .stitching_software("first")
            .stitching_software("second")
            .build();

        assert_eq!(config.stereo_mode(), StereoMode::LeftRight);
        assert_eq!(config.stitching_software(), "second");
    }

    #[test]
    fn test_crop_round_trip() {
        let crop = Crop::from([2048, 1024, 3186, 1482, 100, 100]);
        let config = ConfigurationBuilder::new().crop(crop).build();
        assert_eq!(config.crop(), Some(&crop));

        let zeroed = ConfigurationBuilder::new().crop(Crop::default()).build();
        assert!(zeroed.crop().is_none());
    }

    #[test]
    fn test_paths() {
        let config = ConfigurationBuilder::new()
            .input_path("input.mp4")
            .output_path("output.mp4")
            .build();
        assert_eq!(config.input_path(), Some(Path::new("input.mp4")));
        assert_eq!(config.output_path(), Some(Path::new("output.mp4")));
    }
}
