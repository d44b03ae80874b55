//! Tests for default configuration values
//!
//! These tests verify:
//! - The documented defaults of a freshly built Configuration
//! - That the public constants agree with those defaults
//! - That enumerated fields always resolve to a defined variant

use spatialmedia_core::config::{
    CROP_COMPONENTS, DEFAULT_INJECT, DEFAULT_SPATIAL_AUDIO, DEFAULT_STITCHING_SOFTWARE,
};
use spatialmedia_core::{Configuration, ConfigurationBuilder, Crop, Projection, StereoMode};

#[test]
fn test_default_config() {
    let config = Configuration::default();

    assert_eq!(config.inject(), DEFAULT_INJECT);
    assert_eq!(config.spatial_audio(), DEFAULT_SPATIAL_AUDIO);
    assert_eq!(config.stitching_software(), DEFAULT_STITCHING_SOFTWARE);
    assert_eq!(config.projection(), Projection::Equirect);
    assert_eq!(config.stereo_mode(), StereoMode::None);
    assert!(config.crop().is_none());
    assert!(config.input_path().is_none());
    assert!(config.output_path().is_none());
}

#[test]
fn test_builder_matches_default() {
    assert_eq!(Configuration::builder().build(), Configuration::default());
    assert_eq!(ConfigurationBuilder::new().build(), Configuration::default());
}

#[test]
fn test_enumerations_are_total() {
    for value in ["", "none", "EQUIRECT", "cube map", "single_fisheye", "top-bottom", "\u{e9}"] {
        assert!(Projection::ALL.contains(&Projection::from_arg(value)));
        assert!(StereoMode::ALL.contains(&StereoMode::from_arg(value)));
    }
}

#[test]
fn test_crop_component_count() {
    let crop: Crop = "2048:1024:3186:1482:100:100".parse().unwrap();
    assert_eq!(crop.as_array().len(), CROP_COMPONENTS);
    assert!("2048:1024:3186:1482:100".parse::<Crop>().is_err());
}
