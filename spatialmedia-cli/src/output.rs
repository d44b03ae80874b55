//! Terminal summary of a resolved Configuration.

use std::fmt::Display;

use console::style;
use spatialmedia_core::{Configuration, StereoMode};

/// Print a heading with a separator line beneath it
pub fn print_heading(text: &str) {
    println!("{}", style(text).bold());
    println!("{}", style("=".repeat(40)).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    let label = format!("{:<20}", format!("{}:", label));
    println!("{} {}", style(label).cyan(), value);
}

/// Renders the summary lines for `config`, without styling.
pub fn summary_lines(config: &Configuration) -> Vec<(&'static str, String)> {
    let path_or_none = |path: Option<&std::path::Path>| {
        path.map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
    };

    vec![
        ("Input file", path_or_none(config.input_path())),
        ("Output file", path_or_none(config.output_path())),
        (
            "Mode",
            if config.inject() { "inject" } else { "report" }.to_string(),
        ),
        ("Projection", config.projection().to_string()),
        ("Stereo mode", stereo_description(config.stereo_mode())),
        (
            "Crop",
            config
                .crop()
                .map_or_else(|| "(unspecified)".to_string(), ToString::to_string),
        ),
        ("Stitching software", config.stitching_software().to_string()),
        (
            "Spatial audio",
            if config.spatial_audio() {
                "first-order ambisonics (ACN, SN3D)"
            } else {
                "off"
            }
            .to_string(),
        ),
    ]
}

fn stereo_description(mode: StereoMode) -> String {
    if mode.is_stereoscopic() {
        format!("{} (stereoscopic)", mode)
    } else {
        format!("{} (mono)", mode)
    }
}

/// Prints the resolved configuration to stdout.
pub fn print_configuration(config: &Configuration) {
    print_heading("Spatial Media Configuration");
    for (label, value) in summary_lines(config) {
        print_info(label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatialmedia_core::{ConfigurationBuilder, Crop};

    #[test]
    fn test_summary_of_defaults() {
        let lines = summary_lines(&Configuration::default());
        let value = |label: &str| {
            lines
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(value("Input file"), "(none)");
        assert_eq!(value("Mode"), "inject");
        assert_eq!(value("Projection"), "equirect");
        assert_eq!(value("Stereo mode"), "none (mono)");
        assert_eq!(value("Crop"), "(unspecified)");
        assert_eq!(value("Stitching software"), "Spherical Metadata Tool");
        assert_eq!(value("Spatial audio"), "off");
    }

    #[test]
    fn test_summary_shows_crop_and_stereo() {
        let config = ConfigurationBuilder::new()
            .stereo_mode(StereoMode::TopBottom)
            .crop(Crop::from([1, 2, 3, 4, 5, 6]))
            .build();
        let lines = summary_lines(&config);
        assert!(lines.contains(&("Crop", "1:2:3:4:5:6".to_string())));
        assert!(lines.contains(&("Stereo mode", "top-bottom (stereoscopic)".to_string())));
    }
}
