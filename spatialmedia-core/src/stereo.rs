//! Stereoscopic frame packing.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// Layout convention for stereoscopic (3D) frame packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StereoMode {
    /// Mono frame layout
    #[default]
    None,
    /// Top half contains the left eye and bottom half contains the right eye
    TopBottom,
    /// Left half contains the left eye and right half contains the right eye
    LeftRight,
}

impl StereoMode {
    /// Every variant, in declaration order.
    pub const ALL: [StereoMode; 3] = [
        StereoMode::None,
        StereoMode::TopBottom,
        StereoMode::LeftRight,
    ];

    /// Resolves a command-line value to a stereo mode.
    ///
    /// Matching ignores ASCII case; anything else resolves to
    /// [`StereoMode::None`].
    pub fn from_arg(value: &str) -> Self {
        match Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
        {
            Some(mode) => mode,
            None => {
                debug!("Unrecognized stereo mode '{}', using none", value);
                StereoMode::None
            }
        }
    }

    /// Canonical command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            StereoMode::None => "none",
            StereoMode::TopBottom => "top-bottom",
            StereoMode::LeftRight => "left-right",
        }
    }

    /// Returns true for any layout carrying two eyes.
    pub fn is_stereoscopic(self) -> bool {
        self != StereoMode::None
    }
}

impl fmt::Display for StereoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_matches_each_spelling() {
        assert_eq!(StereoMode::from_arg("none"), StereoMode::None);
        assert_eq!(StereoMode::from_arg("top-bottom"), StereoMode::TopBottom);
        assert_eq!(StereoMode::from_arg("left-right"), StereoMode::LeftRight);
    }

    #[test]
    fn test_from_arg_ignores_case() {
        assert_eq!(StereoMode::from_arg("Top-Bottom"), StereoMode::TopBottom);
        assert_eq!(StereoMode::from_arg("LEFT-RIGHT"), StereoMode::LeftRight);
    }

    #[test]
    fn test_from_arg_falls_back_to_none() {
        assert_eq!(StereoMode::from_arg("top_bottom"), StereoMode::None);
        assert_eq!(StereoMode::from_arg("sbs"), StereoMode::None);
        assert_eq!(StereoMode::from_arg(""), StereoMode::None);
    }

    #[test]
    fn test_is_stereoscopic() {
        assert!(!StereoMode::None.is_stereoscopic());
        assert!(StereoMode::TopBottom.is_stereoscopic());
        assert!(StereoMode::LeftRight.is_stereoscopic());
    }
}
