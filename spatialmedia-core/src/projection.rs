//! Spherical projection of the video frame.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// Spherical mapping format of the encoded video frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Equirectangular projection (the default)
    #[default]
    Equirect,
    /// Cube map projection
    Cubemap,
    /// Single fisheye lens projection
    SingleFisheye,
}

impl Projection {
    /// Every variant, in declaration order.
    pub const ALL: [Projection; 3] = [
        Projection::Equirect,
        Projection::Cubemap,
        Projection::SingleFisheye,
    ];

    /// Resolves a command-line value to a projection.
    ///
    /// Matching ignores ASCII case. Text that names no projection falls back
    /// to [`Projection::Equirect`] instead of failing, so this never errors.
    pub fn from_arg(value: &str) -> Self {
        match Self::ALL
            .into_iter()
            .find(|projection| projection.as_str().eq_ignore_ascii_case(value))
        {
            Some(projection) => projection,
            None => {
                debug!(
                    "Unrecognized projection '{}', using {}",
                    value,
                    Projection::default()
                );
                Projection::default()
            }
        }
    }

    /// Canonical command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Equirect => "equirect",
            Projection::Cubemap => "cubemap",
            Projection::SingleFisheye => "single_fisheye",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
