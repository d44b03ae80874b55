//! Crop region of a full panoramic frame.
//!
//! A crop is written on the command line as six colon-separated integers,
//! `w:h:f_w:f_h:x:y`, e.g. `2048:1024:3186:1482:100:100`:
//!
//! - `w`   CroppedAreaImageWidthPixels
//! - `h`   CroppedAreaImageHeightPixels
//! - `f_w` FullPanoWidthPixels
//! - `f_h` FullPanoHeightPixels
//! - `x`   CroppedAreaLeftPixels
//! - `y`   CroppedAreaTopPixels
//!
//! Empty tokens are skipped, so `1::2:3:4:5:6` still has six components.
//! Tokens convert leniently: a token without a leading digit run counts as 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::CROP_COMPONENTS;
use crate::error::{ConfigError, ConfigResult};

/// Sub-rectangle of the full panorama that is present in the encoded video.
///
/// The all-zero value means "no crop specified".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crop {
    pub width: u32,
    pub height: u32,
    pub full_width: u32,
    pub full_height: u32,
    pub left: u32,
    pub top: u32,
}

impl Crop {
    /// Parses a `w:h:f_w:f_h:x:y` crop argument.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedCrop`] unless the argument splits into
    /// exactly six non-empty tokens.
    pub fn parse(spec: &str) -> ConfigResult<Self> {
        let values: Vec<u32> = spec
            .split(':')
            .filter(|token| !token.is_empty())
            .map(leading_integer)
            .collect();

        let [width, height, full_width, full_height, left, top] =
            <[u32; CROP_COMPONENTS]>::try_from(values.as_slice()).map_err(|_| {
                ConfigError::MalformedCrop {
                    spec: spec.to_string(),
                    found: values.len(),
                }
            })?;

        Ok(Self {
            width,
            height,
            full_width,
            full_height,
            left,
            top,
        })
    }

    /// Components in command-line order.
    pub fn as_array(&self) -> [u32; CROP_COMPONENTS] {
        [
            self.width,
            self.height,
            self.full_width,
            self.full_height,
            self.left,
            self.top,
        ]
    }

    /// True only when every component is zero.
    ///
    /// A crop with a single non-zero component still counts as specified.
    pub fn is_unspecified(&self) -> bool {
        self.as_array().iter().all(|&component| component == 0)
    }
}

impl From<[u32; CROP_COMPONENTS]> for Crop {
    fn from([width, height, full_width, full_height, left, top]: [u32; CROP_COMPONENTS]) -> Self {
        Self {
            width,
            height,
            full_width,
            full_height,
            left,
            top,
        }
    }
}

impl FromStr for Crop {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.width, self.height, self.full_width, self.full_height, self.left, self.top
        )
    }
}

/// atoi-style conversion: leading whitespace and an optional '+' are skipped,
/// then the leading digit run is read. Overflow saturates.
fn leading_integer(token: &str) -> u32 {
    let trimmed = token.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}
