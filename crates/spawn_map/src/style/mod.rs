//! Visual styles for draw commands.
//!
//! - [`Color`] and [`DashPattern`]: the primitive values a style is made of.
//! - [`palette`]: rarity-to-colour lookup for the official presentation.
//! - [`resolver`]: [`StyleResolver`], turning an entry plus a [`PresentationMode`] into a
//!   [`Style`].
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod palette;
pub mod resolver;

pub use palette::Palette;
pub use resolver::{EntryFlags, OverrideStyle, PresentationMode, StyleConfig, StyleResolver};

/// An opaque 8-bit RGB colour.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `#RGB`; the leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            input: input.to_owned(),
        };
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// RGBA bytes with `opacity` in `[0, 1]` mapped onto the alpha channel.
    pub fn to_rgba8(self, opacity: f32) -> [u8; 4] {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

/// Dash/gap lengths in pixels for a dashed outline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

impl DashPattern {
    pub const fn new(dash: f32, gap: f32) -> Self {
        Self { dash, gap }
    }

    /// Whether the pixel at `distance` along the outline falls on a dash.
    pub fn is_on(&self, distance: f32) -> bool {
        let period = self.dash + self.gap;
        if period <= 0.0 {
            return true;
        }
        distance.rem_euclid(period) < self.dash
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dash, self.gap)
    }
}

/// Resolved look of one draw command.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_weight: f32,
    pub stroke_opacity: f32,
    pub fill_opacity: f32,
    pub dash: Option<DashPattern>,
}

impl Style {
    /// Same style with a solid outline.
    pub fn without_dash(mut self) -> Self {
        self.dash = None;
        self
    }
}
