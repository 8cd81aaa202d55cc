use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::PipelineError;

/// 8-bit RGB colour, written and parsed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
    pub const YELLOW: Rgb = Rgb(0xff, 0xff, 0x00);
    /// CSS `green`, not pure `#00ff00`.
    pub const GREEN: Rgb = Rgb(0x00, 0x80, 0x00);
    pub const GRAY: Rgb = Rgb(0x80, 0x80, 0x80);

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Piecewise-linear gradient over evenly spaced stops on `[0, 1]`.
///
/// Positions outside `[0, 1]` saturate to the end stops.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    pub fn new(stops: Vec<Rgb>) -> Result<Self, PipelineError> {
        if stops.len() < 2 {
            return Err(PipelineError::InvalidConfig(format!(
                "a gradient needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    pub fn at(&self, position: f64) -> Rgb {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let segments = self.stops.len() - 1;
        let scaled = position * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;

        let from = self.stops[index];
        let to = self.stops[index + 1];
        Rgb(
            lerp(from.0, to.0, local),
            lerp(from.1, to.1, local),
            lerp(from.2, to.2, local),
        )
    }
}

impl Default for Gradient {
    /// Red through yellow to green.
    fn default() -> Self {
        Self {
            stops: vec![Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
        }
    }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}
