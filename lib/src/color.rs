use image::Rgb;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.channels()
    }
}

impl From<Rgb<u8>> for Color {
    fn from(p: Rgb<u8>) -> Self {
        Color::from(p.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb(c.channels())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected `r,g,b` with channels in 0..=255, got `{}`", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseColorError(s.to_string()))?;

        match channels[..] {
            [r, g, b] => Ok(Color::new(r, g, b)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Linear ramp between two colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Color; 2]", into = "[Color; 2]")]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

impl Gradient {
    pub const fn new(start: Color, end: Color) -> Self {
        Gradient { start, end }
    }
}

impl From<[Color; 2]> for Gradient {
    fn from(stops: [Color; 2]) -> Self {
        Gradient::new(stops[0], stops[1])
    }
}

impl From<Gradient> for [Color; 2] {
    fn from(g: Gradient) -> Self {
        [g.start, g.end]
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Color at position `t` on the gradient. `t` outside of [0, 1] extrapolates and each channel is
/// clamped afterwards.
pub fn interpolate(gradient: &Gradient, t: f64) -> Color {
    let channel = |start: u8, end: u8| {
        if start == end {
            return start;
        }

        let slope = end as f64 - start as f64;
        clamp_channel((start as f64 + slope * t) as i64)
    };

    Color::new(
        channel(gradient.start.r, gradient.end.r),
        channel(gradient.start.g, gradient.end.g),
        channel(gradient.start.b, gradient.end.b),
    )
}

/// Subtracts one random amount in `[0, amount)` from all channels. An amount of zero leaves the
/// color untouched and does not draw from `rng`.
pub fn darken<R: Rng + ?Sized>(color: Color, amount: u32, rng: &mut R) -> Color {
    if amount == 0 {
        return color;
    }

    let d = rng.gen_range(0..amount);
    let channel = |c: u8| clamp_channel(c as i64 - d as i64);

    Color::new(channel(color.r), channel(color.g), channel(color.b))
}
