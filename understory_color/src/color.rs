// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Color`] value type and conversions between its spaces.

use core::fmt;
use core::str::FromStr;

use crate::channel::{ColorChannel, ColorSpace};
use crate::error::ColorError;

/// An immutable color: three channel values in a [`ColorSpace`] plus alpha.
///
/// Channel values are always inside their [`ChannelRange`](crate::ChannelRange);
/// every constructor and [`with_channel_value`](Self::with_channel_value)
/// clamps. Hue is kept in `0..=360`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    space: ColorSpace,
    values: [f64; 3],
    alpha: f64,
}

impl Color {
    /// Opaque white in RGB.
    pub const WHITE: Self = Self {
        space: ColorSpace::Rgb,
        values: [255.0, 255.0, 255.0],
        alpha: 1.0,
    };

    /// Create a color from raw channel values in `space`, clamping each one.
    pub fn new(space: ColorSpace, values: [f64; 3], alpha: f64) -> Self {
        let channels = space.channels();
        Self {
            space,
            values: [
                channels[0].range().clamp(values[0]),
                channels[1].range().clamp(values[1]),
                channels[2].range().clamp(values[2]),
            ],
            alpha: ColorChannel::Alpha.range().clamp(alpha),
        }
    }

    /// An opaque RGB color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(ColorSpace::Rgb, [red, green, blue], 1.0)
    }

    /// An RGB color with alpha.
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Rgb, [red, green, blue], alpha)
    }

    /// An opaque HSB color.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::new(ColorSpace::Hsb, [hue, saturation, brightness], 1.0)
    }

    /// An HSB color with alpha.
    pub fn hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Hsb, [hue, saturation, brightness], alpha)
    }

    /// An opaque HSL color.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new(ColorSpace::Hsl, [hue, saturation, lightness], 1.0)
    }

    /// An HSL color with alpha.
    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::new(ColorSpace::Hsl, [hue, saturation, lightness], alpha)
    }

    /// Parse a color string.
    ///
    /// See [`crate::parse`] for the accepted syntax.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        crate::parse::parse(input)
    }

    /// The space this color is expressed in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The three native channels, in slot order.
    pub fn channels(&self) -> [ColorChannel; 3] {
        self.space.channels()
    }

    /// The alpha value.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The range of `channel`.
    pub fn channel_range(&self, channel: ColorChannel) -> crate::ChannelRange {
        channel.range()
    }

    /// Read a channel value.
    ///
    /// Channels that are not native to this color's space are read from a
    /// converted copy.
    pub fn channel_value(&self, channel: ColorChannel) -> f64 {
        match channel.locate(self.space) {
            None => self.alpha,
            Some((space, slot)) => self.to_space(space).values[slot.index()],
        }
    }

    /// Return a copy with one channel replaced.
    ///
    /// The value is clamped into the channel's range. If the channel is not
    /// native to this color's space, the result is expressed in a space that
    /// has it.
    pub fn with_channel_value(&self, channel: ColorChannel, value: f64) -> Self {
        let value = channel.range().clamp(value);
        match channel.locate(self.space) {
            None => Self {
                alpha: value,
                ..*self
            },
            Some((space, slot)) => {
                let mut color = self.to_space(space);
                color.values[slot.index()] = value;
                color
            }
        }
    }

    /// Return a copy with the given alpha.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        self.with_channel_value(ColorChannel::Alpha, alpha)
    }

    /// Convert to another color space.
    ///
    /// RGB results are rounded to whole numbers, HSB/HSL results to two
    /// decimal places.
    pub fn to_space(&self, space: ColorSpace) -> Self {
        if space == self.space {
            return *self;
        }
        let [a, b, c] = self.values;
        let values = match (self.space, space) {
            (ColorSpace::Rgb, ColorSpace::Hsb) => {
                let (h, s, v) = rgb_to_hsb(a / 255.0, b / 255.0, c / 255.0);
                [h, s * 100.0, v * 100.0].map(round_hundredths)
            }
            (ColorSpace::Rgb, ColorSpace::Hsl) => {
                let (h, s, l) = rgb_to_hsl(a / 255.0, b / 255.0, c / 255.0);
                [h, s * 100.0, l * 100.0].map(round_hundredths)
            }
            (ColorSpace::Hsb, ColorSpace::Rgb) => {
                let (r, g, b) = hsb_to_rgb(a, b / 100.0, c / 100.0);
                [r, g, b].map(|v| (v * 255.0).round())
            }
            (ColorSpace::Hsl, ColorSpace::Rgb) => {
                let (r, g, b) = hsl_to_rgb(a, b / 100.0, c / 100.0);
                [r, g, b].map(|v| (v * 255.0).round())
            }
            (ColorSpace::Hsb, ColorSpace::Hsl) => {
                let (s, l) = hsb_to_hsl(b / 100.0, c / 100.0);
                [a, s * 100.0, l * 100.0].map(round_hundredths)
            }
            (ColorSpace::Hsl, ColorSpace::Hsb) => {
                let (s, v) = hsl_to_hsb(b / 100.0, c / 100.0);
                [a, s * 100.0, v * 100.0].map(round_hundredths)
            }
            _ => self.values,
        };
        Self::new(space, values, self.alpha)
    }

    /// Convert to an sRGB [`peniko::Color`] for drawing.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "peniko stores components as f32"
    )]
    pub fn to_srgb(&self) -> peniko::Color {
        let [r, g, b] = self.to_space(ColorSpace::Rgb).values;
        peniko::Color::new([
            (r / 255.0) as f32,
            (g / 255.0) as f32,
            (b / 255.0) as f32,
            self.alpha as f32,
        ])
    }

    /// Create an RGB color from an sRGB [`peniko::Color`].
    pub fn from_srgb(color: peniko::Color) -> Self {
        let [r, g, b, a] = color.components;
        Self::rgba(
            (f64::from(r) * 255.0).round(),
            (f64::from(g) * 255.0).round(),
            (f64::from(b) * 255.0).round(),
            round_hundredths(f64::from(a)),
        )
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "channel values are clamped to 0..=255 before the cast"
    )]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_space(ColorSpace::Rgb).values;
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        if self.alpha < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(r),
                byte(g),
                byte(b),
                byte(self.alpha * 255.0)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        Self::from_srgb(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values;
        let opaque = self.alpha >= 1.0;
        match self.space {
            ColorSpace::Rgb if opaque => write!(f, "rgb({a}, {b}, {c})"),
            ColorSpace::Rgb => write!(f, "rgba({a}, {b}, {c}, {})", self.alpha),
            space if opaque => write!(f, "{space}({a}, {b}%, {c}%)"),
            space => write!(f, "{space}a({a}, {b}%, {c}%, {})", self.alpha),
        }
    }
}

fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Hue in degrees from normalized RGB, with `max`/`delta` precomputed.
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue(r, g, b, max, delta), s, max)
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    (hue(r, g, b, max, delta), s, l)
}

fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let f = |n: f64| {
        let k = (n + h / 60.0) % 6.0;
        v - s * v * k.min(4.0 - k).clamp(0.0, 1.0)
    };
    (f(5.0), f(3.0), f(1.0))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    (f(0.0), f(8.0), f(4.0))
}

fn hsb_to_hsl(s: f64, v: f64) -> (f64, f64) {
    let l = v * (1.0 - s / 2.0);
    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (s, l)
}

fn hsl_to_hsb(s: f64, l: f64) -> (f64, f64) {
    let v = l + s * l.min(1.0 - l);
    let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn constructors_clamp_channels() {
        let c = Color::rgba(300.0, -4.0, 12.0, 2.0);
        assert_eq!(c.channel_value(ColorChannel::Red), 255.0);
        assert_eq!(c.channel_value(ColorChannel::Green), 0.0);
        assert_eq!(c.channel_value(ColorChannel::Blue), 12.0);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn primary_hues() {
        let red = Color::rgb(255.0, 0.0, 0.0).to_space(ColorSpace::Hsb);
        assert_eq!(red.values, [0.0, 100.0, 100.0]);
        let green = Color::rgb(0.0, 255.0, 0.0).to_space(ColorSpace::Hsl);
        assert_eq!(green.values, [120.0, 100.0, 50.0]);
        let blue = Color::hsb(240.0, 100.0, 100.0).to_space(ColorSpace::Rgb);
        assert_eq!(blue.values, [0.0, 0.0, 255.0]);
    }

    #[test]
    fn hsb_and_hsl_agree_through_rgb() {
        let hsb = Color::hsb(200.0, 40.0, 70.0);
        let direct = hsb.to_space(ColorSpace::Hsl);
        let via_rgb = hsb.to_space(ColorSpace::Rgb).to_space(ColorSpace::Hsl);
        for (a, b) in direct.values.iter().zip(via_rgb.values) {
            assert!((a - b).abs() < 1.0, "{direct:?} vs {via_rgb:?}");
        }
        let back = direct.to_space(ColorSpace::Hsb);
        assert!(approx(back.values[1], 40.0));
        assert!(approx(back.values[2], 70.0));
    }

    #[test]
    fn black_and_white_have_no_saturation() {
        assert_eq!(hsb_to_hsl(0.0, 0.0), (0.0, 0.0));
        assert_eq!(hsb_to_hsl(0.0, 1.0), (0.0, 1.0));
        assert_eq!(hsl_to_hsb(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn with_channel_value_replaces_one_channel() {
        let c = Color::rgb(10.0, 20.0, 30.0);
        let d = c.with_channel_value(ColorChannel::Green, 99.0);
        assert_eq!(d.values, [10.0, 99.0, 30.0]);
        assert_eq!(d.space(), ColorSpace::Rgb);
        assert_eq!(c.values, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn with_foreign_channel_converts() {
        let c = Color::rgb(255.0, 0.0, 0.0);
        let d = c.with_channel_value(ColorChannel::Brightness, 50.0);
        assert_eq!(d.space(), ColorSpace::Hsb);
        assert_eq!(d.channel_value(ColorChannel::Brightness), 50.0);
        assert_eq!(d.channel_value(ColorChannel::Red), 128.0);
    }

    #[test]
    fn alpha_is_native_everywhere() {
        let c = Color::hsl(10.0, 20.0, 30.0).with_alpha(0.25);
        assert_eq!(c.space(), ColorSpace::Hsl);
        assert_eq!(c.channel_value(ColorChannel::Alpha), 0.25);
        assert_eq!(c.with_alpha(7.0).alpha(), 1.0);
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color::rgb(255.0, 128.0, 0.0).to_hex(), "#ff8000");
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.5).to_hex(), "#00000080");
    }

    #[test]
    fn display_per_space() {
        assert_eq!(Color::rgb(1.0, 2.0, 3.0).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Color::hsb(1.0, 2.0, 3.0).to_string(), "hsb(1, 2%, 3%)");
        assert_eq!(
            Color::hsla(1.0, 2.0, 3.0, 0.5).to_string(),
            "hsla(1, 2%, 3%, 0.5)"
        );
    }

    #[test]
    fn srgb_interop() {
        let c = Color::rgb(255.0, 0.0, 51.0);
        let srgb = c.to_srgb();
        assert_eq!(Color::from(srgb), c);
    }
}
