// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color spaces, channel names and channel ranges.
//!
//! Every [`ColorSpace`] has exactly three color channels, addressed by a
//! [`Slot`]. Alpha is shared by all spaces and lives outside the slots.

use core::fmt;

/// The color spaces a [`Color`](crate::Color) can be expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green and blue in `0..=255`.
    #[default]
    Rgb,
    /// Hue, saturation and brightness (also known as HSV).
    Hsb,
    /// Hue, saturation and lightness.
    Hsl,
}

impl ColorSpace {
    /// The three color channels of this space, in slot order.
    pub const fn channels(self) -> [ColorChannel; 3] {
        match self {
            Self::Rgb => [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue],
            Self::Hsb => [
                ColorChannel::Hue,
                ColorChannel::Saturation,
                ColorChannel::Brightness,
            ],
            Self::Hsl => [
                ColorChannel::Hue,
                ColorChannel::Saturation,
                ColorChannel::Lightness,
            ],
        }
    }

    /// The channel stored in `slot`.
    pub const fn channel(self, slot: Slot) -> ColorChannel {
        self.channels()[slot.index()]
    }

    /// The slot of `channel` in this space, if the channel is native to it.
    ///
    /// Alpha is never in a slot.
    pub fn slot_of(self, channel: ColorChannel) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.channel(*slot) == channel)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgb => "rgb",
            Self::Hsb => "hsb",
            Self::Hsl => "hsl",
        })
    }
}

/// Position of a channel within the three-channel triple of a [`ColorSpace`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Red or hue.
    First,
    /// Green or saturation.
    Second,
    /// Blue, brightness or lightness.
    Third,
}

impl Slot {
    /// All slots in order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Index of the slot in `0..3`.
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// The slot that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two equal slots leave two candidates.
    pub const fn remaining(a: Self, b: Self) -> Option<Self> {
        match (a, b) {
            (Self::Second, Self::Third) | (Self::Third, Self::Second) => Some(Self::First),
            (Self::First, Self::Third) | (Self::Third, Self::First) => Some(Self::Second),
            (Self::First, Self::Second) | (Self::Second, Self::First) => Some(Self::Third),
            _ => None,
        }
    }
}

/// A named numeric component of a color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    /// RGB red.
    Red,
    /// RGB green.
    Green,
    /// RGB blue.
    Blue,
    /// HSB/HSL hue, in degrees.
    Hue,
    /// HSB/HSL saturation, in percent.
    Saturation,
    /// HSB brightness, in percent.
    Brightness,
    /// HSL lightness, in percent.
    Lightness,
    /// Opacity in `0..=1`, available in every space.
    Alpha,
}

impl ColorChannel {
    /// The space and slot that hold this channel, preferring `current`.
    ///
    /// Saturation exists in both HSB and HSL; it resolves to `current` when that
    /// is one of them and to HSB otherwise. Returns `None` only for alpha.
    pub const fn locate(self, current: ColorSpace) -> Option<(ColorSpace, Slot)> {
        match self {
            Self::Red => Some((ColorSpace::Rgb, Slot::First)),
            Self::Green => Some((ColorSpace::Rgb, Slot::Second)),
            Self::Blue => Some((ColorSpace::Rgb, Slot::Third)),
            Self::Hue => match current {
                ColorSpace::Hsl => Some((ColorSpace::Hsl, Slot::First)),
                _ => Some((ColorSpace::Hsb, Slot::First)),
            },
            Self::Saturation => match current {
                ColorSpace::Hsl => Some((ColorSpace::Hsl, Slot::Second)),
                _ => Some((ColorSpace::Hsb, Slot::Second)),
            },
            Self::Brightness => Some((ColorSpace::Hsb, Slot::Third)),
            Self::Lightness => Some((ColorSpace::Hsl, Slot::Third)),
            Self::Alpha => None,
        }
    }

    /// The fixed numeric range of this channel.
    pub const fn range(self) -> ChannelRange {
        match self {
            Self::Red | Self::Green | Self::Blue => ChannelRange::new(0.0, 255.0, 1.0, 17.0),
            Self::Hue => ChannelRange::new(0.0, 360.0, 1.0, 15.0),
            Self::Saturation | Self::Brightness | Self::Lightness => {
                ChannelRange::new(0.0, 100.0, 1.0, 10.0)
            }
            Self::Alpha => ChannelRange::new(0.0, 1.0, 0.01, 0.1),
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
            Self::Lightness => "lightness",
            Self::Alpha => "alpha",
        })
    }
}

/// Numeric range of a channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChannelRange {
    /// Smallest allowed value.
    pub min_value: f64,
    /// Largest allowed value.
    pub max_value: f64,
    /// Smallest meaningful increment.
    pub step: f64,
    /// Increment for coarse (page) steps.
    pub page_size: f64,
}

impl ChannelRange {
    /// Create a range.
    pub const fn new(min_value: f64, max_value: f64, step: f64, page_size: f64) -> Self {
        Self {
            min_value,
            max_value,
            step,
            page_size,
        }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Clamp `value` into the range. NaN maps to `min_value`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min_value;
        }
        value.clamp(self.min_value, self.max_value)
    }
}
