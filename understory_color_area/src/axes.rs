// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving which channels a color area controls.

use understory_color::{ColorChannel, ColorSpace, Slot};

/// The channels of a color area: `x` and `y` follow the pointer, `z` is fixed.
///
/// The three channels are always distinct and together make up the color
/// space's triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorAxes {
    /// Channel on the horizontal axis.
    pub x: ColorChannel,
    /// Channel on the vertical axis.
    pub y: ColorChannel,
    /// The remaining channel.
    pub z: ColorChannel,
}

/// `{x: blue, y: green, z: red}` in RGB terms.
const DEFAULT_SLOTS: (Slot, Slot, Slot) = (Slot::Third, Slot::Second, Slot::First);

impl ColorAxes {
    /// Resolve the axes for `space` from optional explicit channels.
    ///
    /// With only `y` given, `x` becomes blue (or red when `y` is blue); with
    /// only `x` given, `y` becomes green for red and red for blue. Any other
    /// combination falls back to `{x: blue, y: green}`. Slots stand in for RGB
    /// channels in HSB/HSL. Channels that are not part of `space`, and a `y`
    /// equal to `x`, count as absent.
    ///
    /// ```
    /// use understory_color::{ColorChannel, ColorSpace};
    /// use understory_color_area::ColorAxes;
    ///
    /// let axes = ColorAxes::resolve(ColorSpace::Rgb, None, Some(ColorChannel::Red));
    /// assert_eq!(axes.x, ColorChannel::Blue);
    /// assert_eq!(axes.z, ColorChannel::Green);
    /// ```
    pub fn resolve(space: ColorSpace, x: Option<ColorChannel>, y: Option<ColorChannel>) -> Self {
        let x = x.and_then(|channel| space.slot_of(channel));
        let y = y
            .and_then(|channel| space.slot_of(channel))
            .filter(|slot| Some(*slot) != x);

        let (x, y) = match (x, y) {
            (None, Some(y)) => match y {
                Slot::First | Slot::Second => (Slot::Third, y),
                Slot::Third => (Slot::First, y),
            },
            (Some(x), None) => match x {
                Slot::First => (x, Slot::Second),
                Slot::Third => (x, Slot::First),
                Slot::Second => (DEFAULT_SLOTS.0, DEFAULT_SLOTS.1),
            },
            (Some(x), Some(y)) => (x, y),
            (None, None) => (DEFAULT_SLOTS.0, DEFAULT_SLOTS.1),
        };
        let (x, y, z) = match Slot::remaining(x, y) {
            Some(z) => (x, y, z),
            None => DEFAULT_SLOTS,
        };

        Self {
            x: space.channel(x),
            y: space.channel(y),
            z: space.channel(z),
        }
    }
}

/// The space a color area works in.
///
/// An explicit `color_space` wins; otherwise the space of the explicit `x`,
/// then `y` channel; otherwise the value's own space.
pub(crate) fn area_space(
    color_space: Option<ColorSpace>,
    value_space: ColorSpace,
    x: Option<ColorChannel>,
    y: Option<ColorChannel>,
) -> ColorSpace {
    let of = |channel: Option<ColorChannel>| {
        channel
            .and_then(|c| c.locate(value_space))
            .map(|(space, _)| space)
    };
    color_space
        .or_else(|| of(x))
        .or_else(|| of(y))
        .unwrap_or(value_space)
}
