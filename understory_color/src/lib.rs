// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_color --heading-base-level=0

//! Understory Color: channel-addressable color values for interactive controls.
//!
//! Color pickers, sliders and 2D color areas all manipulate a color one channel
//! at a time. This crate provides the value type they share:
//!
//! - [`Color`]: an immutable color in one of three [`ColorSpace`]s (RGB, HSB,
//!   HSL) plus alpha.
//! - [`ColorChannel`]: the named channels, each with a fixed [`ChannelRange`]
//!   (`min_value`, `max_value`, `step`, `page_size`).
//! - [`Slot`]: the position of a channel inside its space's three-channel
//!   triple. Every space has exactly three slots, so "the remaining channel" of
//!   two distinct channels is always exactly one slot.
//!
//! ## Channel access
//!
//! [`Color::channel_value`] and [`Color::with_channel_value`] are total: a
//! channel that is not native to the color's space is read from (or written
//! into) a converted copy. Written values are clamped into the channel range.
//!
//! ```rust
//! use understory_color::{Color, ColorChannel, ColorSpace};
//!
//! let red = Color::rgb(255.0, 0.0, 0.0);
//! assert_eq!(red.channel_value(ColorChannel::Hue), 0.0);
//!
//! let dim = red.with_channel_value(ColorChannel::Brightness, 40.0);
//! assert_eq!(dim.space(), ColorSpace::Hsb);
//! assert_eq!(dim.channel_value(ColorChannel::Red), 102.0);
//!
//! // Out-of-range writes are clamped.
//! let clamped = red.with_channel_value(ColorChannel::Green, 999.0);
//! assert_eq!(clamped.channel_value(ColorChannel::Green), 255.0);
//! ```
//!
//! ## Parsing
//!
//! [`parse`] (also available as [`Color::parse`] and through [`FromStr`](core::str::FromStr))
//! accepts CSS colors via `peniko::color` and `hsb()`/`hsba()` functions.
//! Failures are reported as [`ColorError`] and carry the rejected input.
//!
//! ## Drawing
//!
//! [`Color::to_srgb`] produces a [`peniko::Color`] for the imaging crates.

mod channel;
mod color;
mod error;
mod parse;

pub use channel::{ChannelRange, ColorChannel, ColorSpace, Slot};
pub use color::Color;
pub use error::ColorError;
pub use parse::parse;
