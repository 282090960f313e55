// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_color_area --heading-base-level=0

//! Understory Color Area: headless state for two-dimensional color areas.
//!
//! A color area is a square where the pointer position picks two channels of a
//! color at once (for example saturation on `x` and brightness on `y`), while
//! the third channel stays fixed. This crate owns the value and the geometry;
//! rendering, hit testing and accessibility wiring are left to the host.
//!
//! - [`ColorAreaState`]: the value model. Converts normalized positions into
//!   clamped, stepped channel values, steps channels from the keyboard, and
//!   reports the end of a drag.
//! - [`ColorAxes`]: which channels the area controls. Resolution is total: any
//!   combination of requested channels yields three distinct channels.
//! - [`ControlledValue`]: controlled/uncontrolled value ownership with a change
//!   notifier.
//! - [`snap_value_to_step`] and [`normalized_point`]: the numeric helpers the
//!   state is built on.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_color::{Color, ColorChannel};
//! use understory_color_area::{ColorAreaOptions, ColorAreaState, normalized_point};
//!
//! let mut area = ColorAreaState::new(
//!     ColorAreaOptions::default()
//!         .with_default_value(Color::hsb(210.0, 50.0, 50.0))
//!         .with_channels(Some(ColorChannel::Saturation), Some(ColorChannel::Brightness)),
//! );
//! assert_eq!(area.z_channel(), ColorChannel::Hue);
//!
//! // Pointer at the top-right corner of a 200×200 area.
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//! area.set_dragging(true);
//! area.set_color_from_point(normalized_point(bounds, Point::new(200.0, 0.0)));
//! area.set_dragging(false);
//!
//! assert_eq!(area.x_value(), 100.0);
//! assert_eq!(area.y_value(), 100.0);
//! assert_eq!(area.thumb_position(), Point::new(1.0, 0.0));
//! ```
//!
//! ## Drag lifecycle
//!
//! Call [`ColorAreaState::set_dragging`] with `true` when a drag starts and
//! `false` when it ends. The `on_change_end` callback fires once per drag, on
//! the falling edge, with the last committed value, even if the host has not
//! yet pushed that value back into a controlled area.
//!
//! ## Keyboard stepping
//!
//! [`ColorAreaState::increment_x`] and friends move by
//! `max(min_step, channel_step)`. Pass `0.0` for arrow keys and the channel's
//! `page_size` (see [`ColorAreaState::x_range`]) for page keys.

mod axes;
mod controlled;
mod snap;
mod state;

pub use axes::ColorAxes;
pub use controlled::{ControlledValue, OnChange};
pub use snap::snap_value_to_step;
pub use state::{ColorAreaOptions, ColorAreaState, normalized_point};
