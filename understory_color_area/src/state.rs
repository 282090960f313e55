// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The color area state machine.

use core::fmt;

use kurbo::{Point, Rect};
use understory_color::{ChannelRange, Color, ColorChannel, ColorError, ColorSpace};

use crate::axes::{ColorAxes, area_space};
use crate::controlled::{ControlledValue, OnChange};
use crate::snap::{clamp, snap_value_to_step};

/// Construction options for [`ColorAreaState`].
///
/// All fields are optional; the defaults produce an uncontrolled white RGB
/// area with blue on `x` and green on `y`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorAreaOptions {
    /// Host-owned value. When set the area is controlled.
    pub value: Option<Color>,
    /// Initial value of an uncontrolled area.
    pub default_value: Option<Color>,
    /// Space the area works in. Inferred from the channels or value when unset.
    pub color_space: Option<ColorSpace>,
    /// Channel on the horizontal axis.
    pub x_channel: Option<ColorChannel>,
    /// Channel on the vertical axis.
    pub y_channel: Option<ColorChannel>,
    /// Step for the `x` channel. Defaults to the channel's own step.
    pub x_channel_step: Option<f64>,
    /// Step for the `y` channel. Defaults to the channel's own step.
    pub y_channel_step: Option<f64>,
}

impl ColorAreaOptions {
    /// Make the area controlled by `value`.
    pub fn with_value(mut self, value: Color) -> Self {
        self.value = Some(value);
        self
    }

    /// Start an uncontrolled area at `value`.
    pub fn with_default_value(mut self, value: Color) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Work in `space`.
    pub fn with_color_space(mut self, space: ColorSpace) -> Self {
        self.color_space = Some(space);
        self
    }

    /// Choose the axis channels. Either may be `None`.
    pub fn with_channels(mut self, x: Option<ColorChannel>, y: Option<ColorChannel>) -> Self {
        self.x_channel = x;
        self.y_channel = y;
        self
    }

    /// Override the axis steps. Either may be `None`.
    pub fn with_steps(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.x_channel_step = x;
        self.y_channel_step = y;
        self
    }
}

/// Which pointer axis an operation applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// State of a two-dimensional color area.
///
/// Owns the current [`Color`] and maps between it and a normalized thumb
/// position in the unit square, where `x` grows to the right and `y` grows
/// downward (so `y = 0` is the maximum of the `y` channel).
///
/// Every committed change goes through the controlled-value collaborator, and
/// is also recorded as the last committed value; [`set_dragging`](Self::set_dragging)
/// reports that value when a drag ends.
pub struct ColorAreaState {
    value: ControlledValue<Color>,
    last_committed: Color,
    space: ColorSpace,
    axes: ColorAxes,
    x_range: ChannelRange,
    y_range: ChannelRange,
    x_step: f64,
    y_step: f64,
    dragging: bool,
    on_change_end: Option<OnChange<Color>>,
}

impl fmt::Debug for ColorAreaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorAreaState")
            .field("value", &self.value)
            .field("last_committed", &self.last_committed)
            .field("space", &self.space)
            .field("axes", &self.axes)
            .field("x_step", &self.x_step)
            .field("y_step", &self.y_step)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl Default for ColorAreaState {
    fn default() -> Self {
        Self::new(ColorAreaOptions::default())
    }
}

impl ColorAreaState {
    /// Create the state and resolve its axes.
    pub fn new(options: ColorAreaOptions) -> Self {
        let initial = options
            .value
            .or(options.default_value)
            .unwrap_or(Color::WHITE);
        let space = area_space(
            options.color_space,
            initial.space(),
            options.x_channel,
            options.y_channel,
        );
        let axes = ColorAxes::resolve(space, options.x_channel, options.y_channel);
        let x_range = axes.x.range();
        let y_range = axes.y.range();

        let value = initial.to_space(space);
        let controlled = options.value.map(|_| value);

        log::trace!("color area in {space} with axes {axes:?}");
        Self {
            value: ControlledValue::new(controlled, value),
            last_committed: value,
            space,
            axes,
            x_range,
            y_range,
            x_step: options.x_channel_step.unwrap_or(x_range.step),
            y_step: options.y_channel_step.unwrap_or(y_range.step),
            dragging: false,
            on_change_end: None,
        }
    }

    /// Call `on_change` whenever a new value is committed.
    pub fn with_on_change(mut self, on_change: impl FnMut(&Color) + 'static) -> Self {
        self.value.set_on_change(Some(Box::new(on_change)));
        self
    }

    /// Call `on_change_end` with the final value when a drag ends.
    pub fn with_on_change_end(mut self, on_change_end: impl FnMut(&Color) + 'static) -> Self {
        self.on_change_end = Some(Box::new(on_change_end));
        self
    }

    /// The current value.
    pub fn value(&self) -> &Color {
        self.value.get()
    }

    /// Whether the host owns the value.
    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Commit a new value, converted into the area's color space.
    pub fn set_value(&mut self, value: Color) {
        self.commit(value.to_space(self.space));
    }

    /// Parse and commit a color string.
    ///
    /// Parse failures are returned unchanged and leave the state untouched.
    pub fn set_value_str(&mut self, value: &str) -> Result<(), ColorError> {
        let color = Color::parse(value)?;
        self.set_value(color);
        Ok(())
    }

    /// Accept a new controlled value from the host.
    ///
    /// Does not notify `on_change`.
    pub fn sync_value(&mut self, value: Color) {
        let value = value.to_space(self.space);
        self.value.sync(value);
        self.last_committed = value;
    }

    /// The color space the area works in.
    pub fn color_space(&self) -> ColorSpace {
        self.space
    }

    /// The resolved axis channels.
    pub fn axes(&self) -> ColorAxes {
        self.axes
    }

    /// Channel on the horizontal axis.
    pub fn x_channel(&self) -> ColorChannel {
        self.axes.x
    }

    /// Channel on the vertical axis.
    pub fn y_channel(&self) -> ColorChannel {
        self.axes.y
    }

    /// The channel not controlled by the pointer.
    pub fn z_channel(&self) -> ColorChannel {
        self.axes.z
    }

    /// Step of the horizontal channel.
    pub fn x_channel_step(&self) -> f64 {
        self.x_step
    }

    /// Step of the vertical channel.
    pub fn y_channel_step(&self) -> f64 {
        self.y_step
    }

    /// Range of the horizontal channel.
    pub fn x_range(&self) -> ChannelRange {
        self.x_range
    }

    /// Range of the vertical channel.
    pub fn y_range(&self) -> ChannelRange {
        self.y_range
    }

    /// Current value of the horizontal channel.
    pub fn x_value(&self) -> f64 {
        self.value().channel_value(self.axes.x)
    }

    /// Current value of the vertical channel.
    pub fn y_value(&self) -> f64 {
        self.value().channel_value(self.axes.y)
    }

    /// Set the horizontal channel. No-op if unchanged or not finite.
    pub fn set_x_value(&mut self, value: f64) {
        self.set_axis_value(Axis::X, value);
    }

    /// Set the vertical channel. No-op if unchanged or not finite.
    pub fn set_y_value(&mut self, value: f64) {
        self.set_axis_value(Axis::Y, value);
    }

    /// Update both channels from a normalized position.
    ///
    /// Coordinates are clamped into `[0, 1]`, mapped onto the channel ranges
    /// (`y` inverted) and snapped to the axis steps. Channels whose value would
    /// not change are left alone; returns `false` when nothing changed. A
    /// non-finite coordinate leaves its axis alone.
    pub fn set_color_from_point(&mut self, point: Point) -> bool {
        let current = *self.value();
        let mut next: Option<Color> = None;

        if point.x.is_finite() {
            let x = self.x_range.min_value + clamp(point.x, 0.0, 1.0) * self.x_range.span();
            let x = snap_value_to_step(
                x,
                self.x_range.min_value,
                self.x_range.max_value,
                self.x_step,
            );
            if x != current.channel_value(self.axes.x) {
                next = Some(current.with_channel_value(self.axes.x, x));
            }
        }
        if point.y.is_finite() {
            let y =
                self.y_range.min_value + (1.0 - clamp(point.y, 0.0, 1.0)) * self.y_range.span();
            let y = snap_value_to_step(
                y,
                self.y_range.min_value,
                self.y_range.max_value,
                self.y_step,
            );
            if y != current.channel_value(self.axes.y) {
                next = Some(next.unwrap_or(current).with_channel_value(self.axes.y, y));
            }
        }

        match next {
            Some(color) => {
                log::trace!("color area point ({}, {}) -> {color}", point.x, point.y);
                self.commit(color);
                true
            }
            None => false,
        }
    }

    /// The normalized position of the current value, `y` inverted.
    pub fn thumb_position(&self) -> Point {
        let x = (self.x_value() - self.x_range.min_value) / self.x_range.span();
        let y = 1.0 - (self.y_value() - self.y_range.min_value) / self.y_range.span();
        Point::new(x, y)
    }

    /// Step the horizontal channel up by `max(min_step, x_channel_step)`.
    pub fn increment_x(&mut self, min_step: f64) {
        self.step_axis(Axis::X, min_step, true);
    }

    /// Step the horizontal channel down by `max(min_step, x_channel_step)`.
    pub fn decrement_x(&mut self, min_step: f64) {
        self.step_axis(Axis::X, min_step, false);
    }

    /// Step the vertical channel up by `max(min_step, y_channel_step)`.
    pub fn increment_y(&mut self, min_step: f64) {
        self.step_axis(Axis::Y, min_step, true);
    }

    /// Step the vertical channel down by `max(min_step, y_channel_step)`.
    pub fn decrement_y(&mut self, min_step: f64) {
        self.step_axis(Axis::Y, min_step, false);
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record the start or end of a drag.
    ///
    /// Ending a drag that was in progress calls `on_change_end` exactly once
    /// with the last committed value. All other transitions are silent.
    pub fn set_dragging(&mut self, dragging: bool) {
        let was_dragging = self.dragging;
        self.dragging = dragging;
        if was_dragging && !dragging {
            log::debug!("color area drag ended at {}", self.last_committed);
            if let Some(on_change_end) = self.on_change_end.as_mut() {
                on_change_end(&self.last_committed);
            }
        }
    }

    /// The current value, fully opaque, for drawing the thumb swatch.
    pub fn display_color(&self) -> Color {
        self.value().with_alpha(1.0)
    }

    fn channel_of(&self, axis: Axis) -> (ColorChannel, ChannelRange, f64) {
        match axis {
            Axis::X => (self.axes.x, self.x_range, self.x_step),
            Axis::Y => (self.axes.y, self.y_range, self.y_step),
        }
    }

    fn set_axis_value(&mut self, axis: Axis, value: f64) {
        if !value.is_finite() {
            return;
        }
        let (channel, _, _) = self.channel_of(axis);
        let current = *self.value();
        if value == current.channel_value(channel) {
            return;
        }
        self.commit(current.with_channel_value(channel, value));
    }

    fn step_axis(&mut self, axis: Axis, min_step: f64, up: bool) {
        let (channel, range, axis_step) = self.channel_of(axis);
        let step = min_step.max(axis_step);
        let current = self.value().channel_value(channel);
        let next = if up {
            if current >= range.max_value {
                return;
            }
            if current + step > range.max_value {
                range.max_value
            } else {
                snap_value_to_step(current + step, range.min_value, range.max_value, axis_step)
            }
        } else {
            if current <= range.min_value {
                return;
            }
            if current - step < range.min_value {
                range.min_value
            } else {
                snap_value_to_step(current - step, range.min_value, range.max_value, axis_step)
            }
        };
        self.set_axis_value(axis, next);
    }

    fn commit(&mut self, color: Color) {
        self.last_committed = color;
        self.value.set(color);
    }
}

/// Map a pointer position inside `bounds` onto the unit square.
///
/// The result is clamped, so positions outside `bounds` pin to the nearest
/// edge. Degenerate bounds map to `0` on that axis.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_color_area::normalized_point;
///
/// let bounds = Rect::new(10.0, 10.0, 110.0, 60.0);
/// assert_eq!(normalized_point(bounds, Point::new(60.0, 35.0)), Point::new(0.5, 0.5));
/// assert_eq!(normalized_point(bounds, Point::new(500.0, 0.0)), Point::new(1.0, 0.0));
/// ```
pub fn normalized_point(bounds: Rect, position: Point) -> Point {
    let fraction = |offset: f64, extent: f64| {
        if extent > 0.0 {
            clamp(offset / extent, 0.0, 1.0)
        } else {
            0.0
        }
    };
    Point::new(
        fraction(position.x - bounds.x0, bounds.width()),
        fraction(position.y - bounds.y0, bounds.height()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rgb_area(value: Color) -> ColorAreaState {
        ColorAreaState::new(ColorAreaOptions::default().with_default_value(value))
    }

    #[test]
    fn defaults() {
        let area = ColorAreaState::default();
        assert_eq!(*area.value(), Color::WHITE);
        assert_eq!(area.x_channel(), ColorChannel::Blue);
        assert_eq!(area.y_channel(), ColorChannel::Green);
        assert_eq!(area.z_channel(), ColorChannel::Red);
        assert_eq!(area.x_channel_step(), 1.0);
        assert!(!area.is_controlled());
        assert!(!area.is_dragging());
    }

    #[test]
    fn point_maps_onto_ranges_with_y_inverted() {
        let mut area = rgb_area(Color::rgb(0.0, 0.0, 0.0));
        assert!(area.set_color_from_point(Point::new(1.0, 0.0)));
        assert_eq!(area.x_value(), 255.0);
        assert_eq!(area.y_value(), 255.0);

        assert!(area.set_color_from_point(Point::new(0.5, 0.5)));
        // 127.5 snaps away from the minimum.
        assert_eq!(area.x_value(), 128.0);
        assert_eq!(area.y_value(), 128.0);
        assert_eq!(area.value().channel_value(ColorChannel::Red), 0.0);
    }

    #[test]
    fn point_is_clamped() {
        let mut area = rgb_area(Color::rgb(9.0, 9.0, 9.0));
        area.set_color_from_point(Point::new(-3.0, 7.0));
        assert_eq!(area.x_value(), 0.0);
        assert_eq!(area.y_value(), 0.0);
    }

    #[test]
    fn unchanged_point_emits_nothing() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut area = rgb_area(Color::rgb(0.0, 255.0, 0.0))
            .with_on_change(move |_| *counter.borrow_mut() += 1);
        assert!(!area.set_color_from_point(Point::new(0.0, 0.0)));
        // Rounds back onto the current values.
        assert!(!area.set_color_from_point(Point::new(0.001, 0.001)));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn only_the_changed_axis_is_replaced() {
        let mut area = rgb_area(Color::rgb(10.0, 20.0, 30.0));
        let y = area.thumb_position().y;
        area.set_color_from_point(Point::new(1.0, y));
        assert_eq!(*area.value(), Color::rgb(10.0, 20.0, 255.0));
    }

    #[test]
    fn non_finite_axis_is_ignored() {
        let mut area = rgb_area(Color::rgb(10.0, 20.0, 30.0));
        assert!(area.set_color_from_point(Point::new(f64::NAN, 0.0)));
        assert_eq!(area.x_value(), 30.0);
        assert_eq!(area.y_value(), 255.0);
    }

    #[test]
    fn non_finite_axis_values_are_ignored() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut area = rgb_area(Color::rgb(10.0, 20.0, 30.0))
            .with_on_change(move |_| *counter.borrow_mut() += 1);

        area.set_x_value(f64::NAN);
        area.set_x_value(f64::NAN);
        area.set_y_value(f64::INFINITY);
        assert_eq!(*area.value(), Color::rgb(10.0, 20.0, 30.0));
        assert_eq!(*calls.borrow(), 0);

        let p = area.thumb_position();
        assert!(p.x.is_finite() && p.y.is_finite(), "thumb at {p:?}");
    }

    #[test]
    fn thumb_position_inverts_y() {
        let area = rgb_area(Color::rgb(0.0, 51.0, 204.0));
        let p = area.thumb_position();
        assert!((p.x - 0.8).abs() < 1e-12);
        assert!((p.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn custom_steps_snap_points() {
        let mut area = ColorAreaState::new(
            ColorAreaOptions::default()
                .with_default_value(Color::rgb(0.0, 0.0, 0.0))
                .with_steps(Some(5.0), None),
        );
        area.set_color_from_point(Point::new(0.05, 1.0));
        // 12.75 snaps to 15 with a step of 5.
        assert_eq!(area.x_value(), 15.0);
        assert_eq!(area.y_channel_step(), 1.0);
    }

    #[test]
    fn increments_respect_min_step_and_bounds() {
        let mut area = rgb_area(Color::rgb(0.0, 0.0, 250.0));
        area.increment_x(0.0);
        assert_eq!(area.x_value(), 251.0);
        area.increment_x(17.0);
        assert_eq!(area.x_value(), 255.0);
        area.increment_x(0.0);
        assert_eq!(area.x_value(), 255.0);

        area.decrement_y(0.0);
        assert_eq!(area.y_value(), 0.0);
        area.increment_y(17.0);
        assert_eq!(area.y_value(), 17.0);
        area.decrement_y(5.0);
        assert_eq!(area.y_value(), 12.0);
    }

    #[test]
    fn increments_snap_off_grid_values() {
        let mut area = rgb_area(Color::rgb(0.0, 0.0, 0.0));
        area.set_x_value(10.4);
        area.increment_x(0.0);
        assert_eq!(area.x_value(), 11.0);
    }

    #[test]
    fn drag_end_reports_last_committed_value_once() {
        let ends = Rc::new(RefCell::new(Vec::new()));
        let sink = ends.clone();
        let mut area = rgb_area(Color::rgb(0.0, 0.0, 0.0))
            .with_on_change_end(move |c: &Color| sink.borrow_mut().push(*c));

        area.set_dragging(false);
        assert!(ends.borrow().is_empty());

        area.set_dragging(true);
        area.set_dragging(true);
        area.set_color_from_point(Point::new(1.0, 1.0));
        area.set_color_from_point(Point::new(0.2, 1.0));
        assert!(ends.borrow().is_empty());

        area.set_dragging(false);
        area.set_dragging(false);
        assert_eq!(*ends.borrow(), [Color::rgb(0.0, 0.0, 51.0)]);
    }

    #[test]
    fn display_color_is_opaque() {
        let area = rgb_area(Color::rgba(1.0, 2.0, 3.0, 0.2));
        assert_eq!(area.value().alpha(), 0.2);
        assert_eq!(area.display_color(), Color::rgb(1.0, 2.0, 3.0));
    }

    #[test]
    fn normalized_point_handles_empty_bounds() {
        let p = normalized_point(Rect::new(0.0, 0.0, 0.0, 10.0), Point::new(5.0, 5.0));
        assert_eq!(p, Point::new(0.0, 0.5));
    }
}
