// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping values onto a stepped range.

/// Snap `value` to the nearest multiple of `step` above `min`, within `[min, max]`.
///
/// Halfway values move away from `min`. Values above `max` land on the largest
/// multiple that still fits, which is `max` itself whenever the range is a
/// whole number of steps. The result is rounded to the decimal precision of
/// `step` so that e.g. `0.1 + 0.2` snaps to `0.3` exactly.
///
/// A non-positive or non-finite `step` only clamps.
///
/// ```
/// use understory_color_area::snap_value_to_step;
///
/// assert_eq!(snap_value_to_step(12.4, 0.0, 255.0, 1.0), 12.0);
/// assert_eq!(snap_value_to_step(12.5, 0.0, 255.0, 1.0), 13.0);
/// assert_eq!(snap_value_to_step(0.30000000000000004, 0.0, 1.0, 0.01), 0.3);
/// assert_eq!(snap_value_to_step(300.0, 0.0, 255.0, 10.0), 250.0);
/// ```
pub fn snap_value_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) || !value.is_finite() {
        return clamp(value, min, max);
    }

    // Whole steps from `min`; exact for integral steps.
    let steps = ((value - min) / step).round();
    let mut snapped = min + steps * step;

    if snapped < min {
        snapped = min;
    } else if snapped > max {
        snapped = min + ((max - min) / step).floor() * step;
    }

    let precision = step_precision(step);
    if precision > 0 {
        let pow = 10_f64.powi(precision);
        snapped = (snapped * pow).round() / pow;
    }
    snapped
}

/// Clamp without panicking on inverted or NaN bounds.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Number of decimal places in `step`, capped at 10.
fn step_precision(step: f64) -> i32 {
    let mut scaled = step;
    let mut precision = 0;
    while precision < 10 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        precision += 1;
    }
    precision
}
