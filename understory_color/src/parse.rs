// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing color strings.
//!
//! `hsb(h, s%, b%)` and `hsba(h, s%, b%, a)` are handled here since CSS has no
//! HSB syntax. Everything else goes through [`peniko::color::parse_color`]:
//! HSL input stays HSL, any other CSS color space is converted to RGB.

use peniko::color::{ColorSpaceTag, Hsl, Srgb, parse_color};

use crate::Color;
use crate::error::ColorError;

/// Parse a color string.
///
/// ```
/// use understory_color::{ColorSpace, parse};
///
/// assert_eq!(parse("hsb(120, 50%, 100%)").unwrap().space(), ColorSpace::Hsb);
/// assert_eq!(parse("#336699").unwrap().space(), ColorSpace::Rgb);
/// assert!(parse("hsb(120, 50, 100)").is_err());
/// ```
pub fn parse(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::malformed(input, "empty string"));
    }
    if let Some(color) = parse_hsb(input, trimmed)? {
        return Ok(color);
    }

    let parsed = parse_color(trimmed).map_err(|reason| ColorError::Css {
        input: input.to_owned(),
        reason,
    })?;
    if parsed.cs == ColorSpaceTag::Hsl {
        let [h, s, l, a] = parsed.to_alpha_color::<Hsl>().components;
        return Ok(Color::hsla(
            normalize_hue(f64::from(h)),
            f64::from(s),
            f64::from(l),
            f64::from(a),
        ));
    }
    Ok(Color::from_srgb(parsed.to_alpha_color::<Srgb>()))
}

/// `Ok(None)` when `trimmed` is not an HSB function at all.
fn parse_hsb(input: &str, trimmed: &str) -> Result<Option<Color>, ColorError> {
    let lower = trimmed.to_ascii_lowercase();
    let (body, has_alpha) = if let Some(rest) = lower.strip_prefix("hsba(") {
        (rest, true)
    } else if let Some(rest) = lower.strip_prefix("hsb(") {
        (rest, false)
    } else {
        return Ok(None);
    };
    let body = body
        .strip_suffix(')')
        .ok_or_else(|| ColorError::malformed(input, "missing closing parenthesis"))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorError::malformed(input, "wrong number of components"));
    }

    let hue = number(input, parts[0])?;
    let saturation = percentage(input, parts[1])?;
    let brightness = percentage(input, parts[2])?;
    let alpha = if has_alpha {
        number(input, parts[3])?
    } else {
        1.0
    };
    Ok(Some(Color::hsba(
        normalize_hue(hue),
        saturation,
        brightness,
        alpha,
    )))
}

fn number(input: &str, part: &str) -> Result<f64, ColorError> {
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::malformed(input, "invalid number"))
}

fn percentage(input: &str, part: &str) -> Result<f64, ColorError> {
    let digits = part
        .strip_suffix('%')
        .ok_or_else(|| ColorError::malformed(input, "expected a percentage"))?;
    number(input, digits.trim_end())
}

fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // Keep an explicit 360 instead of wrapping it to 0.
    if h == 0.0 && hue > 0.0 { 360.0 } else { h }
}
