// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing errors.

/// Failure to turn a string into a [`Color`](crate::Color).
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    /// An `hsb()`/`hsba()` function with the wrong shape or a bad number.
    #[error("malformed color {input:?}: {reason}")]
    Malformed {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A CSS color string rejected by the CSS color parser.
    #[error("invalid CSS color {input:?}: {reason}")]
    Css {
        /// The rejected input.
        input: String,
        /// The parser's diagnosis.
        reason: peniko::color::ParseError,
    },
}

impl ColorError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        Self::Malformed {
            input: input.to_owned(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input, .. } | Self::Css { input, .. } => input,
        }
    }
}
