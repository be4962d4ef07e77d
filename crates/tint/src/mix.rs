// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered color combinations and their resolution to escape sequences.

use crate::color::{Axis, Color};
use crate::escape;

/// An ordered combination of color codes.
///
/// At most one code per axis is effective: during resolution, later entries
/// overwrite earlier ones on the same axis, and any [`Color::Reset`]
/// collapses the whole combination to a bare reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mix(Vec<Color>);

impl Mix {
    /// Empty combination. Paints no prefix at all.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a code. Later same-axis codes win during resolution.
    pub fn push(&mut self, color: Color) {
        self.0.push(color);
    }

    /// The codes in insertion order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve to the effective per-axis selection.
    pub fn resolve(&self) -> Resolved {
        let mut foreground = None;
        let mut background = None;

        for &color in &self.0 {
            match color.axis() {
                None => return Resolved::Reset,
                Some(Axis::Foreground) => foreground = Some(color),
                Some(Axis::Background) => background = Some(color),
            }
        }

        Resolved::Selection {
            foreground,
            background,
        }
    }

    /// The escape sequence prefix for this combination.
    ///
    /// Empty string when nothing is selected.
    pub fn escape(&self) -> String {
        self.resolve().escape()
    }
}

/// Effective color selection after axis resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// A reset code was present; everything else is discarded.
    Reset,
    /// Per-axis winners. Both may be absent for an empty combination.
    Selection {
        foreground: Option<Color>,
        background: Option<Color>,
    },
}

impl Resolved {
    /// The escape sequence for this selection. The foreground parameter
    /// always comes first in the dual-parameter form, regardless of the
    /// combination's insertion order.
    pub fn escape(&self) -> String {
        match *self {
            Resolved::Reset => escape::RESET.to_string(),
            Resolved::Selection {
                foreground: Some(fg),
                background: Some(bg),
            } => escape::sgr2(fg.code(), bg.code()),
            Resolved::Selection {
                foreground: Some(color),
                background: None,
            }
            | Resolved::Selection {
                foreground: None,
                background: Some(color),
            } => escape::sgr(color.code()),
            Resolved::Selection {
                foreground: None,
                background: None,
            } => String::new(),
        }
    }
}

impl From<Color> for Mix {
    fn from(color: Color) -> Self {
        Self(vec![color])
    }
}

impl<const N: usize> From<[Color; N]> for Mix {
    fn from(colors: [Color; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl From<&[Color]> for Mix {
    fn from(colors: &[Color]) -> Self {
        Self(colors.to_vec())
    }
}

impl From<&Mix> for Mix {
    fn from(mix: &Mix) -> Self {
        mix.clone()
    }
}

impl FromIterator<Color> for Mix {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "mix_tests.rs"]
mod tests;
