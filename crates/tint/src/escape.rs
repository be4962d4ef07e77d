// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR escape sequence construction and removal.

use regex::Regex;
use std::sync::LazyLock;

/// Reset all display attributes. Exactly `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

/// Regex for matching SGR color escape sequences: ESC `[`, one or two
/// decimal parameters separated by `;`, terminated by `m`. Longer parameter
/// lists (256-color, truecolor) and digit-less look-alikes do not match.
///
/// This is a compile-time constant regex pattern that is guaranteed to be
/// valid, so the expect is safe.
static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[\d+(?:;\d+)?m").expect("SGR regex pattern is invalid")
});

/// Single-parameter SGR sequence: `ESC[<code>m`.
pub(crate) fn sgr(code: u8) -> String {
    format!("\x1b[{}m", code)
}

/// Dual-parameter SGR sequence: `ESC[<first>;<second>m`.
pub(crate) fn sgr2(first: u8, second: u8) -> String {
    format!("\x1b[{};{}m", first, second)
}

/// Remove every SGR color sequence from `s`, returning the plain text.
///
/// Total over all inputs and idempotent. Only substrings matching the exact
/// one- or two-parameter form are removed; malformed look-alikes stay
/// untouched.
pub fn clean(s: &str) -> String {
    SGR_REGEX.replace_all(s, "").to_string()
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
