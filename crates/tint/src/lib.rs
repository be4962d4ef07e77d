// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simple terminal colorization using ANSI SGR escape codes.
//!
//! Wraps text in escape sequences so it renders in a chosen foreground
//! and/or background color on an ANSI-compatible terminal, re-arms the
//! surrounding color around resets embedded by nested painting, and strips
//! color sequences back out of a string. Only the standard 16-color SGR set
//! is spoken; stream detection, Windows console shims, and 256-color or
//! truecolor modes are out of scope.
//!
//! ```
//! use tint::{Color, Colorizer};
//!
//! let tint = Colorizer::new();
//! let line = tint.paint([Color::FgRed, Color::BgBlack], "alert");
//! assert_eq!(line, "\x1b[31;40malert\x1b[0m");
//! assert_eq!(tint::clean(&line), "alert");
//! ```

mod color;
mod colorizer;
pub mod env;
mod escape;
mod mix;
mod palette;

pub use color::{Axis, Color};
pub use colorizer::{Colorizer, Error, Join, Result};
pub use escape::{clean, RESET};
pub use mix::{Mix, Resolved};
pub use palette::{Palette, BACKGROUND, FOREGROUND};
