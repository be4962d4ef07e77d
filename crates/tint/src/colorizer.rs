// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composition and writing of colorized text.

use crate::escape;
use crate::mix::Mix;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the writing helpers.
///
/// Composition itself is a pure string transformation and cannot fail; the
/// only failure mode is the destination rejecting the write, passed through
/// unchanged with no retry.
#[derive(Debug, Error)]
pub enum Error {
    /// The output destination rejected the write.
    #[error("failed to write colorized output")]
    Write(#[from] io::Error),
}

/// Result alias for the writing helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// Join options for multi-part painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join<'a> {
    /// Inserted between consecutive parts.
    pub separator: &'a str,
    /// Append a line terminator inside the escape envelope, before the
    /// trailing reset.
    pub newline: bool,
}

impl Default for Join<'_> {
    /// Space-separated, no terminator.
    fn default() -> Self {
        Self {
            separator: " ",
            newline: false,
        }
    }
}

impl Join<'_> {
    /// Space-separated, newline-terminated.
    pub fn line() -> Self {
        Self {
            newline: true,
            ..Self::default()
        }
    }
}

/// Colorizing codec with explicit configuration.
///
/// Holds the two pieces of configuration every formatting call reads: the
/// disable flag and the default output destination. The default-constructed
/// instance is enabled and writes to stdout. `Clone` shares the destination
/// and copies the flag.
pub struct Colorizer {
    disabled: bool,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Colorizer {
    /// Enabled colorizer writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Enabled colorizer writing to `writer`.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            disabled: false,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Colorizer writing to stdout, disabled when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let mut colorizer = Self::new();
        colorizer.set_disabled(crate::env::no_color());
        colorizer
    }

    /// Disable or re-enable colorization.
    ///
    /// While disabled, [`paint`](Self::paint) returns content unchanged: no
    /// escape sequences are added and none already present are stripped.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Wrap `content` in the escape sequence for `style`.
    ///
    /// The fresh prefix is re-inserted after every reset embedded in
    /// `content`, so a reset from nested painting cannot turn the outer
    /// color off for the remainder of the text. The trailing reset is
    /// always appended, even for an empty combination.
    pub fn paint(&self, style: impl Into<Mix>, content: &str) -> String {
        self.surround(&style.into(), content)
    }

    /// Join pre-stringified `parts` per `join`, then paint the result.
    ///
    /// The terminator, when requested, lands inside the escape envelope,
    /// before the trailing reset.
    pub fn paint_parts(&self, style: impl Into<Mix>, parts: &[&str], join: Join<'_>) -> String {
        let mut content = parts.join(join.separator);
        if join.newline {
            content.push('\n');
        }
        self.surround(&style.into(), &content)
    }

    /// Paint `content` and write it to the default destination.
    pub fn print(&self, style: impl Into<Mix>, content: &str) -> Result<()> {
        let painted = self.paint(style, content);
        self.write_default(painted.as_bytes())
    }

    /// Paint `content` plus a newline and write it to the default
    /// destination.
    pub fn println(&self, style: impl Into<Mix>, content: &str) -> Result<()> {
        self.print_parts(style, &[content], Join::line())
    }

    /// Paint joined `parts` and write them to the default destination.
    pub fn print_parts(&self, style: impl Into<Mix>, parts: &[&str], join: Join<'_>) -> Result<()> {
        let painted = self.paint_parts(style, parts, join);
        self.write_default(painted.as_bytes())
    }

    /// Paint `content` and write it to `writer`.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        style: impl Into<Mix>,
        content: &str,
    ) -> Result<()> {
        let painted = self.paint(style, content);
        write_bytes(writer, painted.as_bytes())
    }

    /// Paint `content` plus a newline and write it to `writer`.
    pub fn writeln_to(
        &self,
        writer: &mut dyn Write,
        style: impl Into<Mix>,
        content: &str,
    ) -> Result<()> {
        self.write_parts_to(writer, style, &[content], Join::line())
    }

    /// Paint joined `parts` and write them to `writer`.
    pub fn write_parts_to(
        &self,
        writer: &mut dyn Write,
        style: impl Into<Mix>,
        parts: &[&str],
        join: Join<'_>,
    ) -> Result<()> {
        let painted = self.paint_parts(style, parts, join);
        write_bytes(writer, painted.as_bytes())
    }

    fn write_default(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        write_bytes(&mut **writer, bytes)
    }

    fn surround(&self, style: &Mix, content: &str) -> String {
        if self.disabled {
            return content.to_string();
        }

        let prefix = style.escape();
        // Re-arm the color after any reset embedded by nested painting;
        // the inner reset would otherwise turn color off for the rest of
        // the content.
        let content = content.replace(escape::RESET, &format!("{}{}", escape::RESET, prefix));
        format!("{}{}{}", prefix, content, escape::RESET)
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Colorizer {
    fn clone(&self) -> Self {
        Self {
            disabled: self.disabled,
            writer: Arc::clone(&self.writer),
        }
    }
}

fn write_bytes(writer: &mut dyn Write, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "colorizer_tests.rs"]
mod tests;
