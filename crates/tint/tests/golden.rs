// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden color-sheet test.
//!
//! Renders every color family to a string and compares it byte-for-byte
//! against the checked-in fixture. Set `TINT_UPDATE_GOLDEN=1` to regenerate
//! the fixture after an intentional wire-format change.

use std::fs;
use std::path::PathBuf;
use tint::{clean, Color, Colorizer};

const FG: [Color; 8] = [
    Color::FgBlack,
    Color::FgRed,
    Color::FgGreen,
    Color::FgYellow,
    Color::FgBlue,
    Color::FgMagenta,
    Color::FgCyan,
    Color::FgWhite,
];

const BG: [Color; 8] = [
    Color::BgBlack,
    Color::BgRed,
    Color::BgGreen,
    Color::BgYellow,
    Color::BgBlue,
    Color::BgMagenta,
    Color::BgCyan,
    Color::BgWhite,
];

const FG_BRIGHT: [Color; 8] = [
    Color::FgGrey,
    Color::FgBrightRed,
    Color::FgBrightGreen,
    Color::FgBrightYellow,
    Color::FgBrightBlue,
    Color::FgBrightMagenta,
    Color::FgBrightCyan,
    Color::FgBrightWhite,
];

const BG_BRIGHT: [Color; 8] = [
    Color::BgGrey,
    Color::BgBrightRed,
    Color::BgBrightGreen,
    Color::BgBrightYellow,
    Color::BgBrightBlue,
    Color::BgBrightMagenta,
    Color::BgBrightCyan,
    Color::BgBrightWhite,
];

fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/expect.golden")
}

fn row(parts: Vec<String>) -> String {
    let mut line = parts.join(" ");
    line.push('\n');
    line
}

fn render_sheet() -> String {
    let tint = Colorizer::new();
    let mut sheet = String::new();

    sheet.push_str(&row(FG.iter().map(|&c| tint.paint(c, "fg  ")).collect()));
    sheet.push_str(&row(BG.iter().map(|&c| tint.paint(c, "bg  ")).collect()));
    sheet.push_str(&row(
        FG_BRIGHT.iter().map(|&c| tint.paint(c, "fgb ")).collect(),
    ));
    sheet.push_str(&row(
        BG_BRIGHT.iter().map(|&c| tint.paint(c, "bgb ")).collect(),
    ));
    sheet.push_str(&row(
        FG.iter()
            .zip(BG.iter())
            .map(|(&f, &b)| tint.paint([f, b], "fgbg"))
            .collect(),
    ));

    // Axis default nested inside a colored span.
    sheet.push_str(&row(vec![tint.paint(
        Color::FgRed,
        &format!("red {} red", tint.paint(Color::FgDefault, "none")),
    )]));

    // Background span nested inside a bright foreground span.
    sheet.push_str(&row(vec![tint.paint(
        Color::FgBrightRed,
        &format!(
            "ketchup {} ketchup",
            tint.paint(Color::BgBrightYellow, "mustard")
        ),
    )]));

    // Cleaning strips every sequence the sheet produced.
    sheet.push_str(&row(vec![clean(&tint.paint(
        Color::FgBrightGreen,
        &format!(
            "strip {} colors from {} should work",
            tint.paint([Color::FgBlue, Color::BgRed], "all"),
            tint.paint(Color::BgDefault, "strings"),
        ),
    ))]));

    sheet
}

#[test]
fn test_sheet_matches_golden_fixture() -> std::io::Result<()> {
    let sheet = render_sheet();

    if std::env::var_os("TINT_UPDATE_GOLDEN").is_some() {
        fs::write(golden_path(), &sheet)?;
        return Ok(());
    }

    let want = fs::read_to_string(golden_path())?;
    assert_eq!(want, sheet);
    Ok(())
}
