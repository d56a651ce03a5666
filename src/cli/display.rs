// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the rearrange CLI.
//!
//! Colored `OK`/`FAIL` badges for the self-test table, OneDark on dark
//! terminals and One Light on light ones. Plain text whenever stdout is not a
//! TTY or `NO_COLOR` is set, so pipes and tests see exactly the same bytes.
//!
//! # Theme detection order
//!
//! 1. `REARRANGE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use rearrange::selftest::{CaseOutcome, Report};
use std::sync::OnceLock;

// Width each quoted string is padded to in the self-test table.
const CELL_WIDTH: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Parse a theme name as accepted in `REARRANGE_THEME`.
fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret a `COLORFGBG` value ("fg;bg"). Background 7+ (except 8) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("REARRANGE_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Debug-quote a string and pad it to the table cell width.
fn cell(text: &str) -> String {
    format!("{:<width$}", format!("{:?}", text), width = CELL_WIDTH)
}

// ═══════════════════════════════════════════════════════════════════════════
// SELF-TEST TABLE
// ═══════════════════════════════════════════════════════════════════════════

/// `OK` in green or `FAIL` in red.
pub fn status_badge(passed: bool, colors: bool) -> String {
    if passed {
        themed(GREEN, &[BOLD], "OK", colors)
    } else {
        themed(RED, &[BOLD], "FAIL", colors)
    }
}

/// One table row: original, encoded, expected and decoded text, then the badge.
pub fn case_line(case: &CaseOutcome, colors: bool) -> String {
    let arrow = themed(GRAY, &[], "->", colors);
    format!(
        "orig: {} enc: {} expected: {} dec: {} {} {}",
        cell(&case.input),
        cell(&case.encoded),
        cell(&case.expected),
        cell(&case.decoded),
        arrow,
        status_badge(case.passed, colors)
    )
}

/// Full table: one line per case, a blank line, then the summary.
pub fn report_lines(report: &Report, colors: bool) -> Vec<String> {
    let mut lines: Vec<String> = report.cases.iter().map(|c| case_line(c, colors)).collect();
    lines.push(String::new());
    lines.push(report.summary().to_string());
    lines
}
