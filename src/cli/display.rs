// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the poisk CLI.
//!
//! Small ANSI helpers: result lines get a touch of color when stdout is a
//! real terminal, and none at all when output is piped. Respects `NO_COLOR`
//! for the purists.

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text.
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Doc id in result lines: `[7]`, bold.
pub fn doc_id_badge(id: u32) -> String {
    color(BOLD, &format!("[{}]", id))
}

/// Score with fixed precision, cyan.
pub fn score_value(score: f64) -> String {
    color(CYAN, &format!("{:.4}", score))
}

/// Elapsed query time in seconds, dimmed.
pub fn timing_secs(seconds: f64) -> String {
    color(DIM, &format!("{:.4} sec", seconds))
}

/// The interactive prompt marker.
pub fn prompt() -> String {
    color(GREEN, "Query> ")
}
