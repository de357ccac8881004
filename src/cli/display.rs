// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the sitefind CLI.
//!
//! A handful of OneDark colors, a box to put results in, and nothing when
//! stdout is not a terminal or `NO_COLOR` is set, so the output pipes cleanly.

pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const GREEN: &str = "\x1b[38;2;152;195;121m";
pub const YELLOW: &str = "\x1b[38;2;229;192;123m";
pub const RED: &str = "\x1b[38;2;224;108;117m";
pub const CYAN: &str = "\x1b[38;2;86;182;194m";

/// Colors only on a TTY, and never with `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in styles when colors are on.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as displayed, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("┌{}{}┐", label_part, "─".repeat(remaining));
}

/// │ content     │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("│{}{}│", content, " ".repeat(pad));
}

/// └─────────────┘
pub fn section_bot() {
    println!("└{}┘", "─".repeat(BOX_WIDTH));
}

/// Rank colored by quality: exact green, close yellow, loose red.
pub fn rank_value(rank: f64) -> String {
    let text = format!("{:.3}", rank);
    let color = if rank < 1e-6 {
        GREEN
    } else if rank < 0.2 {
        YELLOW
    } else {
        RED
    };
    styled(&[color], &text)
}
