//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers. Box helpers return the line so screens can be
//! assembled before anything is written.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const CYAN: &str = "\x1b[38;5;14m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

/// Write prepared lines with explicit carriage returns (safe in raw mode).
pub fn print_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = write!(out, "{line}\r\n");
    }
    let _ = out.flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Long text wrapped over as many box lines as needed.
pub fn box_paragraph(text: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if console_width(&current) + 1 + console_width(word) <= inner_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(box_line(&current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(box_line(&current));
    }
    lines
}

/// ├───────────────────────────────────────────────────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
