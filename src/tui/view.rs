//! Screen layout for the generator form.

use crate::form::{Form, MAX_LENGTH, MIN_LENGTH, Status};
use crate::terminal::{
    BOLD, CYAN, GREEN, RED, RESET, UNDERLINE, YELLOW, box_bottom, box_line, box_line_center,
    box_paragraph, box_rule, box_top,
};
use crate::text::Language;

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// 8 ──────●────────── 20
fn slider(length: usize) -> String {
    let track: String = (MIN_LENGTH..=MAX_LENGTH)
        .map(|n| if n == length { '\u{25cf}' } else { '\u{2500}' })
        .collect();
    format!("{MIN_LENGTH} {track} {MAX_LENGTH}")
}

fn status_line(form: &Form, language: Language) -> String {
    let text = language.text();
    match form.status() {
        Status::Idle => format!("{YELLOW}{}{RESET}", text.idle),
        Status::Generated => format!("{GREEN}{BOLD}\u{2714} {}{RESET}", text.success),
        Status::Copied => format!("{GREEN}\u{2714} {}{RESET}", text.copied),
        Status::CopyFailed(reason) => format!("{RED}{} {}{RESET}", text.copy_failed, reason),
        Status::NothingToCopy => format!("{YELLOW}{BOLD}! {}{RESET}", text.nothing_to_copy),
        Status::Warning(err) => format!("{YELLOW}{BOLD}! {}{RESET}", language.describe(err)),
    }
}

/// All lines of the form screen, top to bottom.
pub fn render(form: &Form, language: Language, source: &str) -> Vec<String> {
    let text = language.text();
    let mut lines = Vec::new();

    lines.push(box_top(""));
    lines.push(box_line_center(&format!("{BOLD}{}{RESET}", text.title)));
    lines.extend(box_paragraph(text.subtitle));
    lines.push(box_rule());

    lines.push(box_line(&format!("{UNDERLINE}{}{RESET}", text.settings)));
    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "  {}: {BOLD}{:>2}{RESET}    {}",
        text.length,
        form.length,
        slider(form.length)
    )));
    lines.push(box_line(&format!(
        "  {} {}",
        checkbox(form.include_numbers),
        text.numbers
    )));
    lines.push(box_line(&format!(
        "  {} {}",
        checkbox(form.include_symbols),
        text.symbols
    )));
    lines.push(box_line(""));
    lines.push(box_rule());
    for keys in text.keys {
        lines.push(box_line_center(keys));
    }
    lines.push(box_line_center(&format!("\x1b[2m{source}{RESET}")));
    lines.push(box_bottom());

    lines.push(String::new());
    lines.push(status_line(form, language));
    lines.push(String::new());

    if let Some(password) = form.password() {
        lines.push(box_top(text.your_password));
        lines.push(box_line(""));
        lines.push(box_line_center(&format!("{BOLD}{}{RESET}", password.as_str())));
        lines.push(box_line(""));
        lines.push(box_bottom());
        lines.push(format!("{CYAN}{}{RESET}", text.copy_hint));
        lines.push(String::new());
    }

    lines.push(box_top(text.tips_title));
    for tip in text.tips {
        lines.extend(box_paragraph(&format!("- {tip}")));
    }
    lines.push(box_bottom());

    lines
}
