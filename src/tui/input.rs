use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    LengthUp,
    LengthDown,
    EditLength,
    ToggleNumbers,
    ToggleSymbols,
    Copy,
    Clear,
    SwitchLanguage,
    Quit,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => Some(Action::LengthUp),
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(Action::LengthDown),
        KeyCode::Char('e') => Some(Action::EditLength),
        KeyCode::Char('n') => Some(Action::ToggleNumbers),
        KeyCode::Char('s') => Some(Action::ToggleSymbols),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('x') => Some(Action::Clear),
        KeyCode::Char('l') => Some(Action::SwitchLanguage),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Single-line editor. Returns `None` when cancelled with Esc or Ctrl+C.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor_pos = input.len();
    let mut last_len = input.len();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    print!("\r\n{}: {}", prompt, initial_value);
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return None,
            KeyCode::Esc => return None,
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor_pos = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor_pos > 0 => {
                cursor_pos -= 1;
                input.remove(cursor_pos);
            }
            KeyCode::Delete if cursor_pos < input.len() => {
                input.remove(cursor_pos);
            }
            KeyCode::Left if cursor_pos > 0 => cursor_pos -= 1,
            KeyCode::Right if cursor_pos < input.len() => cursor_pos += 1,
            KeyCode::Home => cursor_pos = 0,
            KeyCode::End => cursor_pos = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor_pos, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor_pos);
        flush();
        last_len = input.len();
    }

    Some(input.into_iter().collect())
}
