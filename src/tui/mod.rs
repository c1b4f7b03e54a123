//! Interactive generator form.

mod input;
mod view;

use crossterm::event::{Event, read};
use log::info;

use crate::clipboard;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::rng::Source;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, print_lines, reset_terminal};

pub use input::{Action, action_for, get_editable_input};
pub use view::render;

/// Run the form until the user quits.
pub fn run(settings: &Settings, mut rng: Source) -> Result<()> {
    let mut form = Form::new(settings);
    let mut language = settings.language;
    info!("form opened (source: {})", rng.name());

    let mut guard = RawModeGuard::new()?;
    print!("\x1b[?25l");

    loop {
        clear();
        print_lines(&render(&form, language, rng.name()));

        let Event::Key(key) = read()? else {
            continue;
        };
        let Some(action) = action_for(key) else {
            continue;
        };

        match action {
            Action::Generate => {
                form.generate(&mut rng);
            }
            Action::LengthUp => form.increase_length(),
            Action::LengthDown => form.decrease_length(),
            Action::ToggleNumbers => form.toggle_numbers(),
            Action::ToggleSymbols => form.toggle_symbols(),
            Action::EditLength => {
                guard.release();
                print!("\x1b[?25h");
                let typed = get_editable_input(language.text().length_prompt, "");
                guard = RawModeGuard::new()?;
                print!("\x1b[?25l");
                if let Some(typed) = typed {
                    form.enter_length(&typed);
                }
            }
            Action::Copy => {
                let copied = form.password().map(|p| clipboard::copy(p.as_str()));
                match copied {
                    Some(Ok(())) => form.mark_copied(),
                    Some(Err(Error::Clipboard(reason))) => form.mark_copy_failed(reason),
                    Some(Err(e)) => form.mark_copy_failed(e.to_string()),
                    None => form.mark_nothing_to_copy(),
                }
            }
            Action::Clear => form.clear(),
            Action::SwitchLanguage => language = language.toggle(),
            Action::Quit => break,
        }
    }

    drop(guard);
    clear();
    reset_terminal();
    info!("form closed");
    Ok(())
}
