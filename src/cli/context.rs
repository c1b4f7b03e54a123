//! CLI context - bundles settings and flags.

use std::io::Write;

use log::{debug, info};
use zeroize::Zeroizing;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::error::{Error, Result};
use crate::pass::{self, Password};
use crate::rng::Source;
use crate::settings::Settings;
use crate::tui;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let saved = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                // saved language is unknown here, so only the flag counts
                let text = flags.lang.unwrap_or_default().text();
                prompts::warn(&format!("{} {}", text.settings_load_failed, e));
                Settings::default()
            })
        };

        let mut context = Self {
            settings: saved,
            flags,
        };
        context.apply_flags();
        context
    }

    /// Explicit flags win over saved settings.
    fn apply_flags(&mut self) {
        if let Some(length) = self.flags.length {
            self.settings.length = length;
        }
        if let Some(numbers) = self.flags.numbers_choice() {
            self.settings.include_numbers = numbers;
        }
        if let Some(symbols) = self.flags.symbols_choice() {
            self.settings.include_symbols = symbols;
        }
        if let Some(language) = self.flags.lang {
            self.settings.language = language;
        }
        if let Some(source) = self.flags.source_choice() {
            self.settings.source = source;
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.save {
            self.save_settings();
        }

        let rng = Source::new(self.settings.source, self.flags.seed);
        debug!("random source: {}", rng.name());

        if self.flags.tui {
            return tui::run(&self.settings, rng);
        }
        self.generate_output(rng)
    }

    fn save_settings(&self) {
        let text = self.settings.language.text();
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(
                text.settings_saved,
                &Settings::path().display().to_string(),
            ),
            Err(e) => prompts::warn(&format!("{} {}", text.settings_save_failed, e)),
        }
    }

    fn generate_output(&self, mut rng: Source) -> Result<()> {
        let request = pass::Request::new(
            self.settings.length,
            self.settings.include_numbers,
            self.settings.include_symbols,
        );
        let count = self.flags.number.get();
        let passwords = pass::generate_batch(&request, count, &mut rng)?;
        info!("generated {} password(s) of length {}", count, request.length);

        let text = self.settings.language.text();

        if self.flags.clipboard {
            let joined = Zeroizing::new(
                passwords
                    .iter()
                    .map(Password::as_str)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            match clipboard::copy(&joined) {
                Ok(()) => {
                    prompts::done(text.copied);
                    return Ok(());
                }
                Err(Error::Clipboard(reason)) => {
                    if !prompts::clipboard_fallback_prompt(&reason) {
                        return Ok(());
                    }
                }
                Err(e) => return Err(e),
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for password in &passwords {
            writeln!(out, "{}", password.as_str())?;
        }
        out.flush()?;
        Ok(())
    }
}
