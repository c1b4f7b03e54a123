//! State behind the generator form, independent of how it is drawn.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::pass::{self, Password, Request};
use crate::rng::RandomSource;
use crate::settings::Settings;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 12;

/// Message under the controls.
#[derive(Debug)]
pub enum Status {
    /// Nothing generated yet
    Idle,
    Generated,
    Copied,
    CopyFailed(String),
    /// Copy pressed before anything was generated
    NothingToCopy,
    /// Rejected input or failed generation
    Warning(Error),
}

#[derive(Debug)]
pub struct Form {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    password: Option<Password>,
    status: Status,
    defaults: Settings,
}

/// Parse a typed length and check it against the form range.
pub fn parse_length(input: &str) -> Result<usize> {
    let input = input.trim();
    let value: usize = input
        .parse()
        .map_err(|_| Error::NotANumber(input.to_string()))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&value) {
        return Err(Error::LengthOutOfRange {
            value,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(value)
}

impl Form {
    pub fn new(defaults: &Settings) -> Self {
        let defaults = defaults.clone().sanitized();
        Self {
            length: defaults.length,
            include_numbers: defaults.include_numbers,
            include_symbols: defaults.include_symbols,
            password: None,
            status: Status::Idle,
            defaults,
        }
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn request(&self) -> Request {
        Request::new(self.length, self.include_numbers, self.include_symbols)
    }

    /// Apply a typed length. Invalid input leaves the length and any shown
    /// password unchanged and turns the status into a warning. Returns whether
    /// the input was taken.
    pub fn enter_length(&mut self, input: &str) -> bool {
        match parse_length(input) {
            Ok(length) => {
                self.length = length;
                self.controls_changed();
                true
            }
            Err(e) => {
                debug!("rejected length input: {}", e);
                self.status = Status::Warning(e);
                false
            }
        }
    }

    pub fn increase_length(&mut self) {
        self.length = (self.length + 1).min(MAX_LENGTH);
        self.controls_changed();
    }

    pub fn decrease_length(&mut self) {
        self.length = self.length.saturating_sub(1).max(MIN_LENGTH);
        self.controls_changed();
    }

    pub fn toggle_numbers(&mut self) {
        self.include_numbers = !self.include_numbers;
        self.controls_changed();
    }

    pub fn toggle_symbols(&mut self) {
        self.include_symbols = !self.include_symbols;
        self.controls_changed();
    }

    /// Generate a new password from the current controls. On failure the
    /// status carries the reason and the previous password is dropped.
    pub fn generate<R: RandomSource>(&mut self, rng: &mut R) -> Option<&Password> {
        match pass::generate(&self.request(), rng) {
            Ok(password) => {
                debug!("form generated {} chars", password.len());
                self.status = Status::Generated;
                Some(self.password.insert(password))
            }
            Err(e) => {
                warn!("generation failed: {}", e);
                self.password = None;
                self.status = Status::Warning(e);
                None
            }
        }
    }

    /// Drop the password and put every control back to its default.
    pub fn clear(&mut self) {
        self.password = None;
        self.length = self.defaults.length;
        self.include_numbers = self.defaults.include_numbers;
        self.include_symbols = self.defaults.include_symbols;
        self.status = Status::Idle;
    }

    pub fn mark_copied(&mut self) {
        self.status = Status::Copied;
    }

    pub fn mark_copy_failed(&mut self, reason: String) {
        self.status = Status::CopyFailed(reason);
    }

    pub fn mark_nothing_to_copy(&mut self) {
        self.status = Status::NothingToCopy;
    }

    /// The shown password always matches the controls.
    fn controls_changed(&mut self) {
        self.password = None;
        self.status = Status::Idle;
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
