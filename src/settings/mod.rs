//! Saved form defaults. Passwords are never stored.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::rng::SourceKind;
use crate::text::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub language: Language,
    pub source: SourceKind,
}

impl Settings {
    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    /// Hand-edited files may carry a length the form cannot show.
    pub fn sanitized(mut self) -> Self {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_numbers: true,
            include_symbols: true,
            language: Language::En,
            source: SourceKind::Thread,
        }
    }
}
