use std::num::NonZeroUsize;

use clap::Parser;

use crate::form::parse_length;
use crate::rng::SourceKind;
use crate::text::Language;

#[derive(Parser, Debug)]
#[command(
    name = "easypass",
    version,
    about = "Easy password generator",
    long_about = r#"
Generates passwords that are easy to use: always a mix of lower and upper
case letters, with digits and symbols unless you turn them off.

Run without arguments to open the interactive form.

Examples:
  easypass                      Open the form
  easypass -l 16                One password, 16 characters
  easypass -l 10 --no-symbols   Letters and digits only
  easypass -n 3 -b              Three passwords, copied to the clipboard
  easypass -l 14 --lang es --save
                                Remember length 14 and Spanish as defaults
"#
)]
pub struct CliFlags {
    /// Password length (8-20)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Include digits 0-9
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave out digits
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include symbols such as !@#
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// How many passwords to print (at least 1)
    #[arg(short, long, default_value_t = NonZeroUsize::MIN)]
    pub number: NonZeroUsize,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Random source
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Shorthand for --source os
    #[arg(short, long)]
    pub urandom: bool,

    /// Seed for reproducible output (testing only)
    #[arg(long, env = "EASYPASS_SEED")]
    pub seed: Option<u64>,

    /// Interface language
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Only print passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Save these options as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore saved settings
    #[arg(short, long)]
    pub default: bool,

    /// Open the interactive form with these options
    #[arg(long)]
    pub tui: bool,
}

impl CliFlags {
    /// Explicit digit choice, if any.
    pub fn numbers_choice(&self) -> Option<bool> {
        match (self.numbers, self.no_numbers) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Explicit symbol choice, if any.
    pub fn symbols_choice(&self) -> Option<bool> {
        match (self.symbols, self.no_symbols) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn source_choice(&self) -> Option<SourceKind> {
        if self.urandom {
            Some(SourceKind::Os)
        } else {
            self.source
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("easypass").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.length, None);
        assert_eq!(flags.number.get(), 1);
        assert_eq!(flags.numbers_choice(), None);
        assert_eq!(flags.symbols_choice(), None);
        assert!(!flags.clipboard);
    }

    #[test]
    fn test_length_range_is_enforced() {
        assert_eq!(parse(&["-l", "16"]).unwrap().length, Some(16));
        assert!(parse(&["-l", "7"]).is_err());
        assert!(parse(&["--length", "21"]).is_err());
        assert!(parse(&["-l", "ten"]).is_err());
    }

    #[test]
    fn test_password_count_must_be_positive() {
        assert_eq!(parse(&["-n", "3"]).unwrap().number.get(), 3);
        assert!(parse(&["-n", "0"]).is_err());
        assert!(parse(&["--number", "-2"]).is_err());
    }

    #[test]
    fn test_toggles_last_one_wins() {
        let flags = parse(&["--no-numbers", "--numbers"]).unwrap();
        assert_eq!(flags.numbers_choice(), Some(true));

        let flags = parse(&["--symbols", "--no-symbols"]).unwrap();
        assert_eq!(flags.symbols_choice(), Some(false));
    }

    #[test]
    fn test_source_and_language() {
        let flags = parse(&["-u", "--lang", "es"]).unwrap();
        assert_eq!(flags.source_choice(), Some(SourceKind::Os));
        assert_eq!(flags.lang, Some(Language::Es));

        let flags = parse(&["--source", "hardware"]).unwrap();
        assert_eq!(flags.source_choice(), Some(SourceKind::Hardware));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["--hex"]).is_err());
    }
}
