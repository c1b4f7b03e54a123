//! Password generation.

use std::fmt;

use log::debug;
use zeroize::Zeroizing;

use super::charset::{self, CharClass};
use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Parameters for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Request {
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_numbers,
            include_symbols,
        }
    }

    /// Mandatory characters for these flags: 2, 3 or 4.
    pub fn seed_count(&self) -> usize {
        2 + usize::from(self.include_numbers) + usize::from(self.include_symbols)
    }
}

/// Generated password. The text is wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.0.len())
    }
}

/// Generate a single password.
///
/// One lowercase and one uppercase character are always seeded, plus one
/// digit and one symbol when enabled. The rest is drawn from the union of the
/// enabled classes and the whole sequence is shuffled.
///
/// Fails with [`Error::LengthTooSmall`] when `length` cannot hold the seeds.
pub fn generate<R: RandomSource>(request: &Request, rng: &mut R) -> Result<Password> {
    let required = request.seed_count();
    if request.length < required {
        return Err(Error::LengthTooSmall {
            length: request.length,
            required,
        });
    }

    let all = charset::pool(request);
    let mut chars = Zeroizing::new(Vec::with_capacity(request.length));

    for class in charset::seed_classes(request) {
        let set = class.chars();
        chars.push(set[rng.index(set.len())]);
    }

    while chars.len() < request.length {
        chars.push(all[rng.index(all.len())]);
    }

    rng.shuffle(&mut chars[..]);

    debug!(
        "generated password: length={}, numbers={}, symbols={}",
        request.length, request.include_numbers, request.include_symbols
    );

    debug_assert!(chars.iter().all(|&b| CharClass::of(b as char).is_some()));
    Ok(Password(Zeroizing::new(
        chars.iter().map(|&b| b as char).collect(),
    )))
}

/// Generate `count` independent passwords.
pub fn generate_batch<R: RandomSource>(
    request: &Request,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>> {
    (0..count).map(|_| generate(request, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Source, SourceKind};

    fn count(password: &Password, class: CharClass) -> usize {
        password
            .as_str()
            .chars()
            .filter(|&c| CharClass::of(c) == Some(class))
            .count()
    }

    /// Always draws index 0 and never reorders.
    struct FirstPick;

    impl RandomSource for FirstPick {
        fn index(&mut self, _bound: usize) -> usize {
            0
        }

        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }

    #[test]
    fn test_exact_length_for_every_valid_combination() {
        let mut rng = Source::new(SourceKind::Thread, None);
        for length in 4..=20 {
            for numbers in [false, true] {
                for symbols in [false, true] {
                    let request = Request::new(length, numbers, symbols);
                    let password = generate(&request, &mut rng).unwrap();
                    assert_eq!(password.len(), length);
                }
            }
        }
    }

    #[test]
    fn test_class_guarantees_hold() {
        let mut rng = Source::new(SourceKind::Thread, None);
        for _ in 0..500 {
            for numbers in [false, true] {
                for symbols in [false, true] {
                    let request = Request::new(8, numbers, symbols);
                    let password = generate(&request, &mut rng).unwrap();
                    assert!(count(&password, CharClass::Lowercase) >= 1);
                    assert!(count(&password, CharClass::Uppercase) >= 1);
                    assert_eq!(count(&password, CharClass::Digit) >= 1, numbers);
                    assert_eq!(count(&password, CharClass::Symbol) >= 1, symbols);
                }
            }
        }
    }

    #[test]
    fn test_twelve_with_everything() {
        let mut rng = Source::new(SourceKind::Thread, None);
        let password = generate(&Request::new(12, true, true), &mut rng).unwrap();
        assert_eq!(password.len(), 12);
        for class in [
            CharClass::Lowercase,
            CharClass::Uppercase,
            CharClass::Digit,
            CharClass::Symbol,
        ] {
            assert!(count(&password, class) >= 1);
        }
    }

    #[test]
    fn test_letters_only() {
        let mut rng = Source::new(SourceKind::Thread, None);
        for _ in 0..200 {
            let password = generate(&Request::new(8, false, false), &mut rng).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_minimum_form_length_with_everything() {
        let mut rng = FirstPick;
        let password = generate(&Request::new(8, true, true), &mut rng).unwrap();
        // four seeds in order, then four fills from the start of the pool
        assert_eq!(password.as_str(), "aA0!aaaa");
    }

    #[test]
    fn test_length_exactly_seed_count() {
        let mut rng = FirstPick;
        let password = generate(&Request::new(3, true, false), &mut rng).unwrap();
        assert_eq!(password.as_str(), "aA0");
    }

    #[test]
    fn test_length_too_small_is_rejected() {
        let mut rng = Source::new(SourceKind::Thread, None);
        let err = generate(&Request::new(2, true, true), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthTooSmall {
                length: 2,
                required: 4
            }
        ));

        let err = generate(&Request::new(1, false, false), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthTooSmall {
                length: 1,
                required: 2
            }
        ));
    }

    #[test]
    fn test_two_passwords_differ() {
        let mut rng = Source::new(SourceKind::Thread, None);
        let request = Request::new(12, true, true);
        let a = generate(&request, &mut rng).unwrap();
        let b = generate(&request, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_generation_replays() {
        let request = Request::new(16, true, true);
        let mut a = Source::new(SourceKind::Thread, Some(2024));
        let mut b = Source::new(SourceKind::Thread, Some(2024));
        assert_eq!(
            generate(&request, &mut a).unwrap(),
            generate(&request, &mut b).unwrap()
        );
    }

    #[test]
    fn test_seed_positions_are_shuffled() {
        let mut rng = Source::new(SourceKind::Thread, Some(11));
        let request = Request::new(20, false, false);
        let first_is_lower = (0..200)
            .map(|_| generate(&request, &mut rng).unwrap())
            .filter(|p| p.as_str().starts_with(|c: char| c.is_ascii_lowercase()))
            .count();
        // without the shuffle this would be all 200
        assert!(first_is_lower < 180);
    }

    #[test]
    fn test_batch() {
        let mut rng = Source::new(SourceKind::Thread, None);
        let passwords = generate_batch(&Request::new(10, true, false), 5, &mut rng).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 10));

        let err = generate_batch(&Request::new(3, true, true), 2, &mut rng).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_debug_hides_text() {
        let mut rng = FirstPick;
        let password = generate(&Request::new(8, false, false), &mut rng).unwrap();
        assert_eq!(format!("{:?}", password), "Password(8 chars)");
    }
}
