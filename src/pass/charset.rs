//! Character classes and draw pools.

use super::Request;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        match c {
            'a'..='z' => Some(CharClass::Lowercase),
            'A'..='Z' => Some(CharClass::Uppercase),
            '0'..='9' => Some(CharClass::Digit),
            c if c.is_ascii_punctuation() => Some(CharClass::Symbol),
            _ => None,
        }
    }
}

/// Classes that get one guaranteed seed character, in seeding order.
pub fn seed_classes(request: &Request) -> Vec<CharClass> {
    let mut classes = vec![CharClass::Lowercase, CharClass::Uppercase];
    if request.include_numbers {
        classes.push(CharClass::Digit);
    }
    if request.include_symbols {
        classes.push(CharClass::Symbol);
    }
    classes
}

/// Every character a fill draw may produce.
pub fn pool(request: &Request) -> Vec<u8> {
    seed_classes(request)
        .into_iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_all_ascii_punctuation() {
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.iter().all(u8::is_ascii_punctuation));
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(pool(&Request::new(12, false, false)).len(), 52);
        assert_eq!(pool(&Request::new(12, true, false)).len(), 62);
        assert_eq!(pool(&Request::new(12, false, true)).len(), 84);
        assert_eq!(pool(&Request::new(12, true, true)).len(), 94);
    }

    #[test]
    fn test_class_of() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('~'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('ñ'), None);
    }

    #[test]
    fn test_every_class_member_maps_back() {
        for class in [
            CharClass::Lowercase,
            CharClass::Uppercase,
            CharClass::Digit,
            CharClass::Symbol,
        ] {
            for &b in class.chars() {
                assert_eq!(CharClass::of(b as char), Some(class));
            }
        }
    }
}
