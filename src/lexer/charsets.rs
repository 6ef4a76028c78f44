use std::collections::HashSet;

use lazy_static::lazy_static;

/// Punctuation alphabet of the toy language. `_` is listed here as well as in
/// the letters; letters are always tested first.
pub const STANDARD_PUNCTUATION: [char; 21] = [
    '=', '+', '-', '*', '/', ',', ';', '!', '<', '>', '(', ')', '{', '}', '_', '#', '&', '^', '%',
    '$', '@',
];

/// Space, backspace, line feed and carriage return.
pub const STANDARD_IGNORABLE: [char; 4] = [' ', '\u{8}', '\n', '\r'];

lazy_static! {
    static ref STANDARD_CLASSES: CharacterClasses = CharacterClasses::new(
        ('A'..='Z').chain('a'..='z').chain(['_']),
        '0'..='9',
        STANDARD_PUNCTUATION,
        STANDARD_IGNORABLE,
    );
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Punctuation,
    Ignorable,
}

/// The four character sets the scanner classifies by.
///
/// The sets are fixed once built; overlaps are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClasses {
    letters: HashSet<char>,
    digits: HashSet<char>,
    punctuation: HashSet<char>,
    ignorable: HashSet<char>,
}

impl CharacterClasses {
    pub fn new(
        letters: impl IntoIterator<Item = char>,
        digits: impl IntoIterator<Item = char>,
        punctuation: impl IntoIterator<Item = char>,
        ignorable: impl IntoIterator<Item = char>,
    ) -> Self {
        CharacterClasses {
            letters: letters.into_iter().collect(),
            digits: digits.into_iter().collect(),
            punctuation: punctuation.into_iter().collect(),
            ignorable: ignorable.into_iter().collect(),
        }
    }

    /// ASCII letters and `_`, ASCII digits, the standard punctuation alphabet
    /// and the standard ignorable characters.
    pub fn standard() -> Self {
        STANDARD_CLASSES.clone()
    }

    pub fn contains(&self, class: CharClass, c: char) -> bool {
        match class {
            CharClass::Letter => self.letters.contains(&c),
            CharClass::Digit => self.digits.contains(&c),
            CharClass::Punctuation => self.punctuation.contains(&c),
            CharClass::Ignorable => self.ignorable.contains(&c),
        }
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.contains(CharClass::Letter, c)
    }

    pub fn is_digit(&self, c: char) -> bool {
        self.contains(CharClass::Digit, c)
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.contains(CharClass::Punctuation, c)
    }

    pub fn is_ignorable(&self, c: char) -> bool {
        self.contains(CharClass::Ignorable, c)
    }

    /// True for characters that end an identifier or literal without error.
    pub fn is_terminator(&self, c: char) -> bool {
        self.is_punctuation(c) || self.is_ignorable(c)
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        CharacterClasses::standard()
    }
}
