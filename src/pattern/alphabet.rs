//! Fixed symbol orderings for the three range token classes.
//!
//! Every alphabet starts with the "omitted" sentinel at index 0. A token with
//! an empty start bound begins at the sentinel, which substitutes to the empty
//! string, so `[-c]` yields `""`, `a`, `b`, `c`.
//!
//! Digits have no table: they count numerically and render with zero padding.

use std::fmt;

const LOWERCASE: [&str; 27] = [
    "", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

const UPPERCASE: [&str; 27] = [
    "", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Index of the omitted-start sentinel in every alphabet.
pub const SENTINEL_INDEX: usize = 0;

/// The class of a range token, which fixes its grammar and alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `[<digits>-<digits>]`
    Digit,
    /// `[<a-z>-<a-z>]`
    Lowercase,
    /// `[<A-Z>-<A-Z>]`
    Uppercase,
}

impl TokenClass {
    /// All classes in the order their blocks are emitted during expansion.
    pub const ALL: [Self; 3] = [Self::Digit, Self::Lowercase, Self::Uppercase];

    /// Returns the stable lowercase label for logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered symbol table for one token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeAlphabet {
    symbols: &'static [&'static str],
}

impl RangeAlphabet {
    /// Returns the fixed alphabet for a letter class, `None` for digits.
    #[must_use]
    pub const fn for_class(class: TokenClass) -> Option<Self> {
        match class {
            TokenClass::Digit => None,
            TokenClass::Lowercase => Some(Self {
                symbols: &LOWERCASE,
            }),
            TokenClass::Uppercase => Some(Self {
                symbols: &UPPERCASE,
            }),
        }
    }

    /// All symbols, sentinel first.
    #[must_use]
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    /// Position of a bound in this alphabet.
    ///
    /// An empty bound maps to the sentinel. Anything that is not exactly one
    /// symbol of the alphabet has no position.
    #[must_use]
    pub fn position(&self, bound: &str) -> Option<usize> {
        if bound.is_empty() {
            return Some(SENTINEL_INDEX);
        }
        self.symbols
            .iter()
            .skip(SENTINEL_INDEX + 1)
            .position(|symbol| *symbol == bound)
            .map(|offset| offset + SENTINEL_INDEX + 1)
    }
}
