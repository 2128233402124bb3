//! Range token grammars and single-token resolution.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::alphabet::{RangeAlphabet, TokenClass};
use super::error::PatternError;

// `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware.
#[allow(clippy::expect_used)]
static DIGIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9]*)-([0-9]+)\]").expect("digit token regex is valid") // Static pattern, safe to panic
});

#[allow(clippy::expect_used)]
static LOWERCASE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([a-z]*)-([a-z]+)\]").expect("lowercase token regex is valid") // Static pattern, safe to panic
});

#[allow(clippy::expect_used)]
static UPPERCASE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Z]*)-([A-Z]+)\]").expect("uppercase token regex is valid") // Static pattern, safe to panic
});

fn grammar(class: TokenClass) -> &'static Regex {
    match class {
        TokenClass::Digit => &DIGIT_TOKEN,
        TokenClass::Lowercase => &LOWERCASE_TOKEN,
        TokenClass::Uppercase => &UPPERCASE_TOKEN,
    }
}

/// One bracketed range found in a pattern string.
///
/// A token is tied to the string it was found in: its span is only
/// meaningful for [`substitute`](Self::substitute) on that same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeToken {
    class: TokenClass,
    span: Range<usize>,
    text: String,
    start: String,
    end: String,
}

impl RangeToken {
    /// Finds the first token of `class` in `input`.
    #[must_use]
    pub fn find(input: &str, class: TokenClass) -> Option<Self> {
        let captures = grammar(class).captures(input)?;
        let full = captures.get(0)?;
        Some(Self {
            class,
            span: full.range(),
            text: full.as_str().to_string(),
            start: captures.get(1).map_or("", |m| m.as_str()).to_string(),
            end: captures.get(2).map_or("", |m| m.as_str()).to_string(),
        })
    }

    /// Finds the leftmost token of any class in `input`.
    #[must_use]
    pub fn find_leftmost(input: &str) -> Option<Self> {
        TokenClass::ALL
            .into_iter()
            .filter_map(|class| Self::find(input, class))
            .min_by_key(|token| token.span.start)
    }

    /// The token's class.
    #[must_use]
    pub fn class(&self) -> TokenClass {
        self.class
    }

    /// The full matched text, brackets included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The literal start bound (possibly empty).
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The literal end bound.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Renders every substitution value in ascending order.
    ///
    /// Digits count numerically from `start` (0 when omitted) to `end`,
    /// zero-padded to the length of the literal start text. Letters walk the
    /// class alphabet from `start` (the empty sentinel when omitted) to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::RangeOrder`] when start sorts after end,
    /// [`PatternError::InvalidBound`] for multi-letter bounds, and
    /// [`PatternError::NumberOutOfRange`] for digit bounds beyond `u64`.
    pub fn values(&self) -> Result<Vec<String>, PatternError> {
        match RangeAlphabet::for_class(self.class) {
            Some(alphabet) => self.letter_values(alphabet),
            None => self.digit_values(),
        }
    }

    /// Replaces this token in `input` with `value`.
    #[must_use]
    pub fn substitute(&self, input: &str, value: &str) -> String {
        let mut output =
            String::with_capacity(input.len().saturating_sub(self.text.len()) + value.len());
        output.push_str(&input[..self.span.start]);
        output.push_str(value);
        output.push_str(&input[self.span.end..]);
        output
    }

    fn digit_values(&self) -> Result<Vec<String>, PatternError> {
        let first = if self.start.is_empty() {
            0
        } else {
            self.parse_number(&self.start)?
        };
        let last = self.parse_number(&self.end)?;
        if first > last {
            return Err(PatternError::range_order(&self.text, &self.start, &self.end));
        }

        let width = self.start.len().max(1);
        Ok((first..=last).map(|n| format!("{n:0width$}")).collect())
    }

    fn letter_values(&self, alphabet: RangeAlphabet) -> Result<Vec<String>, PatternError> {
        let first = alphabet
            .position(&self.start)
            .ok_or_else(|| PatternError::invalid_bound(&self.text, &self.start))?;
        let last = alphabet
            .position(&self.end)
            .ok_or_else(|| PatternError::invalid_bound(&self.text, &self.end))?;
        if first > last {
            return Err(PatternError::range_order(&self.text, &self.start, &self.end));
        }

        Ok(alphabet.symbols()[first..=last]
            .iter()
            .map(|symbol| (*symbol).to_string())
            .collect())
    }

    fn parse_number(&self, digits: &str) -> Result<u64, PatternError> {
        digits
            .parse::<u64>()
            .map_err(|_| PatternError::number_out_of_range(&self.text, digits))
    }
}
