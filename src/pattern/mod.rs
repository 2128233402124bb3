//! Range pattern expansion.
//!
//! A pattern is a URL containing bracketed range tokens of three classes:
//! digits (`[01-10]`), lowercase letters (`[a-f]`) and uppercase letters
//! (`[A-F]`). Expansion resolves the tokens into the ordered list of concrete
//! URLs they denote.
//!
//! # Example
//!
//! ```
//! use fusker_core::pattern::expand;
//!
//! let urls = expand("http://x/[a-c].jpg").unwrap();
//! assert_eq!(urls, vec!["http://x/a.jpg", "http://x/b.jpg", "http://x/c.jpg"]);
//! ```

mod alphabet;
mod error;
mod input;
mod token;

pub use alphabet::{RangeAlphabet, SENTINEL_INDEX, TokenClass};
pub use error::PatternError;
pub use input::split_pattern_list;
pub use token::RangeToken;

use tracing::{debug, trace};

/// How tokens of different classes in one pattern combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    /// Each class resolves its own tokens only; tokens of other classes are
    /// left in place. The digit, lowercase and uppercase blocks are
    /// concatenated in that order, so `x[1-2][a-b]` yields
    /// `x1[a-b]`, `x2[a-b]`, `x[1-2]a`, `x[1-2]b`.
    #[default]
    PerClass,
    /// Every token is resolved, leftmost first, producing the full cartesian
    /// product: `x[1-2][a-b]` yields `x1a`, `x1b`, `x2a`, `x2b`.
    CrossProduct,
}

impl ExpansionMode {
    /// Returns the stable label for logs and config output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerClass => "per-class",
            Self::CrossProduct => "cross-product",
        }
    }
}

/// Expands range patterns into concrete URLs.
///
/// The expander holds no state besides its mode; one instance can serve any
/// number of patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExpander {
    mode: ExpansionMode,
}

impl PatternExpander {
    /// Creates an expander with the given mode.
    #[must_use]
    pub fn new(mode: ExpansionMode) -> Self {
        Self { mode }
    }

    /// The configured expansion mode.
    #[must_use]
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// Expands `pattern` into its URLs in ascending generation order.
    ///
    /// A pattern without any token expands to itself. The result size is not
    /// bounded; `[0-999999]` yields a million entries.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if any token reached during expansion has
    /// an inverted or invalid range. No partial result is returned.
    #[tracing::instrument(skip(self), fields(mode = self.mode.as_str()))]
    pub fn expand(&self, pattern: &str) -> Result<Vec<String>, PatternError> {
        let urls = match self.mode {
            ExpansionMode::PerClass => expand_per_class(pattern)?,
            ExpansionMode::CrossProduct => {
                let mut urls = Vec::new();
                resolve_leftmost(pattern, &mut urls)?;
                urls
            }
        };
        debug!(count = urls.len(), "pattern expanded");
        Ok(urls)
    }

    /// Expands several patterns and concatenates the results in input order.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not expand; nothing from the
    /// earlier patterns is returned.
    pub fn expand_all<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<String>, PatternError> {
        let mut urls = Vec::new();
        for pattern in patterns {
            urls.extend(self.expand(pattern.as_ref())?);
        }
        Ok(urls)
    }
}

/// Expands `pattern` with the default [`ExpansionMode::PerClass`] mode.
///
/// # Errors
///
/// See [`PatternExpander::expand`].
pub fn expand(pattern: &str) -> Result<Vec<String>, PatternError> {
    PatternExpander::default().expand(pattern)
}

fn expand_per_class(pattern: &str) -> Result<Vec<String>, PatternError> {
    let mut urls = Vec::new();
    let mut matched = false;

    for class in TokenClass::ALL {
        let Some(token) = RangeToken::find(pattern, class) else {
            continue;
        };
        matched = true;
        debug!(%class, token = token.text(), "resolving token");
        resolve_within_class(pattern, &token, &mut urls)?;
    }

    if !matched {
        urls.push(pattern.to_string());
    }
    Ok(urls)
}

/// Substitutes every value of `token`, then keeps resolving tokens of the
/// same class in each candidate until none is left.
fn resolve_within_class(
    input: &str,
    token: &RangeToken,
    urls: &mut Vec<String>,
) -> Result<(), PatternError> {
    for value in token.values()? {
        let candidate = token.substitute(input, &value);
        match RangeToken::find(&candidate, token.class()) {
            Some(next) => resolve_within_class(&candidate, &next, urls)?,
            None => {
                trace!(url = %candidate, "candidate emitted");
                urls.push(candidate);
            }
        }
    }
    Ok(())
}

fn resolve_leftmost(input: &str, urls: &mut Vec<String>) -> Result<(), PatternError> {
    let Some(token) = RangeToken::find_leftmost(input) else {
        trace!(url = %input, "candidate emitted");
        urls.push(input.to_string());
        return Ok(());
    };
    for value in token.values()? {
        resolve_leftmost(&token.substitute(input, &value), urls)?;
    }
    Ok(())
}
