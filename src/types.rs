//! Core types and structures for wordlist-forge

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, WordlistError};
use crate::{config_error, invalid_spec};

/// Default wildcard marker in patterns
pub const DEFAULT_WILDCARD: char = '?';

/// Ordered alphabet used for enumeration.
///
/// Symbol order is generation order. Symbols are expected to be distinct;
/// duplicates are not rejected here and would simply produce repeated words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSet(Vec<char>);

impl CharSet {
    pub fn new(symbols: &str) -> Self {
        Self(symbols.chars().collect())
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for CharSet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols)
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Inclusive range of word lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLengthRange")]
pub struct LengthRange {
    min: usize,
    max: usize,
}

#[derive(Deserialize)]
struct RawLengthRange {
    min: usize,
    max: usize,
}

impl TryFrom<RawLengthRange> for LengthRange {
    type Error = WordlistError;

    fn try_from(raw: RawLengthRange) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl LengthRange {
    /// Create a range, rejecting `min == 0` and `min > max`
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min < 1 {
            return Err(invalid_spec!("min-length must be at least 1"));
        }
        if min > max {
            return Err(invalid_spec!(
                "min-length ({}) cannot be greater than max-length ({})",
                min,
                max
            ));
        }
        Ok(Self { min, max })
    }

    /// Range covering a single length
    pub fn fixed(length: usize) -> Result<Self> {
        Self::new(length, length)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternToken {
    /// Kept verbatim in every candidate
    Literal(char),
    /// Filled from the charset
    Wildcard,
}

/// Fixed-length template of literals and wildcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPattern")]
pub struct Pattern {
    tokens: Vec<PatternToken>,
    wildcard: char,
}

#[derive(Deserialize)]
struct RawPattern {
    tokens: Vec<PatternToken>,
    wildcard: char,
}

impl TryFrom<RawPattern> for Pattern {
    type Error = WordlistError;

    fn try_from(raw: RawPattern) -> Result<Self> {
        if raw.tokens.is_empty() {
            return Err(invalid_spec!("pattern cannot be empty"));
        }
        Ok(Self {
            tokens: raw.tokens,
            wildcard: raw.wildcard,
        })
    }
}

impl Pattern {
    /// Parse a pattern, treating every `wildcard` char as a wildcard position.
    ///
    /// Literals are kept as-is even when they also appear in, or are missing
    /// from, the charset.
    pub fn parse(source: &str, wildcard: char) -> Result<Self> {
        if source.is_empty() {
            return Err(invalid_spec!("pattern cannot be empty"));
        }

        let tokens = source
            .chars()
            .map(|c| {
                if c == wildcard {
                    PatternToken::Wildcard
                } else {
                    PatternToken::Literal(c)
                }
            })
            .collect();

        Ok(Self { tokens, wildcard })
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of positions (the length of every produced word)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn wildcard_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PatternToken::Wildcard))
            .count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|t| match t {
            PatternToken::Literal(c) => write!(f, "{}", c),
            PatternToken::Wildcard => write!(f, "{}", self.wildcard),
        })
    }
}

/// What the charset is enumerated over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Every word of every length in the range
    Range(LengthRange),
    /// Every filling of the pattern's wildcards
    Pattern(Pattern),
}

/// Validated, immutable description of a wordlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    charset: CharSet,
    mode: Mode,
}

impl Specification {
    /// All words over `charset` with a length inside `lengths`
    pub fn range(charset: CharSet, lengths: LengthRange) -> Result<Self> {
        if charset.is_empty() {
            return Err(invalid_spec!("no characters specified for generation"));
        }
        Ok(Self {
            charset,
            mode: Mode::Range(lengths),
        })
    }

    /// All fillings of `pattern`, wildcards drawn from `charset`.
    ///
    /// The charset may be empty when the pattern has no wildcards.
    pub fn pattern(pattern: Pattern, charset: CharSet) -> Result<Self> {
        if pattern.is_empty() {
            return Err(invalid_spec!("pattern cannot be empty"));
        }
        if charset.is_empty() && pattern.wildcard_count() > 0 {
            return Err(invalid_spec!(
                "pattern '{}' has wildcards but no charset was given",
                pattern
            ));
        }
        Ok(Self {
            charset,
            mode: Mode::Pattern(pattern),
        })
    }

    pub fn charset(&self) -> &CharSet {
        &self.charset
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Invoke the progress callback every N words (0 disables it)
    pub progress_interval: u64,
    /// Estimated size above which callers should ask before generating
    pub warn_threshold: u64,
    /// Wildcard marker used when parsing patterns
    pub wildcard: char,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            progress_interval: 10_000,
            warn_threshold: 1_000_000,
            wildcard: DEFAULT_WILDCARD,
        }
    }
}

impl RunConfig {
    pub const PROGRESS_INTERVAL_VAR: &'static str = "WORDLIST_PROGRESS_INTERVAL";
    pub const WARN_THRESHOLD_VAR: &'static str = "WORDLIST_WARN_THRESHOLD";
    pub const WILDCARD_VAR: &'static str = "WORDLIST_WILDCARD";

    /// Defaults overlaid with `WORDLIST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::PROGRESS_INTERVAL_VAR) {
            config.progress_interval = parse_u64(Self::PROGRESS_INTERVAL_VAR, &raw)?;
        }
        if let Some(raw) = lookup(Self::WARN_THRESHOLD_VAR) {
            config.warn_threshold = parse_u64(Self::WARN_THRESHOLD_VAR, &raw)?;
        }
        if let Some(raw) = lookup(Self::WILDCARD_VAR) {
            let mut chars = raw.chars();
            config.wildcard = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(config_error!(
                        "{} must be a single character, got '{}'",
                        Self::WILDCARD_VAR,
                        raw
                    ))
                }
            };
        }

        Ok(config)
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim().replace('_', "").parse::<u64>().map_err(|e| {
        WordlistError::config(format!("{} must be a non-negative integer ('{}'): {}", key, raw, e))
    })
}
