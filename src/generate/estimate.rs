//! Candidate count estimation

use serde::Serialize;
use std::fmt;

use crate::error::{Result, WordlistError};
use crate::types::{Mode, Specification};

/// Total number of candidates a specification yields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    Exact(u64),
    /// The count does not fit in a u64
    TooLarge,
}

impl Estimate {
    pub fn count(&self) -> Option<u64> {
        match self {
            Estimate::Exact(n) => Some(*n),
            Estimate::TooLarge => None,
        }
    }

    /// Whether the estimate is above `threshold`; an unknowable count always is
    pub fn exceeds(&self, threshold: u64) -> bool {
        match self {
            Estimate::Exact(n) => *n > threshold,
            Estimate::TooLarge => true,
        }
    }

    /// The exact count, or an `Overflow` error
    pub fn exact(self) -> Result<u64> {
        self.count()
            .ok_or_else(|| WordlistError::overflow("candidate count too large to estimate"))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Exact(n) => write!(f, "{}", format_count(*n)),
            Estimate::TooLarge => write!(f, "too large to estimate"),
        }
    }
}

/// Count the candidates of `spec` without generating any
pub fn estimate(spec: &Specification) -> Estimate {
    let base = spec.charset().len() as u64;

    let total = match spec.mode() {
        Mode::Range(lengths) => range_total(base, lengths.min(), lengths.max()),
        Mode::Pattern(pattern) => checked_pow(base, pattern.wildcard_count()),
    };

    total.map_or(Estimate::TooLarge, Estimate::Exact)
}

fn range_total(base: u64, min: usize, max: usize) -> Option<u64> {
    // Every term is 1; avoid walking a huge range term by term.
    if base == 1 {
        return u64::try_from(max.checked_sub(min)?).ok()?.checked_add(1);
    }

    (min..=max).try_fold(0u64, |total, length| {
        total.checked_add(checked_pow(base, length)?)
    })
}

fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    base.checked_pow(u32::try_from(exp).ok()?)
}

/// Format with thousands separators, e.g. `1,000,000`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
