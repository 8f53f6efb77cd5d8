//! Wordlist generation engine
//!
//! Size estimation, lazy candidate enumeration and the run driver that
//! streams candidates into a sink.

mod enumerator;
mod estimate;
mod runner;
mod signal;
mod state;

pub use enumerator::Candidates;
pub use estimate::{estimate, format_count, Estimate};
pub use runner::{Progress, RunOutcome, RunReport, WordlistRunner};
pub use signal::StopSignal;
pub use state::GenerationState;

use crate::types::CharSet;

/// Predefined character groups selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetPreset {
    /// Lowercase letters (a-z)
    Lower,
    /// Uppercase letters (A-Z)
    Upper,
    /// Digits (0-9)
    Digits,
    /// Common symbols
    Symbols,
}

impl CharsetPreset {
    pub fn symbols(&self) -> &'static str {
        match self {
            CharsetPreset::Lower => "abcdefghijklmnopqrstuvwxyz",
            CharsetPreset::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharsetPreset::Digits => "0123456789",
            CharsetPreset::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }
}

/// Merge a custom charset with presets into a sorted, duplicate-free charset
pub fn resolve_charset(custom: Option<&str>, presets: &[CharsetPreset]) -> CharSet {
    let mut symbols: Vec<char> = custom
        .into_iter()
        .chain(presets.iter().map(|preset| preset.symbols()))
        .flat_map(str::chars)
        .collect();
    symbols.sort_unstable();
    symbols.dedup();
    symbols.into_iter().collect()
}
