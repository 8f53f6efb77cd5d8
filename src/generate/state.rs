//! Generation cursor

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Mode, Specification};

/// Position of an enumeration run.
///
/// Always describes the next candidate to be produced, so a run stopped by
/// its [`StopSignal`](super::StopSignal) leaves the exact resume point here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationState {
    /// Length of the next candidate
    pub length: usize,
    /// Charset index per counted position, most significant first.
    /// Range mode counts every position, pattern mode only the wildcards.
    pub digits: Vec<usize>,
    /// No candidates remain
    pub exhausted: bool,
}

impl GenerationState {
    /// Cursor on the first candidate of `spec`
    pub fn initial(spec: &Specification) -> Self {
        match spec.mode() {
            Mode::Range(lengths) => Self {
                length: lengths.min(),
                digits: vec![0; lengths.min()],
                exhausted: false,
            },
            Mode::Pattern(pattern) => Self {
                length: pattern.len(),
                digits: vec![0; pattern.wildcard_count()],
                exhausted: false,
            },
        }
    }

    /// Mixed-radix increment, rightmost digit first.
    ///
    /// Returns `true` when the carry ran out of the most significant digit,
    /// leaving every digit at zero. An odometer without digits always carries.
    pub(crate) fn increment(&mut self, base: usize) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < base {
                return false;
            }
            *digit = 0;
        }
        true
    }

    /// Move to the first candidate of the next length
    pub(crate) fn grow(&mut self) {
        self.length += 1;
        self.digits.clear();
        self.digits.resize(self.length, 0);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
