//! Lazy candidate enumeration

use super::signal::StopSignal;
use super::state::GenerationState;
use crate::types::{Mode, PatternToken, Specification};

/// Ordered, finite stream of the candidates of a [`Specification`].
///
/// Candidates come out in charset order as a fixed-width odometer, shorter
/// lengths first. Only the cursor is kept in memory. Creating a new stream
/// from the same specification replays the same sequence.
pub struct Candidates<'a> {
    spec: &'a Specification,
    state: GenerationState,
    produced: u64,
    stop: Option<StopSignal>,
    cancelled: bool,
}

impl<'a> Candidates<'a> {
    pub fn new(spec: &'a Specification) -> Self {
        Self {
            spec,
            state: GenerationState::initial(spec),
            produced: 0,
            stop: None,
            cancelled: false,
        }
    }

    /// Stop producing once `stop` is raised
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Candidates handed out so far
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Cursor on the next candidate
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Whether the stream ended because the stop signal was raised
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.exhausted
    }

    /// Pull up to `count` candidates
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        self.by_ref().take(count).collect()
    }

    fn render(&self) -> String {
        let symbols = self.spec.charset().symbols();
        match self.spec.mode() {
            Mode::Range(_) => self.state.digits.iter().map(|&d| symbols[d]).collect(),
            Mode::Pattern(pattern) => {
                let mut wildcards = self.state.digits.iter();
                pattern
                    .tokens()
                    .iter()
                    .filter_map(|token| match token {
                        PatternToken::Literal(c) => Some(*c),
                        PatternToken::Wildcard => wildcards.next().map(|&d| symbols[d]),
                    })
                    .collect()
            }
        }
    }

    fn advance(&mut self) {
        let base = self.spec.charset().len();
        if !self.state.increment(base) {
            return;
        }

        match self.spec.mode() {
            Mode::Range(lengths) if self.state.length < lengths.max() => self.state.grow(),
            _ => self.state.exhausted = true,
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }
        if self.stop.as_ref().is_some_and(StopSignal::is_raised) {
            self.cancelled = true;
            return None;
        }

        let word = self.render();
        self.produced += 1;
        self.advance();
        Some(word)
    }
}

impl Specification {
    /// Fresh candidate stream starting at the first word
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self)
    }
}
