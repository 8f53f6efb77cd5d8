//! Run driver - streams candidates into a sink

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::estimate::{estimate, Estimate};
use super::signal::StopSignal;
use super::state::GenerationState;
use crate::error::{Result, WordlistError};
use crate::sink::WordSink;
use crate::types::{Mode, RunConfig, Specification};

/// Progress snapshot handed to the progress callback
#[derive(Debug, Clone)]
pub struct Progress {
    pub produced: u64,
    pub estimated_total: Option<u64>,
    pub words_per_second: f64,
}

impl Progress {
    pub fn percent(&self) -> Option<f64> {
        self.estimated_total.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.produced as f64 / total as f64) * 100.0
            }
        })
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    /// Every candidate was written
    Completed,
    /// The stop signal was raised first
    Cancelled,
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Candidates written to the sink
    pub produced: u64,
    pub estimate: Estimate,
    /// Cursor on the first candidate that was not written
    pub state: GenerationState,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Drives one specification into a sink with progress and interruption
pub struct WordlistRunner {
    spec: Specification,
    config: RunConfig,
    stop: StopSignal,
}

impl WordlistRunner {
    pub fn new(spec: Specification, config: RunConfig) -> Self {
        Self {
            spec,
            config,
            stop: StopSignal::new(),
        }
    }

    /// Use an existing stop signal instead of a private one
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Handle that interrupts this runner when raised
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn spec(&self) -> &Specification {
        &self.spec
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn estimate(&self) -> Estimate {
        estimate(&self.spec)
    }

    /// Write every candidate to `sink`, calling `on_progress` every
    /// `progress_interval` words.
    ///
    /// Stops early, with [`RunOutcome::Cancelled`], when the stop signal is
    /// raised. A sink failure ends the run with [`WordlistError::Sink`].
    pub fn run<S, F>(&self, sink: &mut S, mut on_progress: F) -> Result<RunReport>
    where
        S: WordSink + ?Sized,
        F: FnMut(&Progress),
    {
        let estimate = self.estimate();
        let started_at = Utc::now();
        let start_time = Instant::now();
        let interval = self.config.progress_interval;

        tracing::debug!(
            mode = mode_name(&self.spec),
            charset_size = self.spec.charset().len(),
            estimate = %estimate,
            progress_interval = interval,
            "Starting wordlist generation"
        );

        let mut candidates = self.spec.candidates().with_stop_signal(self.stop.clone());

        while let Some(word) = candidates.next() {
            if let Err(e) = sink.write_word(&word) {
                let written = candidates.produced() - 1;
                tracing::warn!(error = %e, written, "Sink rejected word, stopping generation");
                return Err(WordlistError::sink(e.to_string(), written));
            }

            let produced = candidates.produced();
            if interval > 0 && produced % interval == 0 {
                let elapsed = start_time.elapsed().as_secs_f64();
                on_progress(&Progress {
                    produced,
                    estimated_total: estimate.count(),
                    words_per_second: if elapsed > 0.0 {
                        produced as f64 / elapsed
                    } else {
                        0.0
                    },
                });
            }
        }

        let produced = candidates.produced();
        sink.finish().map_err(|e| {
            tracing::warn!(error = %e, produced, "Failed to flush sink");
            WordlistError::sink(e.to_string(), produced)
        })?;

        let outcome = if candidates.is_cancelled() {
            tracing::info!(produced, "Generation interrupted");
            RunOutcome::Cancelled
        } else {
            RunOutcome::Completed
        };

        let elapsed = start_time.elapsed();
        tracing::debug!(
            produced,
            outcome = ?outcome,
            duration_ms = %elapsed.as_millis(),
            "Wordlist generation finished"
        );

        Ok(RunReport {
            outcome,
            produced,
            estimate,
            state: candidates.state().clone(),
            started_at,
            elapsed,
        })
    }
}

fn mode_name(spec: &Specification) -> &'static str {
    match spec.mode() {
        Mode::Range(_) => "range",
        Mode::Pattern(_) => "pattern",
    }
}
