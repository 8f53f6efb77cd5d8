//! Wordlist Forge - deterministic wordlist generation
//!
//! Enumerates every word over a charset within a length range, or every
//! filling of a wildcard pattern, streaming them to a sink without ever
//! holding the list in memory.

pub mod cli;
pub mod error;
pub mod generate;
pub mod logging;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordlistError};
pub use generate::{
    estimate, Candidates, Estimate, GenerationState, Progress, RunOutcome, RunReport, StopSignal,
    WordlistRunner,
};
pub use sink::{LineSink, WordSink};
pub use types::{CharSet, LengthRange, Mode, Pattern, PatternToken, RunConfig, Specification};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
