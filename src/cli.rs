//! Command line interface definition and input resolution

use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, WordlistError};
use crate::generate::{resolve_charset, CharsetPreset};
use crate::types::{LengthRange, Pattern, RunConfig, Specification};

const EXAMPLES: &str = "\
Examples:
  # All 3-character combinations of lowercase letters
  wordlist-forge -c abcdefghijklmnopqrstuvwxyz -l 3 -o wordlist.txt

  # Words from 2 to 4 characters using a custom charset
  wordlist-forge -c abc123 -m 2 -M 4 -o custom.txt

  # Pattern with ? as wildcard
  wordlist-forge -p \"pass???\" -c 123 -o patterns.txt

  # Show progress and estimate size
  wordlist-forge -c abc123 -m 1 -M 3 -o test.txt -v";

/// Generate custom wordlists for security testing, passwords, or other purposes
#[derive(Parser, Debug)]
#[command(name = "wordlist-forge", author, version, about, after_help = EXAMPLES)]
pub struct Cli {
    /// Custom character set (e.g. "abc123")
    #[arg(short = 'c', long, help_heading = "Character Set Options")]
    pub charset: Option<String>,

    /// Pattern with ? as wildcard (e.g. "pass???")
    #[arg(short = 'p', long, help_heading = "Character Set Options")]
    pub pattern: Option<String>,

    /// Include lowercase letters (a-z)
    #[arg(long, help_heading = "Character Set Options")]
    pub lower: bool,

    /// Include uppercase letters (A-Z)
    #[arg(long, help_heading = "Character Set Options")]
    pub upper: bool,

    /// Include digits (0-9)
    #[arg(long, help_heading = "Character Set Options")]
    pub digits: bool,

    /// Include common symbols (!@#$%^&* etc.)
    #[arg(long, help_heading = "Character Set Options")]
    pub symbols: bool,

    /// Fixed length for all words
    #[arg(
        short = 'l',
        long,
        conflicts_with_all = ["min_length", "max_length"],
        help_heading = "Length Options"
    )]
    pub length: Option<usize>,

    /// Minimum word length
    #[arg(short = 'm', long, default_value_t = 1, help_heading = "Length Options")]
    pub min_length: usize,

    /// Maximum word length
    #[arg(short = 'M', long, default_value_t = 4, help_heading = "Length Options")]
    pub max_length: usize,

    /// Output file path
    #[arg(short = 'o', long, help_heading = "Output Options")]
    pub output: PathBuf,

    /// Show progress and statistics
    #[arg(short = 'v', long, help_heading = "Output Options")]
    pub verbose: bool,

    /// Do not ask for confirmation on large wordlists
    #[arg(short = 'y', long, help_heading = "Output Options")]
    pub yes: bool,

    /// Report progress every N words (overrides WORDLIST_PROGRESS_INTERVAL)
    #[arg(long, value_name = "N", help_heading = "Output Options")]
    pub progress_every: Option<u64>,
}

impl Cli {
    /// Selected predefined character groups
    pub fn presets(&self) -> Vec<CharsetPreset> {
        [
            (self.lower, CharsetPreset::Lower),
            (self.upper, CharsetPreset::Upper),
            (self.digits, CharsetPreset::Digits),
            (self.symbols, CharsetPreset::Symbols),
        ]
        .into_iter()
        .filter_map(|(on, preset)| on.then_some(preset))
        .collect()
    }

    /// Apply command line overrides on top of `base`
    pub fn run_config(&self, base: RunConfig) -> RunConfig {
        RunConfig {
            progress_interval: self.progress_every.unwrap_or(base.progress_interval),
            ..base
        }
    }

    /// Whether a progress bar should be drawn; it never moves without callbacks
    pub fn shows_progress(&self, config: &RunConfig) -> bool {
        self.verbose && config.progress_interval > 0
    }

    /// Resolve the arguments into a validated specification
    pub fn specification(&self, config: &RunConfig) -> Result<Specification> {
        let presets = self.presets();
        if self.charset.is_none() && self.pattern.is_none() && presets.is_empty() {
            return Err(WordlistError::cli(
                "You must specify a character set or pattern",
            ));
        }

        let charset = resolve_charset(self.charset.as_deref(), &presets);

        if let Some(source) = &self.pattern {
            let pattern = Pattern::parse(source, config.wildcard)?;
            return Specification::pattern(pattern, charset);
        }

        let lengths = match self.length {
            Some(length) => LengthRange::fixed(length)?,
            None => LengthRange::new(self.min_length, self.max_length)?,
        };
        Specification::range(charset, lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordlist-forge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-c", "ab", "-o", "out.txt"]);
        assert_eq!(cli.min_length, 1);
        assert_eq!(cli.max_length, 4);
        assert!(!cli.verbose);

        let spec = cli.specification(&RunConfig::default()).unwrap();
        match spec.mode() {
            Mode::Range(lengths) => assert_eq!((lengths.min(), lengths.max()), (1, 4)),
            other => panic!("unexpected mode: {other:?}"),
        }
    }

    #[test]
    fn test_fixed_length() {
        let cli = parse(&["--digits", "-l", "3", "-o", "out.txt"]);
        let spec = cli.specification(&RunConfig::default()).unwrap();
        assert_eq!(spec.charset().len(), 10);
        assert_eq!(spec.mode(), &Mode::Range(LengthRange::fixed(3).unwrap()));
    }

    #[test]
    fn test_length_conflicts_with_range() {
        let args = ["wordlist-forge", "-c", "ab", "-l", "3", "-m", "2", "-o", "out.txt"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_output_required() {
        assert!(Cli::try_parse_from(["wordlist-forge", "-c", "ab"]).is_err());
    }

    #[test]
    fn test_missing_charset_and_pattern() {
        let cli = parse(&["-o", "out.txt"]);
        let err = cli.specification(&RunConfig::default()).unwrap_err();
        assert!(matches!(err, WordlistError::Cli { .. }));
    }

    #[test]
    fn test_min_greater_than_max() {
        let cli = parse(&["-c", "ab", "-m", "3", "-M", "1", "-o", "out.txt"]);
        let err = cli.specification(&RunConfig::default()).unwrap_err();
        assert!(matches!(err, WordlistError::InvalidSpecification { .. }));
    }

    #[test]
    fn test_zero_min_length() {
        let cli = parse(&["-c", "ab", "-m", "0", "-o", "out.txt"]);
        assert!(cli.specification(&RunConfig::default()).is_err());
    }

    #[test]
    fn test_pattern_with_presets() {
        let cli = parse(&["-p", "pass??", "--digits", "-o", "out.txt"]);
        let spec = cli.specification(&RunConfig::default()).unwrap();
        assert!(matches!(spec.mode(), Mode::Pattern(p) if p.wildcard_count() == 2));
    }

    #[test]
    fn test_literal_pattern_without_charset() {
        let cli = parse(&["-p", "abc", "-o", "out.txt"]);
        assert!(cli.specification(&RunConfig::default()).is_ok());
    }

    #[test]
    fn test_custom_wildcard_from_config() {
        let cli = parse(&["-p", "a*?", "-c", "xy", "-o", "out.txt"]);
        let config = RunConfig {
            wildcard: '*',
            ..Default::default()
        };
        let spec = cli.specification(&config).unwrap();
        assert!(matches!(spec.mode(), Mode::Pattern(p) if p.wildcard_count() == 1));
    }

    #[test]
    fn test_no_progress_bar_when_interval_is_zero() {
        let cli = parse(&["-c", "ab", "-v", "--progress-every", "0", "-o", "out.txt"]);
        assert!(!cli.shows_progress(&cli.run_config(RunConfig::default())));

        let cli = parse(&["-c", "ab", "-v", "-o", "out.txt"]);
        assert!(cli.shows_progress(&cli.run_config(RunConfig::default())));

        let cli = parse(&["-c", "ab", "-o", "out.txt"]);
        assert!(!cli.shows_progress(&cli.run_config(RunConfig::default())));
    }

    #[test]
    fn test_progress_override() {
        let cli = parse(&["-c", "ab", "--progress-every", "7", "-o", "out.txt"]);
        assert_eq!(cli.run_config(RunConfig::default()).progress_interval, 7);

        let cli = parse(&["-c", "ab", "-o", "out.txt"]);
        assert_eq!(cli.run_config(RunConfig::default()).progress_interval, 10_000);
    }
}
