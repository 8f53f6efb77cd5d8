//! Integration tests for wordlist-forge

use std::io::{BufRead, BufReader};

use wordlist_forge::{
    estimate,
    error::WordlistError,
    generate::{resolve_charset, CharsetPreset},
    CharSet, Estimate, LengthRange, LineSink, Pattern, RunConfig, RunOutcome, Specification,
    StopSignal, WordSink, WordlistRunner,
};

fn range_spec(charset: &str, min: usize, max: usize) -> Specification {
    Specification::range(CharSet::new(charset), LengthRange::new(min, max).unwrap()).unwrap()
}

fn pattern_spec(pattern: &str, charset: &str) -> Specification {
    Specification::pattern(Pattern::parse(pattern, '?').unwrap(), CharSet::new(charset)).unwrap()
}

#[test]
fn test_documented_orderings() {
    let words: Vec<String> = range_spec("ab", 2, 2).candidates().collect();
    assert_eq!(words, ["aa", "ab", "ba", "bb"]);

    let words: Vec<String> = range_spec("ab", 1, 2).candidates().collect();
    assert_eq!(words, ["a", "b", "aa", "ab", "ba", "bb"]);

    let words: Vec<String> = pattern_spec("a?c", "12").candidates().collect();
    assert_eq!(words, ["a1c", "a2c"]);

    let words: Vec<String> = pattern_spec("abc", "xyz").candidates().collect();
    assert_eq!(words, ["abc"]);
}

#[test]
fn test_invalid_specifications_rejected_up_front() {
    assert!(matches!(
        LengthRange::new(3, 1),
        Err(WordlistError::InvalidSpecification { .. })
    ));

    let lengths = LengthRange::new(1, 3).unwrap();
    assert!(matches!(
        Specification::range(CharSet::empty(), lengths),
        Err(WordlistError::InvalidSpecification { .. })
    ));

    assert!(matches!(
        Pattern::parse("", '?'),
        Err(WordlistError::InvalidSpecification { .. })
    ));
}

#[test]
fn test_estimate_matches_enumeration() {
    let charset = resolve_charset(Some("xy"), &[CharsetPreset::Digits]);
    let spec = Specification::range(charset, LengthRange::new(1, 3).unwrap()).unwrap();

    let expected: u64 = (1..=3).map(|l| 12u64.pow(l)).sum();
    assert_eq!(estimate(&spec), Estimate::Exact(expected));
    assert_eq!(spec.candidates().count() as u64, expected);
}

#[test]
fn test_lowercase_four_letter_estimate() {
    let spec = Specification::range(
        resolve_charset(None, &[CharsetPreset::Lower]),
        LengthRange::fixed(4).unwrap(),
    )
    .unwrap();
    assert_eq!(estimate(&spec).exact().unwrap(), 456_976);
}

#[test]
fn test_huge_space_is_still_lazy() {
    let spec = Specification::range(
        resolve_charset(None, &[CharsetPreset::Lower, CharsetPreset::Upper]),
        LengthRange::new(1, 20).unwrap(),
    )
    .unwrap();
    assert_eq!(estimate(&spec), Estimate::TooLarge);

    let head: Vec<String> = spec.candidates().take(3).collect();
    assert_eq!(head, ["A", "B", "C"]);
}

#[test]
fn test_runner_writes_newline_delimited_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");

    let runner = WordlistRunner::new(pattern_spec("pass??", "12"), RunConfig::default());
    let mut sink = LineSink::create(&path).unwrap();
    let report = runner.run(&mut sink, |_| {}).unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.produced, 4);
    assert_eq!(sink.bytes(), 4 * 7);

    let lines: Vec<String> = BufReader::new(std::fs::File::open(&path).unwrap())
        .lines()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, ["pass11", "pass12", "pass21", "pass22"]);
}

#[test]
fn test_cancel_from_another_thread() {
    struct Slow(Vec<String>);

    impl WordSink for Slow {
        fn write_word(&mut self, word: &str) -> std::io::Result<()> {
            self.0.push(word.to_string());
            std::thread::sleep(std::time::Duration::from_millis(1));
            Ok(())
        }
    }

    let stop = StopSignal::new();
    let runner = WordlistRunner::new(range_spec("abcdefghij", 1, 6), RunConfig::default())
        .with_stop_signal(stop.clone());

    let handle = std::thread::spawn(move || {
        let mut sink = Slow(Vec::new());
        let report = runner.run(&mut sink, |_| {}).unwrap();
        (report, sink.0)
    });

    std::thread::sleep(std::time::Duration::from_millis(50));
    stop.raise();
    let (report, words) = handle.join().unwrap();

    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(report.produced, words.len() as u64);
    assert!(report.produced < estimate(&range_spec("abcdefghij", 1, 6)).exact().unwrap());
}

#[test]
fn test_progress_reports_estimated_total() {
    let config = RunConfig {
        progress_interval: 10,
        ..Default::default()
    };
    let runner = WordlistRunner::new(range_spec("0123456789", 2, 2), config);

    let mut calls = Vec::new();
    let mut sink: Vec<String> = Vec::new();
    runner
        .run(&mut sink, |p| calls.push((p.produced, p.estimated_total)))
        .unwrap();

    assert_eq!(calls.len(), 10);
    assert_eq!(calls.first(), Some(&(10, Some(100))));
    assert_eq!(calls.last(), Some(&(100, Some(100))));
}

#[test]
fn test_error_messages() {
    let error = WordlistError::invalid_spec("min-length cannot be greater than max-length");
    assert!(error.to_string().contains("min-length"));
    assert!(error.user_message().contains("💡"));

    let error = WordlistError::config("config error");
    assert!(error.to_string().contains("config error"));
}

#[test]
fn test_library_initialization() {
    assert!(wordlist_forge::init().is_ok());
}
