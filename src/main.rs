//! Wordlist Forge - generate custom wordlists from charsets and patterns

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use wordlist_forge::{
    cli::Cli,
    generate::format_count,
    types::{Mode, RunConfig},
    Estimate, LineSink, RunOutcome, WordlistError, WordlistRunner,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the library
    if let Err(e) = wordlist_forge::init() {
        eprintln!("{}", e.user_message());
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    wordlist_forge::logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "fatal error");
            match e.downcast_ref::<WordlistError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("❌ Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Resolve arguments, confirm large runs, then stream the wordlist to disk
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.run_config(RunConfig::from_env()?);
    let spec = cli.specification(&config)?;
    let runner = WordlistRunner::new(spec, config);
    let estimate = runner.estimate();

    if cli.verbose {
        print_plan(&runner, &estimate);

        if estimate.exceeds(runner.config().warn_threshold) {
            println!("Warning: Large wordlist generation may take time and disk space");
            if !cli.yes && !confirm_continue() {
                println!("Generation cancelled");
                return Ok(());
            }
        }
    }

    let mut sink = LineSink::create(&cli.output)?;

    // Ctrl-C raises the stop flag; the run ends after the current word.
    let stop = runner.stop_signal();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop.raise();
        }
    });

    let bar = cli
        .shows_progress(runner.config())
        .then(|| progress_bar(&estimate));
    let bar_handle = bar.clone();

    let (report, sink) = tokio::task::spawn_blocking(move || {
        let report = runner.run(&mut sink, |progress| {
            if let Some(bar) = &bar_handle {
                bar.set_position(progress.produced);
                if let Some(percent) = progress.percent() {
                    bar.set_message(format!("{:.1}%", percent));
                }
            }
        })?;
        Ok::<_, WordlistError>((report, sink))
    })
    .await
    .context("generation task panicked")??;

    interrupt.abort();
    if let Some(bar) = bar {
        bar.set_position(report.produced);
        bar.finish_and_clear();
    }

    match report.outcome {
        RunOutcome::Cancelled => {
            println!(
                "\nGeneration interrupted. Partial wordlist saved to {}",
                cli.output.display()
            );
            if cli.verbose {
                let cursor = report.state.to_json()?;
                tracing::info!(produced = report.produced, cursor = %cursor, "Resume point");
            }
        }
        RunOutcome::Completed => {
            if cli.verbose {
                println!("Successfully generated {} words", format_count(report.produced));
                println!(
                    "Wrote {} bytes in {} lines",
                    format_count(sink.bytes()),
                    format_count(sink.words())
                );
                println!("Saved to: {}", cli.output.display());
                println!("Elapsed: {:.2}s", report.elapsed.as_secs_f64());
            }
        }
    }

    Ok(())
}

/// Print what is about to be generated
fn print_plan(runner: &WordlistRunner, estimate: &Estimate) {
    let spec = runner.spec();
    match spec.mode() {
        Mode::Pattern(pattern) => {
            println!("Pattern: {}", pattern);
            println!("Charset: {}", spec.charset());
        }
        Mode::Range(lengths) => {
            println!("Charset: {}", spec.charset());
            println!("Charset size: {}", spec.charset().len());
            println!("Length range: {}", lengths);
        }
    }
    println!("Estimated combinations: {}", estimate);
}

/// Ask before a large run; anything but an explicit yes declines
fn confirm_continue() -> bool {
    match inquire::Confirm::new("Continue?")
        .with_default(false)
        .with_help_message("y/N")
        .prompt()
    {
        Ok(answer) => answer,
        Err(e) => {
            tracing::debug!(error = %e, "Confirmation prompt unavailable");
            false
        }
    }
}

fn progress_bar(estimate: &Estimate) -> ProgressBar {
    match estimate.count() {
        Some(total) => {
            let bar = ProgressBar::new(total);
            let style = ProgressStyle::with_template(
                "{spinner} [{elapsed_precise}] [{bar:40}] {human_pos}/{human_len} words {msg} ({per_sec})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style.progress_chars("=> "));
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            let style = ProgressStyle::with_template("{spinner} [{elapsed_precise}] {human_pos} words ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            bar.set_style(style);
            bar
        }
    }
}
