use anyhow::Context;
use clap::Parser;
use gimmef::cli::Cli;
use gimmef::output::Output;
use gimmef::runner::{scan_all, Mode, ScanResult};
use gimmef_scan::Pattern;
use std::io::BufRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let pattern = Pattern::compile(&cli.format)
        .with_context(|| format!("parsing format '{}'", cli.format))?;

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        eprintln!("No input to scan");
        std::process::exit(1);
    }

    let mode = if cli.check { Mode::Check } else { Mode::Values };
    tracing::debug!(
        verbs = pattern.verb_count(),
        inputs = inputs.len(),
        ?mode,
        sequential = cli.sequential,
        "scanning inputs"
    );
    let results = scan_all(&pattern, &inputs, mode, cli.sequential);

    for result in &results {
        output.print_result(result, cli.json);
    }
    output.print_summary(&results);

    let all_passed = results.iter().all(ScanResult::passed);
    std::process::exit(if all_passed { 0 } else { 1 });
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "gimmef=debug,gimmef_scan=debug",
        _ => "gimmef=trace,gimmef_scan=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .context("reading inputs from stdin")
}
