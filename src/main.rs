use std::process::ExitCode;

use clap::Parser;

use freshdoc::checkout::GitCli;
use freshdoc::config::{DEFAULT_WORKERS, RawOptions, RunOptions};
use freshdoc::error::Error;
use freshdoc::links::HttpProber;
use freshdoc::run;

#[derive(Parser)]
#[command(
    name = "freshdoc",
    about = "Audit documentation freshness across git repositories"
)]
struct Cli {
    /// Repository URL to check (repeatable)
    #[arg(long = "repo", required = true)]
    repos: Vec<String>,

    /// Branch to check on every repository (repeatable; defaults to main, master, develop)
    #[arg(long = "branch")]
    branches: Vec<String>,

    /// File extension to scan (repeatable; defaults to md, txt)
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Glob pattern for files to skip (repeatable)
    #[arg(long = "exclude")]
    excluded: Vec<String>,

    /// Skip hyperlink liveness probing
    #[arg(long)]
    no_links: bool,

    /// Include verbose per-repository diagnostics in the report
    #[arg(long, short)]
    verbose: bool,

    /// Disable TLS certificate verification for clones and probes
    #[arg(long)]
    insecure: bool,

    /// Worker pool width
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    return match execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    };
}

/// Validate options, run the audit, print the report.
///
/// Exit codes: 0 when the audit passes, 1 when it fails, 2 (via `main`)
/// for configuration errors that reject the run up front.
fn execute(cli: &Cli) -> Result<ExitCode, Error> {
    let options = RunOptions::build(RawOptions {
        branches: cli.branches.clone(),
        check_links: !cli.no_links,
        excluded: cli.excluded.clone(),
        extensions: cli.extensions.clone(),
        repos: cli.repos.clone(),
        ssl_verify: !cli.insecure,
        verbose: cli.verbose,
        workers: cli.workers,
    })?;

    let prober = HttpProber::new(options.ssl_verify)?;
    let report = run::check_repositories(&options, &GitCli, &prober);

    if cli.format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: could not serialize report: {e}");
                return Ok(ExitCode::from(2));
            }
        }
    } else {
        for line in &report.lines {
            println!("{line}");
        }
    }

    if report.ok {
        return Ok(ExitCode::SUCCESS);
    }
    return Ok(ExitCode::from(1));
}
