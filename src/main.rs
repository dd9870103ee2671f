//! cookieget - session cookie randomness checker
//!
//! Requests a URL repeatedly and reports how random each cookie looks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cookieget::{
    init_tracing, reference_timestamp, render_report, verbosity_filter, AnalysisReport,
    CookieFetcher, Credentials, PayloadEncoding, RenderOptions, SampleError, SamplerConfig,
};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "cookieget")]
#[command(
    author,
    version,
    about = "Sample session cookies from a server and estimate how random they look"
)]
#[command(long_about = "
cookieget requests a URL over and over, collects every cookie the server
sets, and for each cookie shows the characters shared by all values, a
possible embedded UNIX timestamp, the mean Levenshtein distance between
values and a rough randomness percentage.

EXAMPLES:
    cookieget example.com                         # 10 GET requests
    cookieget https://example.com/ 50             # 50 GET requests
    cookieget example.com/login 20 -d 'user=a&pass=b'
    cookieget example.com/api/login -d 'user=a' -e json
    cookieget --json example.com                  # JSON output for tooling
")]
struct Cli {
    /// Target URL (http:// is assumed when no scheme is given)
    #[arg(required = true)]
    target: String,

    /// Number of requests to send [default: $COOKIEGET_COUNT or 10]
    count: Option<usize>,

    /// Login payload as key=value&key=value; requests become POSTs
    #[arg(short = 'd', long)]
    data: Option<String>,

    /// Encoding of the login payload
    #[arg(short = 'e', long, value_enum, default_value_t = Encoding::Form)]
    encoding: Encoding,

    /// Requests in flight at once [default: $COOKIEGET_CONCURRENCY or 1]
    #[arg(short = 'c', long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds [default: $COOKIEGET_TIMEOUT_SECS or 30]
    #[arg(long)]
    timeout: Option<u64>,

    /// Report a timestamp only if more digits than this match [default: 7]
    #[arg(long)]
    threshold: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Encoding {
    Form,
    Json,
}

impl From<Encoding> for PayloadEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Form => PayloadEncoding::Form,
            Encoding::Json => PayloadEncoding::Json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&verbosity_filter(cli.verbose));
    let stderr_color = !cli.no_color && io::stderr().is_terminal();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err, stderr_color));
            ExitCode::FAILURE
        }
    }
}

/// The line printed on stderr when a run fails.
fn failure_message(err: &anyhow::Error, color: bool) -> String {
    let red = |text: &str| {
        if color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    };

    if matches!(err.downcast_ref::<SampleError>(), Some(SampleError::NoSamples)) {
        red("Returned 0 cookies.")
    } else {
        format!("{} {err:#}", red("error:"))
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = SamplerConfig::from_env();
    if let Some(count) = cli.count {
        config = config.with_count(count);
    }
    if let Some(concurrency) = cli.concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(threshold) = cli.threshold {
        config = config.with_timestamp_threshold(threshold);
    }

    let credentials = cli
        .data
        .as_deref()
        .map(|payload| Credentials::parse(payload, cli.encoding.into()))
        .transpose()
        .context("invalid login payload")?;

    let color = !cli.no_color && io::stdout().is_terminal();
    let stderr_tty = io::stderr().is_terminal();

    // Taken before the first request so an embedded issue time can match it.
    let now = reference_timestamp();

    if !cli.json {
        if !cli.no_color && stderr_tty {
            eprintln!(
                "Checking for {}, {} cookies.",
                cli.target.green(),
                config.count.green()
            );
        } else {
            eprintln!("Checking for {}, {} cookies.", cli.target, config.count);
        }
    }

    let fetcher = CookieFetcher::new(&config)?.with_progress(!cli.json && stderr_tty);
    let fetches = fetcher
        .fetch_samples(&cli.target, config.count, credentials.as_ref())
        .await?;
    let report = AnalysisReport::from_fetches(fetches, &now)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let options = RenderOptions {
            color,
            timestamp_threshold: config.timestamp_threshold,
        };
        println!("{}", render_report(&report, &options));
    }

    Ok(())
}
