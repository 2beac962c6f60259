//! # HN Top Ten
//!
//! A Hacker News front page scraper that fetches the site's front page,
//! extracts the top ten story titles, links, and scores, and prints a
//! numbered Markdown report to standard output.
//!
//! ## Usage
//!
//! ```sh
//! hn_top_ten
//! ```
//!
//! ## Architecture
//!
//! The application is a single-pass pipeline, executed once per invocation:
//! 1. **Fetching**: Download the front page HTML with one blocking GET
//! 2. **Extraction**: Parse the HTML and pair story anchors with score spans
//! 3. **Output**: Render the extracted stories as a Markdown report
//!
//! The report is the only thing written to stdout; all diagnostics go to
//! stderr so the two streams can be redirected independently.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;

use cli::Cli;
use outputs::markdown;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("hn_top_ten starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Fetch and extract stories ----
    let body = scrapers::hackernews::fetch_front_page()?;
    let stories = scrapers::hackernews::extract_stories(&body)?;
    info!(count = stories.len(), "Stories ready for the report");

    // ---- Markdown output ----
    let report = markdown::report_to_markdown(&stories);
    print!("{report}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
