//! Command-line interface definitions for HN Top Ten.
//!
//! This module defines the CLI surface using the `clap` crate. The scraper
//! takes no arguments: the target URL, the story cap, and the output format
//! are all fixed. `clap` still provides `--help` and `--version`.

use clap::Parser;

/// Command-line arguments for the HN Top Ten application.
///
/// The scraper is deliberately argument-free. Invoking the binary fetches
/// the Hacker News front page once and prints the report to stdout.
///
/// # Examples
///
/// ```sh
/// hn_top_ten
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {}
