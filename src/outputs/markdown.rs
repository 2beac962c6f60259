//! Markdown report generation.
//!
//! Renders the extracted stories as a numbered Markdown report:
//!
//! ```text
//! # Top 10 Hacker News Articles
//! 1. **Story title**
//!    - Score: 312 points
//!    - Link: https://example.com/story
//! ```
//!
//! Each entry is followed by a blank line. An empty story list renders as
//! the header line alone.

use crate::models::Story;
use std::fmt::Write;

/// Title line of the report.
pub const REPORT_HEADER: &str = "# Top 10 Hacker News Articles";

/// Render stories as a Markdown report.
///
/// Entries are numbered from 1 in the order the stories were extracted.
pub fn report_to_markdown(stories: &[Story]) -> String {
    let mut md = String::new();
    writeln!(md, "{REPORT_HEADER}").unwrap();

    for (i, story) in stories.iter().enumerate() {
        writeln!(md, "{}. **{}**", i + 1, story.title).unwrap();
        writeln!(md, "   - Score: {}", story.score).unwrap();
        writeln!(md, "   - Link: {}", story.link).unwrap();
        writeln!(md).unwrap();
    }

    md
}
