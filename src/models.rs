//! Data models for extracted front page stories.

/// One story extracted from the Hacker News front page.
///
/// Stories are created by the extractor in page order and consumed once by
/// the Markdown reporter. A story has no identity beyond its list position
/// and is never mutated after creation.
///
/// # Fields
///
/// * `title` - The story headline text
/// * `link` - The absolute story URL
/// * `score` - The raw score label as found on the page, e.g. `"312 points"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// The story headline text.
    pub title: String,
    /// The absolute story URL.
    pub link: String,
    /// The raw score label as found on the page.
    pub score: String,
}
