//! Hacker News front page scraper.
//!
//! Scrapes the [Hacker News](https://news.ycombinator.com/) front page by
//! selecting the story title anchors (`span.titleline > a`) and the score
//! spans (`span.score`) from the fetched HTML.
//!
//! # Title/score pairing
//!
//! Titles and scores are paired positionally: the extractor walks the title
//! anchors in document order and consumes score spans from a single cursor
//! over the whole score list. The two lists are never re-anchored by shared
//! DOM ancestry, so a story row without a score span (a job posting, for
//! example) shifts every later pairing. Known fragility of the site markup
//! assumptions, kept as observed behavior.

use crate::error::ScrapeError;
use crate::models::Story;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Root URL of the site. Doubles as the prefix for relative story links.
pub const BASE_URL: &str = "https://news.ycombinator.com/";

/// At most this many title anchors are examined, in document order.
pub const STORY_CAP: usize = 10;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.titleline > a").unwrap());
static SCORE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("span.score").unwrap());

/// Fetch the Hacker News front page.
///
/// Performs one blocking GET against [`BASE_URL`] and returns the response
/// body. There is no retry: a network failure or a non-success status comes
/// back as [`ScrapeError::Request`] and ends the run.
#[instrument(level = "info")]
pub fn fetch_front_page() -> Result<String, ScrapeError> {
    fetch_page(BASE_URL)
}

fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    info!(bytes = body.len(), url, "Fetched front page");
    Ok(body)
}

/// Extract up to [`STORY_CAP`] stories from front page HTML.
///
/// The HTML is parsed leniently; malformed markup never fails the parse, it
/// just matches fewer elements. Titles beyond the number of available score
/// spans are dropped rather than reported with a placeholder score, so the
/// result holds `min(STORY_CAP, titles, scores)` stories.
///
/// # Errors
///
/// Returns [`ScrapeError::MissingHref`] if a selected title anchor has no
/// `href` attribute.
#[instrument(level = "info", skip_all)]
pub fn extract_stories(html: &str) -> Result<Vec<Story>, ScrapeError> {
    let document = Html::parse_document(html);
    let titles: Vec<_> = document.select(&TITLE_SELECTOR).collect();
    let scores: Vec<_> = document.select(&SCORE_SELECTOR).collect();
    debug!(
        titles = titles.len(),
        scores = scores.len(),
        "Matched front page elements"
    );

    let mut stories = Vec::new();
    let mut score_index = 0;
    for (position, title) in titles.iter().take(STORY_CAP).enumerate() {
        if score_index >= scores.len() {
            // Out of score spans; the remaining titles are dropped.
            break;
        }
        let score = scores[score_index].text().collect::<String>();
        score_index += 1;

        let href = title
            .value()
            .attr("href")
            .ok_or(ScrapeError::MissingHref { position })?;
        let story = Story {
            title: title.text().collect::<String>(),
            link: resolve_link(href),
            score,
        };
        debug!(position, title = %story.title, "Extracted story");
        stories.push(story);
    }

    info!(count = stories.len(), "Extracted front page stories");
    Ok(stories)
}

/// Resolve a story href to an absolute URL.
///
/// Hrefs that already start with an HTTP scheme pass through unchanged;
/// anything else is treated as site-relative and prefixed with [`BASE_URL`].
fn resolve_link(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{BASE_URL}{href}")
    }
}
