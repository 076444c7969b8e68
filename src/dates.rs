//! Date parsing and sanitization.
//!
//! Source metadata dates are scraped and occasionally corrupted; anything
//! unparsable or outside the plausible news range degrades to an absent
//! date instead of failing the run.
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

/// Plausible year range for news source dates.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1990;
pub const MAX_PLAUSIBLE_YEAR: i32 = 2025;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\d{4}").unwrap();
}

/// Parse a source date string.
///
/// Accepts ISO dates and ISO datetimes with a space or `T` separator.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Keep only plausible dates, mapping everything else to `None`.
pub fn sanitize(date: Option<NaiveDate>) -> Option<NaiveDate> {
    date.filter(|d| (MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&d.year()))
}

/// Extract the declared year from a corpus name, e.g. `eng_news_2019` -> 2019.
pub fn corpus_year(corpus_name: &str) -> Option<i32> {
    YEAR.find(corpus_name)
        .and_then(|m| m.as_str().parse().ok())
}
