//! Sentence row types.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::Period;

/// One joined row of a raw corpus: a sentence with its source metadata.
///
/// `source_id`, `url` and `date` are absent when the metadata files are
/// missing or the source-side join found no match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub source_id: Option<String>,
    pub sentence_id: String,
    pub sentence: String,
    pub url: Option<String>,
    pub date: Option<NaiveDate>,
}

/// One row of the cleaned output tables.
///
/// Serializes to the five-column output schema; absent years and dates
/// become empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRow {
    pub language: String,
    pub year: Option<i32>,
    pub period: Period,
    pub date: Option<NaiveDate>,
    pub sentence: String,
}
