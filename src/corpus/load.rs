//! Corpus table loading and joining.
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::corpus::record::SentenceRecord;
use crate::dates;
use crate::error::Error;

const SENTENCES_SUFFIX: &str = "-sentences.txt";
const SOURCES_SUFFIX: &str = "-sources.txt";
const INV_SO_SUFFIX: &str = "-inv_so.txt";

/// Load a corpus from its sentences file, joining in source metadata.
///
/// Sibling `-sources.txt` and `-inv_so.txt` paths are derived from the
/// sentences file name. When both exist, rows follow the inverse index:
/// inv_so is left-joined to sources on source id, then to sentences on
/// sentence id; rows without a sentence are dropped, rows without a source
/// keep absent url/date. When either sibling is missing the corpus loads
/// as sentences only, with absent metadata on every row.
pub fn load(sentences_path: &Path) -> Result<Vec<SentenceRecord>, Error> {
    let base = sentences_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(SENTENCES_SUFFIX))
        .ok_or_else(|| {
            Error::Custom(format!(
                "not a sentences file: {}",
                sentences_path.display()
            ))
        })?;

    let sources_path = sibling(sentences_path, base, SOURCES_SUFFIX);
    let inv_so_path = sibling(sentences_path, base, INV_SO_SUFFIX);

    let sentences = read_sentences(sentences_path)?;

    if !sources_path.exists() || !inv_so_path.exists() {
        warn!(
            "missing metadata for {}: sources={}, inv_so={}. Proceeding without dates.",
            base,
            sources_path.exists(),
            inv_so_path.exists()
        );
        return Ok(sentences
            .into_iter()
            .map(|(sentence_id, sentence)| SentenceRecord {
                source_id: None,
                sentence_id,
                sentence,
                url: None,
                date: None,
            })
            .collect());
    }

    let sentences_by_id: HashMap<&str, &str> = sentences
        .iter()
        .map(|(id, text)| (id.as_str(), text.as_str()))
        .collect();
    let sources = read_sources(&sources_path)?;

    let mut records = Vec::new();
    for row in read_table(&inv_so_path)? {
        if row.len() != 2 {
            warn!(
                "{}: skipping malformed inverse-index row: {:?}",
                inv_so_path.display(),
                row
            );
            continue;
        }
        let source_id = &row[0];
        let sentence_id = &row[1];
        // no matching sentence: the row carries nothing to keep
        if let Some(sentence) = sentences_by_id.get(sentence_id) {
            let (url, date) = match sources.get(source_id) {
                Some((url, date)) => (url.clone(), *date),
                None => (None, None),
            };
            records.push(SentenceRecord {
                source_id: Some(source_id.to_string()),
                sentence_id: sentence_id.to_string(),
                sentence: sentence.to_string(),
                url,
                date,
            });
        }
    }

    debug!("{}: {} joined rows", base, records.len());
    Ok(records)
}

fn sibling(sentences_path: &Path, base: &str, suffix: &str) -> PathBuf {
    sentences_path.with_file_name(format!("{}{}", base, suffix))
}

/// `(sentence_id, sentence_text)` pairs in file order.
fn read_sentences(path: &Path) -> Result<Vec<(String, String)>, Error> {
    let mut sentences = Vec::new();
    for row in read_table(path)? {
        if row.len() != 2 {
            warn!(
                "{}: skipping malformed sentence row: {:?}",
                path.display(),
                row
            );
            continue;
        }
        sentences.push((row[0].to_string(), row[1].to_string()));
    }
    Ok(sentences)
}

/// `source_id -> (url, date)`; a two-field row is a source without a date.
fn read_sources(
    path: &Path,
) -> Result<HashMap<String, (Option<String>, Option<NaiveDate>)>, Error> {
    let mut sources = HashMap::new();
    for row in read_table(path)? {
        let (url, date) = match row.len() {
            3 => (non_empty(&row[1]), dates::parse_date(&row[2])),
            2 => (non_empty(&row[1]), None),
            _ => {
                warn!(
                    "{}: skipping malformed source row: {:?}",
                    path.display(),
                    row
                );
                continue;
            }
        };
        sources.insert(row[0].to_string(), (url, date));
    }
    Ok(sources)
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Read a headerless tab-separated file into records.
///
/// Quote characters are literal, a leading BOM is dropped, and non-UTF-8
/// bytes are replaced rather than failing the load. Unreadable lines are
/// skipped with a warning.
fn read_table(path: &Path) -> Result<Vec<StringRecord>, Error> {
    let bytes = fs::read(path)?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(Cursor::new(text.into_bytes()));

    let mut rows = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        match row {
            Ok(row) => rows.push(row),
            Err(e) => warn!(
                "{}: skipping unreadable line {}: {}",
                path.display(),
                idx + 1,
                e
            ),
        }
    }
    Ok(rows)
}
