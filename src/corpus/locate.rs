//! Corpus sentences-file discovery.
//!
//! Raw directories drift from the declared corpus names: size suffixes get
//! dropped on rename (`eng_news_2018` vs `eng_news_2018_100K`) and files
//! sometimes sit one level above their per-corpus subfolder. Discovery
//! therefore collects candidates from a set of patterns, falling back to a
//! year-based match, and picks the first hit.
use std::path::{Path, PathBuf};

use glob::glob;
use itertools::Itertools;
use log::{debug, info};

use crate::dates;
use crate::error::Error;

/// Find the sentences file for `corpus_name` under `raw_dir`.
///
/// Searches `raw_dir` and its parent directory, trying in order:
/// the exact `{name}-sentences.txt`, the size-suffixed
/// `{name}_*-sentences.txt`, and (when the name carries a 4-digit year)
/// any `*news*{year}*-sentences.txt`. All candidates are collected and the
/// first one wins; a same-year corpus can therefore shadow the intended
/// one, which is the accepted cost of tolerating renamed directories.
pub fn locate(raw_dir: &Path, corpus_name: &str) -> Result<PathBuf, Error> {
    let mut search_dirs = vec![raw_dir.to_path_buf()];
    if raw_dir.is_dir() {
        if let Some(parent) = raw_dir.parent() {
            if parent.exists() && !search_dirs.iter().any(|d| d.as_path() == parent) {
                search_dirs.push(parent.to_path_buf());
            }
        }
    }

    let mut patterns = vec![
        format!("{}-sentences.txt", corpus_name),
        format!("{}_*-sentences.txt", corpus_name),
    ];
    if let Some(year) = dates::corpus_year(corpus_name) {
        patterns.push(format!("*news*{}*-sentences.txt", year));
    }

    let mut candidates = Vec::new();
    for dir in &search_dirs {
        for pattern in &patterns {
            let full = dir.join(pattern);
            let matched: Vec<PathBuf> = glob(&full.to_string_lossy())?
                .filter_map(Result::ok)
                .collect();
            if !matched.is_empty() {
                debug!("{}: pattern {} matched {:?}", corpus_name, pattern, matched);
            }
            candidates.extend(matched);
        }
    }

    let candidates: Vec<PathBuf> = candidates.into_iter().unique().collect();
    debug!(
        "{}: candidate sentence files: {:?}",
        corpus_name, candidates
    );

    match candidates.first() {
        Some(path) => {
            info!("{}: using {}", corpus_name, path.display());
            Ok(path.clone())
        }
        None => Err(Error::CorpusNotFound {
            corpus: corpus_name.to_string(),
            searched: search_dirs,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn exact_name() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("eng_news_2018_100K-sentences.txt");
        File::create(&expected).unwrap();

        let found = locate(dir.path(), "eng_news_2018_100K").unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn size_suffix_missing_from_name() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("eng_news_2018_100K-sentences.txt");
        File::create(&expected).unwrap();

        // matched by the `{name}_*-sentences.txt` pattern
        let found = locate(dir.path(), "eng_news_2018").unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn year_fallback_in_renamed_directory() {
        let root = tempfile::tempdir().unwrap();
        let corpus_dir = root.path().join("eng_news_2018");
        std::fs::create_dir(&corpus_dir).unwrap();
        let expected = corpus_dir.join("news-data_2018_1M-sentences.txt");
        File::create(&expected).unwrap();

        let found = locate(&corpus_dir, "eng_news_2018").unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn searches_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let corpus_dir = root.path().join("deu_news_2022");
        std::fs::create_dir(&corpus_dir).unwrap();
        // files live one level above the per-corpus subfolder
        let expected = root.path().join("deu_news_2022_30K-sentences.txt");
        File::create(&expected).unwrap();

        let found = locate(&corpus_dir, "deu_news_2022").unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn exact_match_beats_year_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let exact = dir.path().join("eng_news_2018-sentences.txt");
        File::create(&exact).unwrap();
        File::create(dir.path().join("other_news_2018_10K-sentences.txt")).unwrap();

        let found = locate(dir.path(), "eng_news_2018").unwrap();
        assert_eq!(found, exact);
    }

    #[test]
    fn not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate(dir.path(), "fra_news_2020").unwrap_err();
        match err {
            Error::CorpusNotFound { corpus, .. } => assert_eq!(corpus, "fra_news_2020"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
