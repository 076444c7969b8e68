//! Corpus cleaning pipeline.
//!
//! For each configured language, each declared corpus is processed to
//! completion before the next begins:
//!
//! 1. the sentences file is located (tolerating renamed directories) and
//!    the three raw tables are joined,
//! 1. source dates are sanitized against the plausible range,
//! 1. sentence text is normalized, then short and duplicate sentences are
//!    dropped,
//! 1. every row is labeled Pre-/Post-ChatGPT,
//! 1. the per-corpus table is written, and rows accumulate for the
//!    combined table written at the end of the run.
//!
//! A corpus whose files cannot be found is skipped with a diagnostic;
//! the remaining corpora still run.
use std::collections::HashSet;
use std::path::PathBuf;

use log::{error, info};

use crate::classify::PeriodClassifier;
use crate::cleaning;
use crate::config::{Config, LanguageConfig};
use crate::corpus;
use crate::corpus::CleanRow;
use crate::dates;
use crate::error::Error;
use crate::filtering::{Filter, MinTokens};
use crate::writing::TableWriter;

use super::pipeline::Pipeline;

/// File name of the concatenated all-languages table.
pub const COMBINED_FILENAME: &str = "all_languages_clean.tsv";

pub struct CleanCorpora {
    config: Config,
}

impl CleanCorpora {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Clean one corpus into its output rows.
    fn process_corpus(
        &self,
        lang: &LanguageConfig,
        corpus_name: &str,
    ) -> Result<Vec<CleanRow>, Error> {
        // files usually live in <raw_dir>/<corpus_name>/, but may sit in
        // raw_dir directly when the subfolder is missing
        let corpus_dir = {
            let subdir = lang.raw_dir.join(corpus_name);
            if subdir.exists() {
                subdir
            } else {
                lang.raw_dir.clone()
            }
        };

        let sentences_path = corpus::locate(&corpus_dir, corpus_name)?;
        let records = corpus::load(&sentences_path)?;

        let corpus_year = dates::corpus_year(corpus_name);
        let classifier = PeriodClassifier::new(
            self.config.project.cutoff_date,
            &lang.code,
            lang.special_rules.split_2022_by_month,
        );
        let min_tokens = MinTokens::with_min_tokens(self.config.project.min_tokens);

        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for record in records {
            let date = dates::sanitize(record.date);
            let sentence = cleaning::clean(&record.sentence);
            if sentence.is_empty() || !min_tokens.detect(&sentence) {
                continue;
            }
            if self.config.project.deduplicate && !seen.insert(sentence.clone()) {
                continue;
            }
            let period = classifier.classify(date, corpus_year);
            rows.push(CleanRow {
                language: lang.name.clone(),
                year: corpus_year,
                period,
                date,
                sentence,
            });
        }
        Ok(rows)
    }

    /// Per-corpus output path: `{code}_{suffix}.tsv`, with a redundant
    /// language-code prefix stripped from the corpus name.
    fn output_path(&self, lang: &LanguageConfig, corpus_name: &str) -> PathBuf {
        let prefix = format!("{}_", lang.code);
        let suffix = corpus_name.strip_prefix(&prefix).unwrap_or(corpus_name);
        self.config
            .paths
            .clean_root
            .join(format!("{}_{}.tsv", lang.code, suffix))
    }

    /// Process every corpus of one language, appending output rows to
    /// `combined`. Returns the number of corpora that produced a table.
    fn process_language(
        &self,
        lang: &LanguageConfig,
        combined: &mut Vec<CleanRow>,
    ) -> Result<usize, Error> {
        let mut processed = 0;
        for corpus_name in &lang.corpora {
            let rows = match self.process_corpus(lang, corpus_name) {
                Ok(rows) => rows,
                Err(Error::CorpusNotFound { corpus, searched }) => {
                    error!(
                        "{}/{}: no sentences file found in {:?}, skipping corpus",
                        lang.code, corpus, searched
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            let out_path = self.output_path(lang, corpus_name);
            let mut writer = TableWriter::create(&out_path)?;
            writer.write_rows(&rows)?;
            writer.finish()?;
            info!("saved {} (rows: {})", out_path.display(), rows.len());

            combined.extend(rows);
            processed += 1;
        }
        Ok(processed)
    }
}

impl Pipeline<()> for CleanCorpora {
    fn run(&self) -> Result<(), Error> {
        let mut combined = Vec::new();
        let mut processed = 0;
        for lang in &self.config.languages {
            processed += self.process_language(lang, &mut combined)?;
        }

        if self.config.project.output_combined && processed > 0 {
            let out_path = self.config.paths.clean_root.join(COMBINED_FILENAME);
            let mut writer = TableWriter::create(&out_path)?;
            writer.write_rows(&combined)?;
            writer.finish()?;
            info!(
                "saved combined {} (rows: {})",
                out_path.display(),
                combined.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::config::{Config, LanguageConfig, PathsConfig, ProjectConfig, SpecialRules};
    use crate::pipelines::Pipeline;

    use super::CleanCorpora;

    fn language(code: &str, name: &str, raw_dir: &Path, corpora: &[&str]) -> LanguageConfig {
        LanguageConfig {
            code: code.to_string(),
            name: name.to_string(),
            raw_dir: raw_dir.to_path_buf(),
            corpora: corpora.iter().map(|c| c.to_string()).collect(),
            special_rules: SpecialRules::default(),
        }
    }

    fn config(clean_root: &Path, languages: Vec<LanguageConfig>) -> Config {
        Config {
            project: ProjectConfig::default(),
            paths: PathsConfig {
                clean_root: clean_root.to_path_buf(),
            },
            languages,
        }
    }

    #[test]
    fn missing_corpus_is_skipped_not_fatal() {
        let raw = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let corpus_dir = raw.path().join("eng_news_2018");
        fs::create_dir(&corpus_dir).unwrap();
        fs::write(
            corpus_dir.join("eng_news_2018_10K-sentences.txt"),
            "1\tthe quick brown fox jumps over the lazy dog\n",
        )
        .unwrap();

        let cfg = config(
            out.path(),
            vec![language(
                "eng",
                "English",
                raw.path(),
                &["eng_news_2018", "eng_news_1789"],
            )],
        );

        CleanCorpora::new(cfg).run().unwrap();

        assert!(out.path().join("eng_news_2018.tsv").exists());
        assert!(!out.path().join("eng_news_1789.tsv").exists());
    }

    #[test]
    fn output_name_strips_language_prefix() {
        let out = tempfile::tempdir().unwrap();
        let cfg = config(
            out.path(),
            vec![language("eng", "English", Path::new("unused"), &[])],
        );
        let pipeline = CleanCorpora::new(cfg);
        let lang = language("eng", "English", Path::new("unused"), &[]);

        assert_eq!(
            pipeline.output_path(&lang, "eng_news_2018"),
            out.path().join("eng_news_2018.tsv")
        );
        assert_eq!(
            pipeline.output_path(&lang, "mixed_news_2018"),
            out.path().join("eng_mixed_news_2018.tsv")
        );
    }
}
