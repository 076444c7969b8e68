//! Coverage summary report.
//!
//! Second stage: aggregates the cleaned tables into a Markdown report of
//! sentence counts by (language, year, period), per-language totals, the
//! overall total, and per-language missing-date percentages.
//!
//! Reads the combined table when present, otherwise the union of every
//! per-corpus table in the directory. Missing schema columns are fatal.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::writing::OUTPUT_COLUMNS;

use super::clean::COMBINED_FILENAME;
use super::pipeline::Pipeline;

/// One parsed row of a cleaned table, typed loosely: the report treats
/// `date` as text (empty means missing) and tolerates unparsable years.
struct Row {
    language: String,
    year: Option<i32>,
    period: String,
    missing_date: bool,
}

pub struct CoverageReport {
    in_dir: PathBuf,
    report_path: PathBuf,
}

impl CoverageReport {
    pub fn new(in_dir: PathBuf, report_path: PathBuf) -> Self {
        Self {
            in_dir,
            report_path,
        }
    }

    /// The combined table if present, else every other `.tsv` in the
    /// input directory. No tables at all is fatal.
    fn input_files(&self) -> Result<Vec<PathBuf>, Error> {
        let combined = self.in_dir.join(COMBINED_FILENAME);
        if combined.exists() {
            return Ok(vec![combined]);
        }

        let mut parts = Vec::new();
        for entry in fs::read_dir(&self.in_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("tsv") {
                parts.push(path);
            }
        }
        parts.sort();

        if parts.is_empty() {
            return Err(Error::Custom(format!(
                "no TSV files found in {}",
                self.in_dir.display()
            )));
        }
        Ok(parts)
    }

    fn read_rows(path: &Path, rows: &mut Vec<Row>) -> Result<(), Error> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let index_of = |column: &str| headers.iter().position(|h| h == column);

        let missing: Vec<String> = OUTPUT_COLUMNS
            .iter()
            .filter(|c| index_of(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        // all unwraps guarded by the column check above
        let language_idx = index_of("language").unwrap();
        let year_idx = index_of("year").unwrap();
        let period_idx = index_of("period").unwrap();
        let date_idx = index_of("date").unwrap();

        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("");
            rows.push(Row {
                language: field(language_idx).to_string(),
                year: field(year_idx).parse().ok(),
                period: field(period_idx).to_string(),
                missing_date: field(date_idx).is_empty(),
            });
        }
        Ok(())
    }

    fn render(rows: &[Row]) -> String {
        // stable period ordering: Pre before Post, anything else after
        let period_rank = |period: &str| match period {
            "Pre-ChatGPT" => 0u8,
            "Post-ChatGPT" => 1,
            _ => 2,
        };

        let mut counts: BTreeMap<(String, Option<i32>, u8, String), u64> = BTreeMap::new();
        let mut languages: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for row in rows {
            *counts
                .entry((
                    row.language.clone(),
                    row.year,
                    period_rank(&row.period),
                    row.period.clone(),
                ))
                .or_insert(0) += 1;
            let (total, missing) = languages.entry(row.language.clone()).or_insert((0, 0));
            *total += 1;
            if row.missing_date {
                *missing += 1;
            }
        }

        let mut lines = Vec::new();
        lines.push("# Coverage Summary".to_string());
        lines.push(String::new());

        lines.push("## Sentences by language, year, period".to_string());
        lines.push(String::new());
        lines.push("| language | year | period | n_sentences |".to_string());
        lines.push("|---|---|---|---|".to_string());
        for ((language, year, _, period), n) in &counts {
            let year = year.map(|y| y.to_string()).unwrap_or_default();
            lines.push(format!("| {} | {} | {} | {} |", language, year, period, n));
        }
        lines.push(String::new());

        lines.push("## Totals by language".to_string());
        lines.push(String::new());
        lines.push("| language | n_sentences_total |".to_string());
        lines.push("|---|---|".to_string());
        for (language, (total, _)) in &languages {
            lines.push(format!("| {} | {} |", language, total));
        }
        lines.push(String::new());

        let overall: u64 = languages.values().map(|(total, _)| total).sum();
        lines.push(format!("**Overall total sentences:** {}", overall));
        lines.push(String::new());

        lines.push("## Missing date percentage by language".to_string());
        lines.push(String::new());
        lines.push("| language | pct_missing_date |".to_string());
        lines.push("|---|---|".to_string());
        for (language, (total, missing)) in &languages {
            let pct = if *total == 0 {
                0.0
            } else {
                *missing as f64 * 100.0 / *total as f64
            };
            lines.push(format!("| {} | {:.2} |", language, pct));
        }
        lines.push(String::new());

        lines.join("\n")
    }
}

impl Pipeline<()> for CoverageReport {
    fn run(&self) -> Result<(), Error> {
        let files = self.input_files()?;
        info!(
            "building coverage report from {}",
            files.iter().map(|f| f.display().to_string()).join(", ")
        );

        let mut rows = Vec::new();
        for file in &files {
            Self::read_rows(file, &mut rows)?;
        }

        if let Some(parent) = self.report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.report_path, Self::render(&rows))?;
        info!("wrote {}", self.report_path.display());
        Ok(())
    }
}
