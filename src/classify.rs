//! Period classification.
//!
//! Decides whether a sentence belongs to the Pre- or Post-ChatGPT period.
//! Source dates are only trusted when they corroborate the year declared in
//! the corpus name; otherwise classification falls back to the corpus year,
//! and finally to the Pre period.
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Last corpus year classified as Pre when no trusted date is available.
const LAST_PRE_CORPUS_YEAR: i32 = 2022;

/// Binary time period relative to the cutoff date.
///
/// `PreChatGPT` orders before `PostChatGPT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Pre-ChatGPT")]
    PreChatGPT,
    #[serde(rename = "Post-ChatGPT")]
    PostChatGPT,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::PreChatGPT => "Pre-ChatGPT",
            Period::PostChatGPT => "Post-ChatGPT",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rule engine labeling sentences for one corpus.
pub struct PeriodClassifier {
    cutoff: NaiveDate,
    lang_code: String,
    month_split: bool,
}

impl PeriodClassifier {
    /// `month_split` enables the per-month rule for German 2022 sentences.
    pub fn new(cutoff: NaiveDate, lang_code: &str, month_split: bool) -> Self {
        Self {
            cutoff,
            lang_code: lang_code.to_string(),
            month_split,
        }
    }

    /// Label a sentence. First matching rule wins:
    ///
    /// 1. date present and matching the corpus year:
    ///    German 2022 month split if enabled, else compare to the cutoff.
    /// 2. corpus year known: year <= 2022 is Pre.
    /// 3. Pre.
    pub fn classify(&self, date: Option<NaiveDate>, corpus_year: Option<i32>) -> Period {
        if let (Some(date), Some(year)) = (date, corpus_year) {
            if date.year() == year {
                if self.lang_code == "deu" && self.month_split && date.year() == 2022 {
                    return if date.month() <= 11 {
                        Period::PreChatGPT
                    } else {
                        Period::PostChatGPT
                    };
                }
                return if date <= self.cutoff {
                    Period::PreChatGPT
                } else {
                    Period::PostChatGPT
                };
            }
        }
        match corpus_year {
            Some(year) if year > LAST_PRE_CORPUS_YEAR => Period::PostChatGPT,
            Some(_) => Period::PreChatGPT,
            None => Period::PreChatGPT,
        }
    }
}
