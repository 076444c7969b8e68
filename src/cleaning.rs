//! Sentence text normalization.
//!
//! Leipzig exports carry scraped artifacts (URLs, markup remnants, quoting)
//! that have to go before filtering and deduplication.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// http/https/www-prefixed tokens.
    static ref URLS: Regex = Regex::new(r"(?i)https?\S+|www\S+").unwrap();
    /// angle-bracket delimited tags.
    static ref TAGS: Regex = Regex::new(r"<.*?>").unwrap();
    static ref SPACES: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize a raw sentence.
///
/// Removes URL-like tokens and angle-bracket tags, strips surrounding
/// whitespace and quotes, and collapses whitespace runs to single spaces.
/// Idempotent: cleaning an already-clean sentence is a no-op.
pub fn clean(text: &str) -> String {
    let text = URLS.replace_all(text, "");
    let text = TAGS.replace_all(&text, "");
    let text = text.trim().trim_matches('"').trim_matches('\'');
    SPACES.replace_all(text, " ").trim().to_string()
}

/// Number of whitespace-separated tokens.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::{clean, token_count};

    #[test]
    fn removes_urls() {
        assert_eq!(
            clean("read more at https://example.com/article today"),
            "read more at today"
        );
        assert_eq!(clean("visit WWW.EXAMPLE.COM now"), "visit now");
        assert_eq!(clean("http://a.b c"), "c");
    }

    #[test]
    fn removes_tags() {
        assert_eq!(clean("a <b>bold</b> claim"), "a bold claim");
        assert_eq!(clean("<p>full paragraph</p>"), "full paragraph");
    }

    #[test]
    fn strips_quotes_and_whitespace() {
        assert_eq!(clean("  \"quoted sentence\"  "), "quoted sentence");
        assert_eq!(clean("'single quoted'"), "single quoted");
        assert_eq!(clean("\"\"doubled\"\""), "doubled");
    }

    #[test]
    fn collapses_whitespace() {
        let cleaned = clean("too   many\t\tspaces\nhere");
        assert_eq!(cleaned, "too many spaces here");
        assert!(!cleaned.starts_with(' '));
        assert!(!cleaned.ends_with(' '));
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "  \"a 'complex' <b>input</b> with https://u.rl inside \" ",
            "plain sentence",
            "",
            "   ",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn token_count_basics() {
        assert_eq!(token_count(""), 0);
        assert_eq!(token_count("one"), 1);
        assert_eq!(token_count("a b c d"), 4);
    }

    #[test]
    fn token_count_invariant_to_extra_whitespace() {
        let a = clean("the quick brown fox");
        let b = clean("the  quick \t brown \n fox");
        assert_eq!(token_count(&a), token_count(&b));
    }
}
