//! sentence-level filtering
use super::Filter;
use crate::cleaning::token_count;

/// Simple token-count filter.
/// Returns `false` if the provided sentence has fewer than
/// [MinTokens::min_tokens] whitespace-separated tokens.
///
/// [MinTokens::min_tokens] is 8 by default.
pub struct MinTokens {
    min_tokens: usize,
}

impl MinTokens {
    /// specify a minimum token count
    pub fn with_min_tokens(min_tokens: usize) -> Self {
        Self { min_tokens }
    }

    /// Get a reference to the filter's minimum token count.
    pub fn min_tokens(&self) -> &usize {
        &self.min_tokens
    }
}

impl Filter<&str> for MinTokens {
    fn detect(&self, sentence: &str) -> bool {
        token_count(sentence) >= self.min_tokens
    }
}

impl Default for MinTokens {
    /// Default minimum is 8 tokens
    fn default() -> Self {
        MinTokens { min_tokens: 8 }
    }
}
