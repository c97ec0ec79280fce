//! Text splitting for pre-tokenization.
//!
//! This module turns raw text into a corpus of words, either on whitespace
//! or on a custom regex separator.

use regex::Regex;
use subtok_core::{Result, TokenizerError};

/// Splitting patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitPattern {
    /// No splitting (the whole text is one word)
    NoSplit,
    /// Split on whitespace
    #[default]
    Whitespace,
    /// Split on matches of a regex separator
    Custom(String),
}

/// Text splitter for pre-tokenization.
#[derive(Debug, Clone)]
pub struct Splitter {
    /// Pattern to split on
    pattern: SplitPattern,
    /// Compiled separator for `SplitPattern::Custom`
    regex: Option<Regex>,
}

impl Splitter {
    /// Create a new splitter.
    ///
    /// Fails if a custom pattern is not a valid regex.
    pub fn new(pattern: SplitPattern) -> Result<Self> {
        let regex = match &pattern {
            SplitPattern::Custom(re) => Some(Regex::new(re).map_err(|e| {
                TokenizerError::InvalidConfig(format!("Invalid split pattern '{}': {}", re, e))
            })?),
            _ => None,
        };
        Ok(Self { pattern, regex })
    }

    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self {
            pattern: SplitPattern::Whitespace,
            regex: None,
        }
    }

    #[inline]
    pub fn pattern(&self) -> &SplitPattern {
        &self.pattern
    }

    /// Split text into words. Empty pieces are dropped.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match (&self.pattern, &self.regex) {
            (SplitPattern::NoSplit, _) => {
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
            (SplitPattern::Custom(_), Some(re)) => {
                re.split(text).filter(|s| !s.is_empty()).collect()
            }
            _ => text.split_whitespace().collect(),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("low lower\tnewest\n widest");
        assert_eq!(result, vec!["low", "lower", "newest", "widest"]);
    }

    #[test]
    fn test_nosplit() {
        let splitter = Splitter::new(SplitPattern::NoSplit).unwrap();
        assert_eq!(splitter.split("hello world"), vec!["hello world"]);
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn test_custom_split() {
        let splitter = Splitter::new(SplitPattern::Custom(r"[,\s]+".to_string())).unwrap();
        let result = splitter.split("low, lower,newest");
        assert_eq!(result, vec!["low", "lower", "newest"]);
    }

    #[test]
    fn test_two_custom_patterns_are_independent() {
        let commas = Splitter::new(SplitPattern::Custom(",".to_string())).unwrap();
        let dashes = Splitter::new(SplitPattern::Custom("-".to_string())).unwrap();
        assert_eq!(commas.split("a,b-c"), vec!["a", "b-c"]);
        assert_eq!(dashes.split("a,b-c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Splitter::new(SplitPattern::Custom("(".to_string())).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_string() {
        let splitter = Splitter::whitespace();
        assert_eq!(splitter.split(""), Vec::<&str>::new());
    }
}
