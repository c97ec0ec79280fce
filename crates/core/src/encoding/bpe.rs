//! BPE encoding with learned merge rules.
//!
//! A word is split into characters and the merge rules are replayed in rank
//! order. Each rule is applied at most once, with the same non-overlapping
//! left-to-right pass used during learning, so a word seen while learning
//! comes out exactly as the merge engine left it.

use super::Segmenter;
use crate::core::word::{merge_pair, split_chars};
use crate::core::{MergeRules, Word};

/// Applies ranked merge rules to unseen words.
#[derive(Debug, Clone, Default)]
pub struct BpeEncoder {
    rules: MergeRules,
}

impl BpeEncoder {
    /// Create a new encoder from merge rules.
    pub fn new(rules: MergeRules) -> Self {
        Self { rules }
    }

    #[inline]
    pub fn rules(&self) -> &MergeRules {
        &self.rules
    }

    /// Apply merge rules to an already tokenized word.
    ///
    /// Rules whose pair is absent when their turn comes are skipped and never
    /// revisited.
    pub fn apply_merges(&self, tokens: &mut Word) {
        let mut floor: Option<u32> = None;

        loop {
            let next = tokens
                .windows(2)
                .filter_map(|w| self.rules.rank(&w[0], &w[1]))
                .filter(|&rank| floor.map_or(true, |f| rank > f))
                .min();

            let Some(rank) = next else {
                break;
            };

            let (first, second) = &self.rules.pairs()[rank as usize];
            merge_pair(tokens, first, second);
            floor = Some(rank);
        }
    }
}

impl Segmenter for BpeEncoder {
    fn segment(&self, word: &str) -> Word {
        let mut tokens = split_chars(word);
        self.apply_merges(&mut tokens);
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    fn rules(pairs: &[(&str, &str)]) -> MergeRules {
        MergeRules::from_pairs(pairs.iter().map(|&(a, b)| (Token::new(a), Token::new(b))))
    }

    #[test]
    fn test_no_rules_splits_chars() {
        let encoder = BpeEncoder::default();
        assert_eq!(encoder.segment("low"), vec!["l", "o", "w"]);
        assert!(encoder.segment("").is_empty());
    }

    #[test]
    fn test_rules_applied_in_rank_order() {
        let encoder = BpeEncoder::new(rules(&[("e", "s"), ("es", "t"), ("l", "o"), ("lo", "w")]));
        assert_eq!(encoder.segment("lowest"), vec!["low", "est"]);
        assert_eq!(encoder.segment("slow"), vec!["s", "low"]);
    }

    #[test]
    fn test_rule_skipped_when_pair_absent_at_its_turn() {
        // ("ab", "c") ranks before ("a", "b"), so by the time "ab" exists the
        // rule has already had its turn.
        let encoder = BpeEncoder::new(rules(&[("ab", "c"), ("a", "b")]));
        assert_eq!(encoder.segment("abc"), vec!["ab", "c"]);
    }

    #[test]
    fn test_overlapping_occurrences() {
        let encoder = BpeEncoder::new(rules(&[("a", "a")]));
        assert_eq!(encoder.segment("aaa"), vec!["aa", "a"]);
    }
}
