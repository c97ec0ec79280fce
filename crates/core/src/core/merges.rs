//! Merge rule management for BPE.
//!
//! Merge rules are token pairs ranked by the round in which they were learned.
//! Lower rank means the pair was merged earlier and is applied first.

use crate::core::word::{Token, TokenPair};
use ahash::AHashMap;

/// Merge rule mapping: pair -> rank.
pub type MergeMap = AHashMap<TokenPair, u32>;

/// Collection of BPE merge rules with efficient lookup.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    merges: MergeMap,
    /// Pairs in rank order
    ordered: Vec<TokenPair>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create merge rules from a list of pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...). A pair that
    /// appears twice keeps its first rank.
    pub fn from_pairs(pairs: impl IntoIterator<Item = TokenPair>) -> Self {
        let mut rules = Self::new();
        for pair in pairs {
            rules.push(pair);
        }
        rules
    }

    /// Append a merge rule with the next rank.
    ///
    /// Returns the rank of the pair.
    pub fn push(&mut self, pair: TokenPair) -> u32 {
        if let Some(&rank) = self.merges.get(&pair) {
            return rank;
        }
        let rank = self.ordered.len() as u32;
        self.merges.insert(pair.clone(), rank);
        self.ordered.push(pair);
        rank
    }

    /// Get the rank of a pair, if it is a merge rule.
    #[inline]
    pub fn rank(&self, first: &str, second: &str) -> Option<u32> {
        self.merges
            .get(&(Token::new(first), Token::new(second)))
            .copied()
    }

    /// Rules in rank order.
    #[inline]
    pub fn pairs(&self) -> &[TokenPair] {
        &self.ordered
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> TokenPair {
        (Token::new(a), Token::new(b))
    }

    #[test]
    fn test_push_and_rank() {
        let mut rules = MergeRules::new();
        assert_eq!(rules.push(pair("e", "s")), 0);
        assert_eq!(rules.push(pair("es", "t")), 1);

        assert_eq!(rules.rank("e", "s"), Some(0));
        assert_eq!(rules.rank("es", "t"), Some(1));
        assert_eq!(rules.rank("s", "t"), None);
    }

    #[test]
    fn test_from_pairs_keeps_first_rank() {
        let rules = MergeRules::from_pairs(vec![pair("a", "b"), pair("b", "c"), pair("a", "b")]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rank("a", "b"), Some(0));
        assert_eq!(rules.rank("b", "c"), Some(1));
        assert_eq!(rules.pairs()[1], pair("b", "c"));
    }
}
