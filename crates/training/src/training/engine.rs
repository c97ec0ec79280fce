//! BPE merge engine.
//!
//! Repeatedly finds the most frequent adjacent pair across the whole corpus
//! and merges it in every word, for a bounded number of rounds. Ties on count
//! go to the lexicographically smallest pair, which makes the output
//! reproducible.

use super::counter::{MergeCandidate, PairCounter};
use rayon::prelude::*;
use subtok_core::{merge_pair, split_corpus, token_count, Corpus, MergeRules, TokenPair, Word};

/// Configuration for the merge engine.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Maximum number of merge rounds
    pub num_merges: usize,
    /// Count pairs and apply merges on the rayon pool
    pub parallel: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            num_merges: 10,
            parallel: false,
        }
    }
}

/// One applied merge round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    /// The pair that was merged
    pub pair: TokenPair,
    /// Its corpus-wide count when selected
    pub count: u64,
}

impl From<MergeCandidate> for MergeStep {
    fn from(candidate: MergeCandidate) -> Self {
        Self {
            pair: candidate.pair,
            count: candidate.count,
        }
    }
}

/// Result of a merge run.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The corpus after the last round
    pub corpus: Corpus,
    /// Applied merges, in order
    pub merges: Vec<MergeStep>,
}

impl MergeOutcome {
    /// Number of rounds executed.
    pub fn rounds(&self) -> usize {
        self.merges.len()
    }

    /// The applied merges as ranked rules, for encoding unseen words.
    pub fn rules(&self) -> MergeRules {
        MergeRules::from_pairs(self.merges.iter().map(|step| step.pair.clone()))
    }
}

/// BPE merge engine.
#[derive(Debug, Clone, Default)]
pub struct MergeEngine {
    config: MergeConfig,
}

impl MergeEngine {
    /// Create a new merge engine with the given configuration.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Create a sequential merge engine with the given merge budget.
    pub fn with_merges(num_merges: usize) -> Self {
        Self::new(MergeConfig {
            num_merges,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Split words into characters and run the merge rounds.
    pub fn run<S: AsRef<str>>(&self, words: &[S]) -> MergeOutcome {
        self.run_corpus(split_corpus(words))
    }

    /// Run the merge rounds on an already tokenized corpus.
    pub fn run_corpus(&self, mut corpus: Corpus) -> MergeOutcome {
        log::info!(
            "Starting BPE merges: {} words, {} tokens, budget {}",
            corpus.len(),
            token_count(&corpus),
            self.config.num_merges
        );

        let mut merges = Vec::with_capacity(self.config.num_merges);

        for _ in 0..self.config.num_merges {
            match self.step(&mut corpus) {
                Some(step) => merges.push(step),
                None => {
                    log::info!("No pairs left after {} merges", merges.len());
                    break;
                }
            }
        }

        log::info!(
            "Finished BPE merges: {} merges applied, {} tokens remain",
            merges.len(),
            token_count(&corpus)
        );

        MergeOutcome { corpus, merges }
    }

    /// Count pairs across the corpus for the next round.
    pub fn count_pairs(&self, corpus: &[Word]) -> PairCounter {
        if self.config.parallel {
            PairCounter::count_parallel(corpus)
        } else {
            PairCounter::count_sequential(corpus)
        }
    }

    /// Run one merge round in place.
    ///
    /// Returns the merged pair, or `None` when the corpus has no adjacent
    /// pairs left.
    pub fn step(&self, corpus: &mut Corpus) -> Option<MergeStep> {
        // The counts are fully aggregated before selection.
        let candidate = self.count_pairs(corpus).best()?;
        let (first, second) = &candidate.pair;

        let merged: usize = if self.config.parallel {
            corpus
                .par_iter_mut()
                .map(|word| merge_pair(word, first, second))
                .sum()
        } else {
            corpus
                .iter_mut()
                .map(|word| merge_pair(word, first, second))
                .sum()
        };

        log::debug!(
            "merge ({:?}, {:?}) count={} occurrences merged={}",
            first.as_str(),
            second.as_str(),
            candidate.count,
            merged
        );

        Some(candidate.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_core::{BpeEncoder, Segmenter, Token};

    const DEMO: [&str; 4] = ["low", "lower", "newest", "widest"];

    fn pair(a: &str, b: &str) -> TokenPair {
        (Token::new(a), Token::new(b))
    }

    #[test]
    fn test_first_round_selects_es() {
        let engine = MergeEngine::default();
        let mut corpus = split_corpus(&DEMO);

        let step = engine.step(&mut corpus).unwrap();
        assert_eq!(step.pair, pair("e", "s"));
        assert_eq!(step.count, 2);

        assert_eq!(corpus[0], vec!["l", "o", "w"]);
        assert_eq!(corpus[1], vec!["l", "o", "w", "e", "r"]);
        assert_eq!(corpus[2], vec!["n", "e", "w", "es", "t"]);
        assert_eq!(corpus[3], vec!["w", "i", "d", "es", "t"]);
    }

    #[test]
    fn test_default_budget_on_demo_corpus() {
        let outcome = MergeEngine::default().run(&DEMO);

        assert_eq!(outcome.rounds(), 10);
        let pairs: Vec<TokenPair> = outcome.merges.iter().map(|s| s.pair.clone()).collect();
        assert_eq!(
            pairs,
            vec![
                pair("e", "s"),
                pair("es", "t"),
                pair("l", "o"),
                pair("lo", "w"),
                pair("d", "est"),
                pair("e", "r"),
                pair("e", "w"),
                pair("ew", "est"),
                pair("i", "dest"),
                pair("low", "er"),
            ]
        );
        assert_eq!(
            outcome.corpus,
            vec![
                vec!["low"],
                vec!["lower"],
                vec!["n", "ewest"],
                vec!["w", "idest"],
            ]
        );
    }

    #[test]
    fn test_empty_corpus() {
        let outcome = MergeEngine::default().run::<&str>(&[]);
        assert!(outcome.corpus.is_empty());
        assert_eq!(outcome.rounds(), 0);
    }

    #[test]
    fn test_early_termination() {
        let outcome = MergeEngine::with_merges(10).run(&["ab", "c", ""]);
        assert_eq!(outcome.rounds(), 1);
        assert_eq!(outcome.corpus, vec![vec!["ab"], vec!["c"], vec![]]);
    }

    #[test]
    fn test_zero_budget() {
        let outcome = MergeEngine::with_merges(0).run(&DEMO);
        assert_eq!(outcome.rounds(), 0);
        assert_eq!(outcome.corpus, split_corpus(&DEMO));
    }

    #[test]
    fn test_token_count_never_increases() {
        let engine = MergeEngine::default();
        let mut corpus = split_corpus(&DEMO);
        let mut previous = token_count(&corpus);

        while engine.step(&mut corpus).is_some() {
            let current = token_count(&corpus);
            assert!(current < previous);
            previous = current;
        }
        // Every word collapsed to a single token.
        assert_eq!(previous, DEMO.len());
    }

    #[test]
    fn test_terminates_within_budget() {
        for budget in [0, 1, 3, 50, 1000] {
            let outcome = MergeEngine::with_merges(budget).run(&DEMO);
            assert!(outcome.rounds() <= budget);
        }
    }

    #[test]
    fn test_deterministic() {
        let engine = MergeEngine::with_merges(25);
        let first = engine.run(&DEMO);
        for _ in 0..5 {
            let again = engine.run(&DEMO);
            assert_eq!(again.corpus, first.corpus);
            assert_eq!(again.merges, first.merges);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words = ["low", "lower", "newest", "widest", "lowest", "newer", "wider"];
        let seq = MergeEngine::with_merges(15).run(&words);
        let par = MergeEngine::new(MergeConfig {
            num_merges: 15,
            parallel: true,
        })
        .run(&words);

        assert_eq!(seq.corpus, par.corpus);
        assert_eq!(seq.merges, par.merges);
    }

    #[test]
    fn test_rules_replay_on_training_words() {
        let outcome = MergeEngine::default().run(&DEMO);
        let encoder = BpeEncoder::new(outcome.rules());

        let replayed = encoder.segment_corpus(&DEMO);
        assert_eq!(replayed, outcome.corpus);
    }
}
