//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` that runs raw text through
//! normalization and word splitting, then segments every word with one of the
//! three models.

use crate::pre_tokenizer::{NormalizationForm, Normalizer, SplitPattern, Splitter};
use subtok_core::{
    join_tokens, BpeEncoder, Corpus, LongestMatchSegmenter, ProbabilisticSegmenter, Result,
    Segmenter, Token, TokenizerError, Word,
};
use subtok_training::{MergeConfig, MergeEngine, MergeOutcome};

/// Segmentation model used by the tokenizer.
#[derive(Debug, Clone)]
pub enum Model {
    /// Learned BPE merge rules
    Bpe(BpeEncoder),
    /// Greedy longest match against a membership vocabulary
    WordPiece(LongestMatchSegmenter),
    /// Probability-guided segmentation
    Unigram(ProbabilisticSegmenter),
}

impl Model {
    /// Short model name.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Bpe(_) => "bpe",
            Model::WordPiece(_) => "wordpiece",
            Model::Unigram(_) => "unigram",
        }
    }

    /// Join a word's tokens back into text.
    pub fn decode(&self, tokens: &[Token]) -> String {
        match self {
            Model::WordPiece(segmenter) => segmenter.decode(tokens),
            Model::Bpe(_) | Model::Unigram(_) => join_tokens(tokens),
        }
    }
}

impl Segmenter for Model {
    fn segment(&self, word: &str) -> Word {
        match self {
            Model::Bpe(encoder) => encoder.segment(word),
            Model::WordPiece(segmenter) => segmenter.segment(word),
            Model::Unigram(segmenter) => segmenter.segment(word),
        }
    }
}

impl From<BpeEncoder> for Model {
    fn from(encoder: BpeEncoder) -> Self {
        Model::Bpe(encoder)
    }
}

impl From<LongestMatchSegmenter> for Model {
    fn from(segmenter: LongestMatchSegmenter) -> Self {
        Model::WordPiece(segmenter)
    }
}

impl From<ProbabilisticSegmenter> for Model {
    fn from(segmenter: ProbabilisticSegmenter) -> Self {
        Model::Unigram(segmenter)
    }
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Unicode normalization applied before splitting
    pub normalization: NormalizationForm,
    /// Lowercase after normalization
    pub lowercase: bool,
    /// How raw text is split into words
    pub split_pattern: SplitPattern,
    /// Segment words on the rayon pool
    pub parallel: bool,
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
    model: Option<Model>,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation model.
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the normalization form.
    pub fn normalization(mut self, form: NormalizationForm) -> Self {
        self.config.normalization = form;
        self
    }

    /// Lowercase text before segmenting.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Set the word split pattern.
    pub fn split_pattern(mut self, pattern: SplitPattern) -> Self {
        self.config.split_pattern = pattern;
        self
    }

    /// Segment words in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        let model = self.model.ok_or_else(|| {
            TokenizerError::InvalidConfig("No segmentation model configured".to_string())
        })?;
        Tokenizer::new(model, self.config)
    }

    /// Learn BPE merges from `text` and build a tokenizer that applies them.
    ///
    /// The text goes through this builder's normalization and splitting
    /// first. Any model already set on the builder is replaced.
    pub fn train_bpe(self, text: &str, merges: MergeConfig) -> Result<(Tokenizer, MergeOutcome)> {
        let normalizer =
            Normalizer::new(self.config.normalization).with_lowercase(self.config.lowercase);
        let splitter = Splitter::new(self.config.split_pattern.clone())?;

        let normalized = normalizer.normalize(text);
        let words = splitter.split(&normalized);

        let outcome = MergeEngine::new(merges).run(&words);
        let tokenizer = Tokenizer::new(Model::Bpe(BpeEncoder::new(outcome.rules())), self.config)?;

        Ok((tokenizer, outcome))
    }
}

/// High-level tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    model: Model,
    normalizer: Normalizer,
    splitter: Splitter,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer with the given model and configuration.
    pub fn new(model: Model, config: TokenizerConfig) -> Result<Self> {
        let normalizer = Normalizer::new(config.normalization).with_lowercase(config.lowercase);
        let splitter = Splitter::new(config.split_pattern.clone())?;

        Ok(Self {
            model,
            normalizer,
            splitter,
            config,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    #[inline]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[inline]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Normalize text and split it into words.
    pub fn pre_tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.splitter
            .split(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Normalize and segment a single word. No splitting is applied.
    pub fn tokenize_word(&self, word: &str) -> Word {
        if self.normalizer.is_enabled() {
            self.model.segment(&self.normalizer.normalize(word))
        } else {
            self.model.segment(word)
        }
    }

    /// Normalize and segment each word of a corpus, in order.
    pub fn tokenize_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Corpus {
        if self.normalizer.is_enabled() {
            let normalized: Vec<String> = words
                .iter()
                .map(|w| self.normalizer.normalize(w.as_ref()))
                .collect();
            self.segment_words(&normalized)
        } else {
            self.segment_words(words)
        }
    }

    /// Normalize, split and segment raw text.
    pub fn tokenize(&self, text: &str) -> Corpus {
        let words = self.pre_tokenize(text);
        let corpus = self.segment_words(&words);
        log::debug!("{}: tokenized {} words", self.model.name(), words.len());
        corpus
    }

    fn segment_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Corpus {
        if self.config.parallel {
            self.model.segment_corpus_parallel(words)
        } else {
            self.model.segment_corpus(words)
        }
    }

    /// Join one word's tokens back into text.
    pub fn decode_word(&self, tokens: &[Token]) -> String {
        self.model.decode(tokens)
    }
}
