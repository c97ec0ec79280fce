//! Loading vocabularies and merge rules from disk.

use super::format::{MergesFile, UnigramVocabFile, WordPieceVocabFile};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use subtok_core::{
    BpeEncoder, LongestMatchSegmenter, MergeRules, ProbabilisticSegmenter, Result, SpecialTokens,
    Token, TokenizerError, UnigramVocab, WordPieceVocab,
};

/// Vocabulary loader.
pub struct VocabLoader;

impl VocabLoader {
    /// Load a WordPiece segmenter from a JSON vocabulary file.
    pub fn load_wordpiece(path: &Path) -> Result<LongestMatchSegmenter> {
        Self::wordpiece_from_file(Self::read_json(path)?)
    }

    /// Load a Unigram segmenter from a JSON vocabulary file.
    pub fn load_unigram(path: &Path) -> Result<ProbabilisticSegmenter> {
        Self::unigram_from_file(Self::read_json(path)?)
    }

    /// Load a BPE encoder from a JSON merges file.
    pub fn load_merges(path: &Path) -> Result<BpeEncoder> {
        Self::merges_from_file(Self::read_json(path)?)
    }

    /// Parse a WordPiece vocabulary from a JSON string.
    pub fn wordpiece_from_str(json: &str) -> Result<LongestMatchSegmenter> {
        Self::wordpiece_from_file(serde_json::from_str(json)?)
    }

    /// Parse a Unigram vocabulary from a JSON string.
    pub fn unigram_from_str(json: &str) -> Result<ProbabilisticSegmenter> {
        Self::unigram_from_file(serde_json::from_str(json)?)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let file = File::open(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            TokenizerError::Load(format!("Failed to deserialize {}: {}", path.display(), e))
        })
    }

    fn wordpiece_from_file(data: WordPieceVocabFile) -> Result<LongestMatchSegmenter> {
        let mut special = SpecialTokens::default();
        if let Some(unk) = data.unk_token {
            special.unk_token = Token::from(unk);
        }
        if let Some(prefix) = data.continuation_prefix {
            if prefix.is_empty() {
                return Err(TokenizerError::InvalidConfig(
                    "continuation_prefix must not be empty".to_string(),
                ));
            }
            special.continuation_prefix = Token::from(prefix);
        }

        let vocab = WordPieceVocab::from_pieces(&data.tokens)?;
        log::debug!("loaded WordPiece vocabulary: {} pieces", vocab.len());

        Ok(LongestMatchSegmenter::with_special_tokens(vocab, special))
    }

    fn unigram_from_file(data: UnigramVocabFile) -> Result<ProbabilisticSegmenter> {
        let vocab = UnigramVocab::from_entries(
            data.entries
                .into_iter()
                .map(|entry| (entry.token, entry.log_prob)),
        )?;
        log::debug!("loaded Unigram vocabulary: {} entries", vocab.len());

        let segmenter = ProbabilisticSegmenter::new(vocab);
        Ok(match data.unk_token {
            Some(unk) => segmenter.with_unk_token(unk),
            None => segmenter,
        })
    }

    fn merges_from_file(data: MergesFile) -> Result<BpeEncoder> {
        let mut rules = MergeRules::new();
        for (line, [first, second]) in data.merges.into_iter().enumerate() {
            if first.is_empty() || second.is_empty() {
                return Err(TokenizerError::Load(format!(
                    "Empty token in merge rule {}",
                    line
                )));
            }
            rules.push((Token::from(first), Token::from(second)));
        }
        log::debug!("loaded {} merge rules", rules.len());

        Ok(BpeEncoder::new(rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_core::Segmenter;

    #[test]
    fn test_wordpiece_from_str() {
        let seg = VocabLoader::wordpiece_from_str(
            r###"{"tokens": ["low", "##er", "new", "##est", "wid", "##i", "##d"]}"###,
        )
        .unwrap();
        assert_eq!(seg.segment("widest"), vec!["wid", "##est"]);
        assert_eq!(seg.segment("zzz"), vec!["[UNK]"]);
    }

    #[test]
    fn test_wordpiece_custom_special_tokens() {
        let seg = VocabLoader::wordpiece_from_str(
            r#"{"tokens": ["new", "@@est"], "unk_token": "<unk>", "continuation_prefix": "@@"}"#,
        )
        .unwrap();
        assert_eq!(seg.segment("newest"), vec!["new", "@@est"]);
        assert_eq!(seg.segment("q"), vec!["<unk>"]);
    }

    #[test]
    fn test_wordpiece_explicit_default_special_tokens() {
        let seg = VocabLoader::wordpiece_from_str(
            r###"{
                "tokens": ["new", "##est"],
                "unk_token": "[UNK]",
                "continuation_prefix": "##"
            }"###,
        )
        .unwrap();
        assert_eq!(seg.special_tokens(), &SpecialTokens::default());
        assert_eq!(seg.segment("newest"), vec!["new", "##est"]);
        assert_eq!(seg.segment("newer"), vec!["new", "[UNK]"]);
    }

    #[test]
    fn test_wordpiece_rejects_empty_prefix() {
        let err = VocabLoader::wordpiece_from_str(r#"{"tokens": ["a"], "continuation_prefix": ""}"#)
            .unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_unigram_from_str() {
        let seg = VocabLoader::unigram_from_str(
            r#"{"entries": [
                {"token": "low", "log_prob": -1.0},
                {"token": "er", "log_prob": -2.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(seg.segment("lower"), vec!["low", "er"]);
    }

    #[test]
    fn test_unigram_rejects_empty_token() {
        let err = VocabLoader::unigram_from_str(r#"{"entries": [{"token": "", "log_prob": -1.0}]}"#)
            .unwrap_err();
        assert!(matches!(err, TokenizerError::EmptyToken));
    }

    #[test]
    fn test_malformed_json() {
        let err = VocabLoader::wordpiece_from_str("{not json").unwrap_err();
        assert!(matches!(err, TokenizerError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("subtok_test_missing_vocab.json");
        let err = VocabLoader::load_wordpiece(&path).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }
}
