//! Saving vocabularies and merge rules to disk.

use super::format::{MergesFile, UnigramVocabFile, WordPieceVocabFile};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use subtok_core::{
    LongestMatchSegmenter, MergeRules, ProbabilisticSegmenter, Result, TokenizerError,
    DEFAULT_CONTINUATION_PREFIX, DEFAULT_UNK_TOKEN,
};

/// Vocabulary saver.
pub struct VocabSaver;

impl VocabSaver {
    /// Save a WordPiece segmenter's vocabulary. Pieces are written sorted.
    pub fn save_wordpiece(segmenter: &LongestMatchSegmenter, path: &Path) -> Result<()> {
        let special = segmenter.special_tokens();
        let data = WordPieceVocabFile {
            tokens: segmenter
                .vocab()
                .sorted_pieces()
                .into_iter()
                .map(str::to_string)
                .collect(),
            unk_token: (special.unk_token != DEFAULT_UNK_TOKEN)
                .then(|| special.unk_token.to_string()),
            continuation_prefix: (special.continuation_prefix != DEFAULT_CONTINUATION_PREFIX)
                .then(|| special.continuation_prefix.to_string()),
        };
        Self::write_json(path, &data)
    }

    /// Save a Unigram segmenter's vocabulary, preserving entry order.
    pub fn save_unigram(segmenter: &ProbabilisticSegmenter, path: &Path) -> Result<()> {
        let data = UnigramVocabFile {
            entries: segmenter.vocab().entries().to_vec(),
            unk_token: (segmenter.unk_token() != DEFAULT_UNK_TOKEN)
                .then(|| segmenter.unk_token().to_string()),
        };
        Self::write_json(path, &data)
    }

    /// Save merge rules in rank order.
    pub fn save_merges(rules: &MergeRules, path: &Path) -> Result<()> {
        let data = MergesFile {
            merges: rules
                .pairs()
                .iter()
                .map(|(a, b)| [a.to_string(), b.to_string()])
                .collect(),
        };
        Self::write_json(path, &data)
    }

    fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| TokenizerError::Io {
                path: parent.to_path_buf(),
                err,
            })?;
        }

        let file = File::create(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, data).map_err(|e| {
            TokenizerError::Save(format!("Failed to serialize {}: {}", path.display(), e))
        })?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
