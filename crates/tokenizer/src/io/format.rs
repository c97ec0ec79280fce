//! Format definitions for vocabulary serialization.

use serde::{Deserialize, Serialize};
use subtok_core::UnigramEntry;

/// WordPiece vocabulary file.
///
/// ```json
/// { "tokens": ["low", "##er"], "unk_token": "[UNK]", "continuation_prefix": "##" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPieceVocabFile {
    /// Pieces, continuation entries already marked
    pub tokens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unk_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_prefix: Option<String>,
}

/// Unigram vocabulary file. Entry order is the scan order.
///
/// ```json
/// { "entries": [{ "token": "low", "log_prob": -1.0 }], "unk_token": "[UNK]" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnigramVocabFile {
    pub entries: Vec<UnigramEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unk_token: Option<String>,
}

/// Learned BPE merges, in rank order.
///
/// ```json
/// { "merges": [["e", "s"], ["es", "t"]] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergesFile {
    pub merges: Vec<[String; 2]>,
}
