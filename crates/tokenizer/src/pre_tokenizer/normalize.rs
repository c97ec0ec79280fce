//! Unicode normalization for pre-tokenization.
//!
//! This module provides Unicode normalization (NFC, NFD, NFKC, NFKD) and
//! optional lowercasing, applied before segmentation.

use unicode_normalization::UnicodeNormalization;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No normalization
    None,
}

/// Unicode normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Normalization form to apply
    form: NormalizationForm,
    /// Lowercase after normalizing
    lowercase: bool,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self {
            form,
            lowercase: false,
        }
    }

    /// Create an NFC normalizer (default).
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Lowercase text after normalization.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        let normalized: String = match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
            NormalizationForm::None => text.to_string(),
        };

        if self.lowercase {
            normalized.to_lowercase()
        } else {
            normalized
        }
    }

    /// Check if normalization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.form != NormalizationForm::None || self.lowercase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let normalizer = Normalizer::nfc();
        // e + combining acute accent
        let result = normalizer.normalize("caf\u{0065}\u{0301}");
        assert_eq!(result, "caf\u{00e9}");
        assert_eq!(result.chars().count(), 4);
    }

    #[test]
    fn test_nfd_normalization() {
        let normalizer = Normalizer::new(NormalizationForm::NFD);
        assert_eq!(normalizer.normalize("\u{00e9}"), "e\u{0301}");
    }

    #[test]
    fn test_nfkc_normalization() {
        let normalizer = Normalizer::new(NormalizationForm::NFKC);
        // fi ligature
        assert_eq!(normalizer.normalize("\u{FB01}ne"), "fine");
    }

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::nfc().with_lowercase(true);
        assert_eq!(normalizer.normalize("Newest WIDEST"), "newest widest");
    }

    #[test]
    fn test_is_enabled() {
        assert!(Normalizer::nfc().is_enabled());
        assert!(!Normalizer::new(NormalizationForm::None).is_enabled());
        assert!(Normalizer::new(NormalizationForm::None)
            .with_lowercase(true)
            .is_enabled());
    }
}
