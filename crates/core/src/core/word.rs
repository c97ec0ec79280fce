//! Token, word and corpus representations.
//!
//! A word is an ordered run of tokens. Tokens are only ever merged with their
//! right neighbour or split off the front of the remaining input; their order
//! never changes.

use compact_str::CompactString;

/// An immutable string of one or more characters.
pub type Token = CompactString;

/// An ordered sequence of tokens making up one corpus entry.
pub type Word = Vec<Token>;

/// An ordered sequence of words.
pub type Corpus = Vec<Word>;

/// Two adjacent tokens within one word.
///
/// Tuple ordering compares the first token, then the second, as ordinary
/// string order.
pub type TokenPair = (Token, Token);

/// Split a word into single-character tokens.
pub fn split_chars(word: &str) -> Word {
    let mut buf = [0u8; 4];
    word.chars()
        .map(|c| Token::new(c.encode_utf8(&mut buf)))
        .collect()
}

/// Split every entry of a corpus into single-character tokens.
pub fn split_corpus<S: AsRef<str>>(words: &[S]) -> Corpus {
    words.iter().map(|w| split_chars(w.as_ref())).collect()
}

/// Concatenate the tokens of a word back into a string.
pub fn join_tokens(word: &[Token]) -> String {
    let mut out = String::with_capacity(word.iter().map(|t| t.len()).sum());
    for token in word {
        out.push_str(token);
    }
    out
}

/// Total number of tokens across a corpus.
pub fn token_count(corpus: &[Word]) -> usize {
    corpus.iter().map(Vec::len).sum()
}

/// Merge every non-overlapping occurrence of `first` followed by `second`.
///
/// A single greedy pass from left to right: a match is replaced by the
/// concatenation and the scan resumes after it. Returns the number of merges.
pub fn merge_pair(word: &mut Word, first: &str, second: &str) -> usize {
    if word.len() < 2 {
        return 0;
    }

    let mut merged = Word::with_capacity(word.len());
    let mut count = 0;
    let mut i = 0;

    while i < word.len() {
        if i + 1 < word.len() && word[i] == first && word[i + 1] == second {
            let mut token = word[i].clone();
            token.push_str(&word[i + 1]);
            merged.push(token);
            count += 1;
            i += 2;
        } else {
            merged.push(word[i].clone());
            i += 1;
        }
    }

    if count > 0 {
        *word = merged;
    }
    count
}

/// Byte offsets of every character boundary in `word`, including `word.len()`.
///
/// Index `i` of the result is the byte offset of character `i`, so
/// `&word[bounds[a]..bounds[b]]` is the substring of characters `a..b`.
pub(crate) fn char_bounds(word: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = word.char_indices().map(|(idx, _)| idx).collect();
    bounds.push(word.len());
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_chars() {
        let word = split_chars("low");
        assert_eq!(word, vec!["l", "o", "w"]);
        assert!(split_chars("").is_empty());
    }

    #[test]
    fn test_split_chars_multibyte() {
        let word = split_chars("naïve");
        assert_eq!(word, vec!["n", "a", "ï", "v", "e"]);
        assert_eq!(join_tokens(&word), "naïve");
    }

    #[test]
    fn test_split_corpus_and_count() {
        let corpus = split_corpus(&["low", "lower", ""]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(token_count(&corpus), 8);
    }

    #[test]
    fn test_merge_pair() {
        let mut word = split_chars("newest");
        assert_eq!(merge_pair(&mut word, "e", "s"), 1);
        assert_eq!(word, vec!["n", "e", "w", "es", "t"]);

        assert_eq!(merge_pair(&mut word, "x", "y"), 0);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut word = split_chars("aaa");
        assert_eq!(merge_pair(&mut word, "a", "a"), 1);
        assert_eq!(word, vec!["aa", "a"]);

        let mut word = split_chars("aaaa");
        assert_eq!(merge_pair(&mut word, "a", "a"), 2);
        assert_eq!(word, vec!["aa", "aa"]);
    }

    #[test]
    fn test_merge_pair_short_words() {
        let mut word = Word::new();
        assert_eq!(merge_pair(&mut word, "a", "b"), 0);
        let mut word = split_chars("a");
        assert_eq!(merge_pair(&mut word, "a", "b"), 0);
        assert_eq!(word, vec!["a"]);
    }

    #[test]
    fn test_char_bounds() {
        assert_eq!(char_bounds("ab"), vec![0, 1, 2]);
        assert_eq!(char_bounds("é"), vec![0, 2]);
        assert_eq!(char_bounds(""), vec![0]);
    }

    #[test]
    fn test_pair_ordering() {
        let es: TokenPair = (Token::new("e"), Token::new("s"));
        let lo: TokenPair = (Token::new("l"), Token::new("o"));
        let ew: TokenPair = (Token::new("e"), Token::new("w"));
        assert!(es < lo);
        assert!(es < ew);
    }
}
