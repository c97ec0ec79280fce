//! Printing tokenized corpora.

use anyhow::Result as AnyhowResult;
use serde::Serialize;
use subtok_tokenizer::Corpus;

#[derive(Serialize)]
struct WordRecord<'a> {
    word: &'a str,
    tokens: Vec<&'a str>,
}

/// Print one line per word, or a JSON array when `json` is set.
pub fn print_corpus(words: &[String], corpus: &Corpus, json: bool) -> AnyhowResult<()> {
    if json {
        let records: Vec<WordRecord<'_>> = words
            .iter()
            .zip(corpus)
            .map(|(word, tokens)| WordRecord {
                word,
                tokens: tokens.iter().map(|t| t.as_str()).collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (word, tokens) in words.iter().zip(corpus) {
            println!("{}\t{}", word, format_tokens(tokens));
        }
    }
    Ok(())
}

/// Render tokens as `[a, b, c]`.
pub fn format_tokens<T: AsRef<str>>(tokens: &[T]) -> String {
    let parts: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    format!("[{}]", parts.join(", "))
}
