//! Textstat core: pure tokenizer, statistics and frequency ranking.
mod frequency;
mod stats;
mod tokenize;

pub use frequency::{top_n_words, top_n_words_with, FrequencyTable, WordCount};
pub use stats::{analyze_text, analyze_text_with, count_lines, TextStats};
pub use tokenize::{tokenize, PunctuationTokenizer, Tokenizer, BOUNDARY_PUNCTUATION};
