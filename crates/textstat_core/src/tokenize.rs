/// Characters trimmed from both ends of every token.
pub const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases, splits on whitespace and trims boundary punctuation.
///
/// Interior punctuation is kept (`"don't"` stays one token) and fragments
/// made only of punctuation are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationTokenizer;

impl Tokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(is_separator)
            .map(|fragment| fragment.trim_matches(BOUNDARY_PUNCTUATION))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Tokenize `text` with the default [`PunctuationTokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    PunctuationTokenizer.tokenize(text)
}

// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}
