use serde::Serialize;

use crate::tokenize::{PunctuationTokenizer, Tokenizer};

/// Character, word and line counts for one block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    /// Named counts in report order: `chars`, `words`, `lines`.
    pub fn entries(&self) -> [(&'static str, usize); 3] {
        [
            ("chars", self.chars),
            ("words", self.words),
            ("lines", self.lines),
        ]
    }
}

pub fn analyze_text(text: &str) -> TextStats {
    analyze_text_with(text, &PunctuationTokenizer)
}

pub fn analyze_text_with(text: &str, tokenizer: &dyn Tokenizer) -> TextStats {
    TextStats {
        chars: text.chars().count(),
        words: tokenizer.tokenize(text).len(),
        lines: count_lines(text),
    }
}

/// Count lines the way a line splitter without keep-ends does.
///
/// Every boundary closes a line, `\r\n` is a single boundary and a trailing
/// segment without a terminator still counts. The empty string has no lines.
pub fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut open_segment = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_line_boundary(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines += 1;
            open_segment = false;
        } else {
            open_segment = true;
        }
    }
    if open_segment {
        lines += 1;
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
