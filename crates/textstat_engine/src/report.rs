use std::fmt::Write;

use serde::Serialize;
use textstat_core::{analyze_text, top_n_words, TextStats, WordCount};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Statistics and top words for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub stats: TextStats,
    pub top_words: Vec<WordCount>,
}

impl Report {
    pub fn build(text: &str, top: usize) -> Self {
        Self {
            stats: analyze_text(text),
            top_words: top_n_words(text, top),
        }
    }
}

/// Two-section plain text report: `# Text Stats` then `# Top Words`.
pub fn render_text(report: &Report) -> String {
    let mut out = String::from("# Text Stats\n");
    for (key, value) in report.stats.entries() {
        let _ = writeln!(out, "{key}: {value}");
    }
    out.push_str("\n# Top Words\n");
    for entry in &report.top_words {
        let _ = writeln!(out, "{}: {}", entry.word, entry.count);
    }
    out
}

pub fn render_json(report: &Report) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
