use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use textstat_logging::textstat_debug;
use thiserror::Error;

use crate::decode::{decode_text, DecodeError};

/// Where the text to analyse comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Provide either --text or --file, not both.")]
    ConflictingSources,
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl InputSource {
    /// Pick the source from the optional inline text and file arguments.
    ///
    /// Both given is a usage error; neither falls back to standard input.
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Result<Self, InputError> {
        match (text, file) {
            (Some(_), Some(_)) => Err(InputError::ConflictingSources),
            (Some(text), None) => Ok(InputSource::Inline(text)),
            (None, Some(path)) => Ok(InputSource::File(path)),
            (None, None) => Ok(InputSource::Stdin),
        }
    }
}

/// Read the full text of `source`. `stdin` is only consumed for [`InputSource::Stdin`].
pub fn read_input<R: Read>(source: InputSource, mut stdin: R) -> Result<String, InputError> {
    match source {
        InputSource::Inline(text) => {
            textstat_debug!("Using {} bytes of inline text", text.len());
            Ok(text)
        }
        InputSource::File(path) => {
            if !path.exists() {
                return Err(InputError::NotFound(path));
            }
            let origin = path.display().to_string();
            let bytes = fs::read(&path).map_err(|source| InputError::Io {
                origin: origin.clone(),
                source,
            })?;
            textstat_debug!("Read {} bytes from {}", bytes.len(), origin);
            let decoded = decode_text(&bytes, &origin)?;
            Ok(normalize_newlines(decoded.text))
        }
        InputSource::Stdin => {
            let origin = "standard input";
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .map_err(|source| InputError::Io {
                    origin: origin.to_string(),
                    source,
                })?;
            textstat_debug!("Read {} bytes from {}", bytes.len(), origin);
            Ok(decode_text(&bytes, origin)?.text)
        }
    }
}

/// Translate `\r\n` and lone `\r` to `\n`, as text-mode file reads do.
///
/// Only file input is translated; stdin and inline text are taken verbatim.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Resolve the arguments to a source and read it.
pub fn resolve_input<R: Read>(
    text: Option<String>,
    file: Option<PathBuf>,
    stdin: R,
) -> Result<String, InputError> {
    let source = InputSource::from_args(text, file)?;
    read_input(source, stdin)
}
