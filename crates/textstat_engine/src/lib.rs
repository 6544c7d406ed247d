//! Textstat engine: input resolution, decoding and report rendering.
mod decode;
mod report;
mod source;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use report::{render_json, render_text, Report, ReportError};
pub use source::{read_input, resolve_input, InputError, InputSource};
