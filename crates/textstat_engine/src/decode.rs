use encoding_rs::{Encoding, UTF_8};
use textstat_logging::{textstat_debug, textstat_info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    pub bom_removed: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{origin} is not valid {encoding} text")]
    Malformed { origin: String, encoding: String },
}

/// Decode raw input bytes: BOM -> strict UTF-8.
///
/// A byte order mark selects its encoding and is removed. Without one the
/// bytes must be well-formed UTF-8; nothing is replaced.
pub fn decode_text(bytes: &[u8], origin: &str) -> Result<DecodedText, DecodeError> {
    let (encoding, body, bom_removed) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            textstat_info!("Removed {} byte order mark from {}", encoding.name(), origin);
            (encoding, &bytes[bom_len..], true)
        }
        None => (UTF_8, bytes, false),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| DecodeError::Malformed {
            origin: origin.to_string(),
            encoding: encoding.name().to_string(),
        })?;

    textstat_debug!(
        "Decoded {} bytes from {} as {}",
        bytes.len(),
        origin,
        encoding.name()
    );
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
        bom_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_passes_through() {
        let decoded = decode_text("héllo".as_bytes(), "test").unwrap();
        assert_eq!(decoded.text, "héllo");
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert!(!decoded.bom_removed);
    }

    #[test]
    fn utf8_bom_is_removed() {
        let decoded = decode_text(b"\xEF\xBB\xBFabc", "test").unwrap();
        assert_eq!(decoded.text, "abc");
        assert!(decoded.bom_removed);
    }

    #[test]
    fn utf16le_with_bom_is_decoded() {
        let decoded = decode_text(b"\xFF\xFEh\x00i\x00", "test").unwrap();
        assert_eq!(decoded.text, "hi");
        assert_eq!(decoded.encoding_label, "UTF-16LE");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_text(b"ok \xC3\x28", "notes.txt").unwrap_err();
        assert_eq!(
            err,
            DecodeError::Malformed {
                origin: "notes.txt".into(),
                encoding: "UTF-8".into(),
            }
        );
        assert_eq!(err.to_string(), "notes.txt is not valid UTF-8 text");
    }
}
