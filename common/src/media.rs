//! Upload acceptance and data-URL helpers

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// The picker and drop zone accept any `image/*` file.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Encode raw image bytes as a browser-displayable data URL.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Split an image data URL back into media type and bytes.
pub fn parse_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUrl("missing data: scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUrl("missing payload".to_string()))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidDataUrl("not base64 encoded".to_string()))?;

    if !is_image_media_type(media_type) {
        return Err(Error::UnsupportedMedia(media_type.to_string()));
    }

    let bytes = STANDARD.decode(payload)?;
    Ok((media_type.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_media_types() {
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("image/webp"));
    }

    #[test]
    fn test_rejects_non_image_media_types() {
        assert!(!is_image_media_type("text/plain"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type(""));
    }

    #[test]
    fn test_encode_data_url_format() {
        let url = encode_data_url("image/png", b"leaf");
        assert_eq!(url, "data:image/png;base64,bGVhZg==");
    }

    #[test]
    fn test_encode_parse_roundtrip() {
        let bytes = [0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
        let url = encode_data_url("image/png", &bytes);

        let (media_type, decoded) = parse_data_url(&url).expect("parse failed");
        assert_eq!(media_type, "image/png");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        let err = parse_data_url("image/png;base64,AAAA").unwrap_err();
        assert!(matches!(err, Error::InvalidDataUrl(_)));
    }

    #[test]
    fn test_parse_rejects_missing_payload() {
        let err = parse_data_url("data:image/png;base64").unwrap_err();
        assert!(matches!(err, Error::InvalidDataUrl(_)));
    }

    #[test]
    fn test_parse_rejects_unencoded_payload() {
        let err = parse_data_url("data:image/svg+xml,<svg/>").unwrap_err();
        assert!(matches!(err, Error::InvalidDataUrl(_)));
    }

    #[test]
    fn test_parse_rejects_non_image() {
        let err = parse_data_url("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, Error::UnsupportedMedia(media) if media == "text/plain"));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let err = parse_data_url("data:image/png;base64,not-base64!").unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }
}
