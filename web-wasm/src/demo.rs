//! Embedded sample image backing the demo button

use plantguard_common::{encode_data_url, UploadedImage};

const SAMPLE_MEDIA_TYPE: &str = "image/png";
const SAMPLE_FILE_NAME: &str = "demo-leaf.png";
const SAMPLE_BYTES: &[u8] = include_bytes!("../assets/demo-leaf.png");

/// The bundled leaf photo, encoded the same way an uploaded file would be.
pub fn sample_image() -> UploadedImage {
    UploadedImage {
        file_name: SAMPLE_FILE_NAME.to_string(),
        data_url: encode_data_url(SAMPLE_MEDIA_TYPE, SAMPLE_BYTES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantguard_common::parse_data_url;

    #[test]
    fn test_sample_image_is_a_valid_image_data_url() {
        let image = sample_image();
        assert_eq!(image.file_name, "demo-leaf.png");

        let (media_type, bytes) = parse_data_url(&image.data_url).expect("parse failed");
        assert_eq!(media_type, "image/png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
