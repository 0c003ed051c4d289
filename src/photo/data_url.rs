/// `data:` URL encoding for embedded photos

use base64::{engine::general_purpose, Engine as _};

/// Image references shorter than this are treated as broken
pub const MIN_IMAGE_URL_LEN: usize = 100;

/// Build a base64 `data:` URL for the given bytes
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Extract the payload of a base64 `data:` URL.
/// Returns `None` for anything that isn't one.
pub fn decode(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    general_purpose::STANDARD.decode(payload.trim()).ok()
}

/// Mime type declared by a `data:` URL
pub fn mime_type(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let (meta, _) = rest.split_once(',')?;
    meta.split(';').next().filter(|mime| !mime.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reverses_encode() {
        let bytes = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 255];
        let url = encode("image/png", &bytes);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&url), Some(bytes));
        assert_eq!(mime_type(&url), Some("image/png"));
    }

    #[test]
    fn test_decode_rejects_non_data_urls() {
        assert_eq!(decode("https://example.com/shirt.jpg"), None);
        assert_eq!(decode("data:text/plain,hello"), None);
        assert_eq!(decode("data:image/png;base64,@@@"), None);
        assert_eq!(mime_type(""), None);
    }
}
