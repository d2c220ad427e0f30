use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Extracts the payload of a `data:<mime>;base64,<payload>` URL. Input
/// without the `data:` header is taken as bare base64.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data_url = data_url.trim();
    let payload = match data_url.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or("", |(_, payload)| payload),
        None => data_url,
    };

    // Form encoding can leave line breaks inside long payloads.
    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    STANDARD.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_jpeg_data_url() {
        let encoded = format!("data:image/jpeg;base64,{}", STANDARD.encode(b"\xff\xd8\xff"));

        assert_eq!(decode_data_url(&encoded).unwrap(), b"\xff\xd8\xff");
    }

    #[test]
    fn test_decode_other_mime_types_and_bare_payloads() {
        let payload = STANDARD.encode(b"png-bytes");

        assert_eq!(
            decode_data_url(&format!("data:image/png;base64,{}", payload)).unwrap(),
            b"png-bytes"
        );
        assert_eq!(decode_data_url(&payload).unwrap(), b"png-bytes");
        assert_eq!(
            decode_data_url(&format!("{}\r\n", payload)).unwrap(),
            b"png-bytes"
        );
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(decode_data_url("data:image/jpeg;base64,@@@@").is_err());
        assert!(decode_data_url("not base64 at all!").is_err());
    }

    #[test]
    fn test_decode_header_without_payload_is_empty() {
        assert_eq!(decode_data_url("data:image/jpeg;base64").unwrap(), Vec::<u8>::new());
    }
}
