//! Payload encoding for rendering endpoint URLs.
//!
//! mermaid.ink accepts the diagram source directly in the URL path, encoded
//! as URL-safe base64. The encoding keeps its `=` padding.

use base64::{Engine as _, engine::general_purpose::URL_SAFE};

/// Encodes a diagram payload as padded URL-safe base64 of its UTF-8 bytes.
///
/// # Examples
///
/// ```
/// assert_eq!(inklink::encode_payload("graph TD; A-->B"), "Z3JhcGggVEQ7IEEtLT5C");
/// ```
pub fn encode_payload(payload: &str) -> String {
    URL_SAFE.encode(payload.as_bytes())
}

/// Builds the image URL for `payload` under `endpoint`.
///
/// The encoded payload is appended to `endpoint` verbatim, so the endpoint
/// carries its own trailing `/`.
pub fn diagram_url(endpoint: &str, payload: &str) -> String {
    let encoded = encode_payload(payload);
    let mut url = String::with_capacity(endpoint.len() + encoded.len());
    url.push_str(endpoint);
    url.push_str(&encoded);
    url
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_encode_known_payload() {
        assert_eq!(
            diagram_url(DEFAULT_ENDPOINT, "graph TD; A-->B"),
            "https://mermaid.ink/img/Z3JhcGggVEQ7IEEtLT5C"
        );
    }

    #[test]
    fn test_encode_keeps_padding() {
        // 16 bytes leave one byte over, which pads with "=="
        let encoded = encode_payload("graph TD; A-->B\n");
        assert!(encoded.ends_with("=="), "got {encoded}");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        // Standard alphabet gives "37/vv78=" for these bytes
        let encoded = encode_payload("\u{7FF}\u{FFFF}");

        assert_eq!(encoded, "37_vv78=");
    }

    #[test]
    fn test_decoding_url_yields_original_payload() {
        let payload = "sequenceDiagram\n    Alice->>Bob: Hi ✓\n    Bob-->>Alice: Hello?\n";
        let url = diagram_url(DEFAULT_ENDPOINT, payload);

        let encoded = url.strip_prefix(DEFAULT_ENDPOINT).unwrap();
        let decoded = URL_SAFE.decode(encoded).unwrap();

        assert_eq!(decoded, payload.as_bytes());
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(diagram_url(DEFAULT_ENDPOINT, ""), DEFAULT_ENDPOINT);
    }
}
