//! Link codec: documents to portable text tokens and back.
//!
//! A token is the URL-safe, unpadded base64 encoding of the document's JSON
//! text, `{ "nodes": [...], "connections": [...] }`, so it can sit in a query
//! string without escaping. Tokens in the standard alphabet (`+`, `/`,
//! padding) are still accepted. Only valid documents are encoded; decoding
//! checks, in order:
//! base64, UTF-8, JSON syntax, presence of `nodes` and `connections`, the
//! entry shapes, and finally [`validate`]. Any failure yields a
//! [`DecodeError`] and nothing else happens.
//!
//! # Example
//!
//! ```rust
//! use stateboard::codec::{decode_token, encode_token};
//! use stateboard::{Document, StateNode, Transition};
//!
//! let doc = Document::new(
//!     vec![StateNode::new("a", "Idle", 10.0, 20.0)],
//!     vec![Transition::new("a", "a").with_label("tick")],
//! );
//!
//! let token = encode_token(&doc).unwrap();
//! assert_eq!(decode_token(&token).unwrap(), doc);
//! assert!(decode_token("not base64!").is_err());
//! ```

pub mod error;
pub mod validate;

pub use error::{DecodeError, EncodeError, ValidationError};
pub use validate::{check, validate};

use crate::core::Document;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::Value;

/// Fields whose presence is required before the shape is even looked at.
const REQUIRED_FIELDS: [&str; 2] = ["nodes", "connections"];

/// Engine for new tokens: URL-safe alphabet, no padding on encode.
const LINK_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Engine for tokens written in the standard alphabet.
const STANDARD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Serialize a document as compact JSON text.
///
/// The document must pass [`validate`]: JSON has no spelling for infinite or
/// NaN coordinates, and a blob that cannot be read back must never replace
/// one that can.
pub fn to_json(document: &Document) -> Result<String, EncodeError> {
    check(document).map_err(EncodeError::Invalid)?;
    Ok(serde_json::to_string(document)?)
}

/// Parse and validate a document from JSON text.
pub fn from_json(json: &str) -> Result<Document, DecodeError> {
    let value: Value = serde_json::from_str(json).map_err(DecodeError::InvalidJson)?;

    for field in REQUIRED_FIELDS {
        match value.get(field) {
            None | Some(Value::Null) => return Err(DecodeError::MissingField { field }),
            Some(_) => {}
        }
    }

    let document: Document = serde_json::from_value(value).map_err(DecodeError::Schema)?;
    check(&document).map_err(DecodeError::Invalid)?;
    Ok(document)
}

/// Encode a document as a link token.
pub fn encode_token(document: &Document) -> Result<String, EncodeError> {
    let json = to_json(document)?;
    Ok(LINK_ENGINE.encode(json.as_bytes()))
}

/// Decode a link token in either alphabet. Surrounding whitespace and
/// padding are ignored.
pub fn decode_token(token: &str) -> Result<Document, DecodeError> {
    let token = token.trim();
    let engine = if token.contains(['+', '/']) {
        &STANDARD_ENGINE
    } else {
        &LINK_ENGINE
    };
    let bytes = engine.decode(token)?;
    let json = String::from_utf8(bytes)?;
    from_json(&json)
}

/// Path that opens the editor on `document`: `/?<param>=<token>`. The token
/// uses only characters that need no escaping in a query value.
pub fn share_path(document: &Document, param: &str) -> Result<String, EncodeError> {
    Ok(format!("/?{}={}", param, encode_token(document)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateNode, Transition};
    use base64::engine::general_purpose::STANDARD;

    fn sample() -> Document {
        Document::new(
            vec![
                StateNode::new("a", "State 1", 0.0, 0.0),
                StateNode::new("b", "Zustand 2 ✓", 120.5, -3.0),
            ],
            vec![
                Transition::new("a", "b").with_label("event1"),
                Transition::new("b", "a"),
            ],
        )
    }

    #[test]
    fn token_survives_a_trip_through_the_link() {
        let doc = sample();
        let token = encode_token(&doc).unwrap();
        assert_eq!(decode_token(&token).unwrap(), doc);
    }

    #[test]
    fn token_is_base64_of_json() {
        let token = encode_token(&Document::default()).unwrap();
        let json = String::from_utf8(LINK_ENGINE.decode(&token).unwrap()).unwrap();
        assert_eq!(json, r#"{"nodes":[],"connections":[]}"#);
        assert!(!token.contains('='));
    }

    #[test]
    fn token_avoids_query_sensitive_characters() {
        // "S100>?" encodes to "+" and "/" in the standard alphabet
        let doc = Document::new(vec![StateNode::new("a", "S100>?", 0.0, 0.0)], Vec::new());
        let json = to_json(&doc).unwrap();
        assert!(STANDARD.encode(&json).contains(['+', '/']));

        let token = encode_token(&doc).unwrap();
        assert!(!token.contains(['+', '/', '=', ' ']));
        assert_eq!(decode_token(&token).unwrap(), doc);
    }

    #[test]
    fn standard_alphabet_tokens_still_decode() {
        let doc = Document::new(vec![StateNode::new("a", "S100>?", 0.0, 0.0)], Vec::new());
        let legacy = STANDARD.encode(to_json(&doc).unwrap());
        assert_eq!(decode_token(&legacy).unwrap(), doc);
    }

    #[test]
    fn non_finite_coordinates_are_not_encoded() {
        let doc = Document::new(
            vec![StateNode::new("a", "A", f64::INFINITY, f64::NAN)],
            Vec::new(),
        );
        match to_json(&doc) {
            Err(EncodeError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![ValidationError::NonFiniteCoordinate { id: "a".into() }]
                );
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
        assert!(encode_token(&doc).is_err());
        assert!(share_path(&doc, "data").is_err());
    }

    #[test]
    fn accepts_tokens_written_by_hand() {
        let json = r#"{"nodes":[{"id":"n1","name":"Idle","x":1,"y":2}],"connections":[{"from":"n1","to":"n1"}]}"#;
        let doc = decode_token(&STANDARD.encode(json)).unwrap();
        assert_eq!(doc.nodes[0].x, 1.0);
        assert_eq!(doc.connections[0].label, None);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_token("%%%not-base64%%%"),
            Err(DecodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn rejects_base64_that_is_not_json() {
        let token = STANDARD.encode("definitely not json");
        assert!(matches!(
            decode_token(&token),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let token = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(
            decode_token(&token),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            from_json(r#"{"connections":[]}"#),
            Err(DecodeError::MissingField { field: "nodes" })
        ));
        assert!(matches!(
            from_json(r#"{"nodes":[],"connections":null}"#),
            Err(DecodeError::MissingField {
                field: "connections"
            })
        ));
        assert!(matches!(
            from_json("[1,2,3]"),
            Err(DecodeError::MissingField { field: "nodes" })
        ));
    }

    #[test]
    fn rejects_wrong_entry_shapes() {
        assert!(matches!(
            from_json(r#"{"nodes":[{"id":"a","name":"A","x":"left","y":0}],"connections":[]}"#),
            Err(DecodeError::Schema(_))
        ));
        assert!(matches!(
            from_json(r#"{"nodes":{},"connections":[]}"#),
            Err(DecodeError::Schema(_))
        ));
    }

    #[test]
    fn rejects_duplicate_node_ids() {
        let json = r#"{"nodes":[{"id":"a","name":"A","x":0,"y":0},{"id":"a","name":"B","x":0,"y":0}],"connections":[]}"#;
        match from_json(json) {
            Err(DecodeError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![ValidationError::DuplicateNodeId { id: "a".into() }]
                );
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"nodes":[],"connections":[],"version":3}"#;
        assert_eq!(from_json(json).unwrap(), Document::default());
    }

    #[test]
    fn share_path_embeds_token() {
        let doc = sample();
        let path = share_path(&doc, "data").unwrap();
        let token = path.strip_prefix("/?data=").unwrap();
        assert_eq!(decode_token(token).unwrap(), doc);
    }
}
