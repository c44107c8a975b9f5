//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Both fields are optional on the wire so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostPayload {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Decode a raw request body. An empty or whitespace-only body is the
    /// same as `{}`, so missing fields reach validation.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("T"));
        assert_eq!(payload.content, None);

        let empty: PostPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PostPayload::default());
    }

    #[test]
    fn test_empty_body_is_default() {
        assert_eq!(PostPayload::from_json(b"").unwrap(), PostPayload::default());
        assert_eq!(PostPayload::from_json(b" \r\n").unwrap(), PostPayload::default());
        assert_eq!(
            PostPayload::from_json(br#"{"title":"T","content":"C"}"#).unwrap(),
            PostPayload::new("T", "C")
        );
    }

    #[test]
    fn test_malformed_or_mistyped_body_is_an_error() {
        assert!(PostPayload::from_json(b"{not json").is_err());
        assert!(PostPayload::from_json(br#"{"title":5,"content":"C"}"#).is_err());
    }

    #[test]
    fn test_null_fields_deserialize_as_none() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":null,"content":"C"}"#).unwrap();
        assert_eq!(payload.title, None);
    }
}
