//! Response envelopes of the object store API.

use serde::Deserialize;
use serde_json::Value;

/// `GET /buckets/{bucket}/objects`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ObjectsEnvelope {
    #[serde(default)]
    pub objects: Vec<Value>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// `POST /buckets/{bucket}/objects`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ObjectEnvelope {
    pub object: Value,
}

/// Error payload (`{"status": 404, "message": "..."}`)
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub(super) fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"status": 404, "message": "No objects found"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("No objects found"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Bad key"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad key"));
    }

    #[test]
    fn objects_envelope_tolerates_missing_total() {
        let env: ObjectsEnvelope = serde_json::from_str(r#"{"objects": [{"id": "1"}]}"#).unwrap();
        assert_eq!(env.objects.len(), 1);
        assert!(env.total.is_none());
    }
}
