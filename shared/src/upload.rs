use serde_json::Value;
use thiserror::Error;

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the unsigned upload preset
pub const UPLOAD_PRESET_FIELD: &str = "upload_preset";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never produced a readable response
    #[error("transport error: {0}")]
    Transport(String),
    /// The host answered without a secure URL
    #[error("upload rejected: {}", .message.as_deref().unwrap_or("no secure_url in response"))]
    Rejected { message: Option<String> },
}

impl UploadError {
    /// Text shown to the customer in the blocking alert
    pub fn alert_message(&self) -> &'static str {
        match self {
            UploadError::Transport(_) => "Error connecting to Cloudinary.",
            UploadError::Rejected { .. } => "Upload failed. Please check your Cloudinary settings.",
        }
    }
}

/// Interpret a raw response body from the upload endpoint.
///
/// Any JSON body counts as an answer from the host: it is a success only
/// when `secure_url` is a non-empty string, otherwise a rejection. Only a
/// body that is not JSON at all is a transport failure.
pub fn parse_upload_response(body: &str) -> Result<String, UploadError> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| UploadError::Transport(format!("unreadable response: {}", e)))?;

    match response.get("secure_url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(UploadError::Rejected {
            message: error_message(&response),
        }),
    }
}

/// Cloudinary reports `{"error": {"message": ...}}`; a bare string is accepted too
fn error_message(response: &Value) -> Option<String> {
    let error = response.get("error")?;
    error
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_url_is_success() {
        let url = parse_upload_response(
            r#"{"public_id":"abc","secure_url":"https://host/img.jpg","bytes":1024}"#,
        )
        .unwrap();
        assert_eq!(url, "https://host/img.jpg");
    }

    #[test]
    fn test_empty_object_is_rejected() {
        let err = parse_upload_response("{}").unwrap_err();
        assert_eq!(err, UploadError::Rejected { message: None });
        assert_eq!(
            err.alert_message(),
            "Upload failed. Please check your Cloudinary settings."
        );
    }

    #[test]
    fn test_empty_secure_url_is_rejected() {
        let err = parse_upload_response(r#"{"secure_url":""}"#).unwrap_err();
        assert!(matches!(err, UploadError::Rejected { .. }));
    }

    #[test]
    fn test_error_body_message_is_kept() {
        let err =
            parse_upload_response(r#"{"error":{"message":"Upload preset not found"}}"#).unwrap_err();
        assert_eq!(
            err,
            UploadError::Rejected {
                message: Some("Upload preset not found".to_string())
            }
        );
        assert_eq!(err.to_string(), "upload rejected: Upload preset not found");
    }

    #[test]
    fn test_unexpected_error_shape_is_rejected() {
        let err = parse_upload_response(r#"{"error":"Invalid upload preset"}"#).unwrap_err();
        assert_eq!(
            err,
            UploadError::Rejected {
                message: Some("Invalid upload preset".to_string())
            }
        );
        assert_eq!(
            err.alert_message(),
            "Upload failed. Please check your Cloudinary settings."
        );

        let err = parse_upload_response(r#"{"error":{"code":400}}"#).unwrap_err();
        assert_eq!(err, UploadError::Rejected { message: None });
    }

    #[test]
    fn test_non_string_secure_url_is_rejected() {
        let err = parse_upload_response(r#"{"secure_url":42}"#).unwrap_err();
        assert!(matches!(err, UploadError::Rejected { .. }));

        let err = parse_upload_response("[]").unwrap_err();
        assert!(matches!(err, UploadError::Rejected { .. }));
    }

    #[test]
    fn test_unreadable_body_is_transport_failure() {
        let err = parse_upload_response("<html>502</html>").unwrap_err();
        assert!(matches!(err, UploadError::Transport(_)));
        assert_eq!(err.alert_message(), "Error connecting to Cloudinary.");
    }
}
