use serde_json::json;

use crate::event::{HandlerResponse, ALLOW_ORIGIN, CONTENT_TYPE};

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn into_response(self) -> HandlerResponse {
        match self {
            HandlerError::MethodNotAllowed(method) => {
                tracing::debug!(%method, "Rejected request method");
                HandlerResponse::new(405)
                    .with_header(ALLOW_ORIGIN, "*")
                    .with_body(json!({ "error": "Method not allowed" }).to_string())
            }
            HandlerError::UnknownAction(ref action) => {
                tracing::debug!(%action, "Unknown action requested");
                error_response(400, self.to_string())
            }
            HandlerError::Serialization(err) => {
                tracing::error!("Internal Server Error: {}", err);
                error_response(500, "Internal Server Error".to_string())
            }
        }
    }
}

fn error_response(status: u16, message: String) -> HandlerResponse {
    HandlerResponse::new(status)
        .with_header(CONTENT_TYPE, "application/json")
        .with_header(ALLOW_ORIGIN, "*")
        .with_body(json!({ "error": message }).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_response() {
        let response = HandlerError::MethodNotAllowed("DELETE".into()).into_response();
        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, r#"{"error":"Method not allowed"}"#);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(response.header(ALLOW_ORIGIN), Some("*"));
    }

    #[test]
    fn test_unknown_action_response() {
        let response = HandlerError::UnknownAction("book".into()).into_response();
        assert_eq!(response.status_code, 400);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Unknown action: book");
        assert_eq!(response.header(CONTENT_TYPE), Some("application/json"));
    }
}
