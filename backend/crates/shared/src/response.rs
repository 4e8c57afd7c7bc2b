//! Response Envelope
//!
//! Every successful response is `{ "success": true, "message"?: ..., ...payload }`.
//! The payload struct is flattened into the envelope, so `data`, `count`,
//! `token` and `user` sit next to `success`.

use serde::Serialize;
use std::borrow::Cow;

/// 成功レスポンスの共通エンベロープ
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Cow<'static, str>>,
    #[serde(flatten)]
    payload: T,
}

/// Payload for responses that carry only a message.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoPayload {}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<NoPayload> {
    pub fn message_only(message: impl Into<Cow<'static, str>>) -> Self {
        Self::ok(NoPayload {}).with_message(message)
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Counted {
        count: usize,
        data: Vec<u8>,
    }

    #[test]
    fn test_payload_is_flattened() {
        let json = serde_json::to_value(ApiResponse::ok(Counted {
            count: 2,
            data: vec![1, 2],
        }))
        .unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][1], 2);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_only() {
        let json = serde_json::to_value(ApiResponse::message_only("Note deleted successfully"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "message": "Note deleted successfully"})
        );
    }
}
