//! Response helpers shared by handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{"Success": "<message>"}` body returned by deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessBody {
    #[serde(rename = "Success")]
    pub success: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn success(message: impl Into<String>) -> (StatusCode, Json<SuccessBody>) {
    ok(SuccessBody {
        success: message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_uses_capitalized_key() {
        let (status, Json(body)) = success("Deleted planet from favorites");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"Success": "Deleted planet from favorites"})
        );
    }
}
