//! Request body extraction for user payloads.

use axum::extract::{FromRequest, Json, Request};

use crate::error::UserError;
use crate::models::UserPayload;

/// JSON body extractor that rejects with [`UserError::MalformedBody`].
///
/// Only the JSON shape is checked here. Presence and format rules depend on
/// the operation and run in the service.
///
/// ```ignore
/// async fn create_user(UserJson(payload): UserJson) -> UserResult<Response> {
///     // payload: UserPayload
/// }
/// ```
pub struct UserJson(pub UserPayload);

impl<S> FromRequest<S> for UserJson
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<UserPayload>::from_request(req, state).await?;
        Ok(UserJson(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_partial_payload() {
        let UserJson(payload) = UserJson::from_request(json_request(r#"{"name":"Ram"}"#), &())
            .await
            .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Ram"));
        assert!(payload.email.is_none());
        assert!(payload.phone.is_none());
    }

    #[tokio::test]
    async fn test_null_field_is_absent() {
        let UserJson(payload) =
            UserJson::from_request(json_request(r#"{"name":null,"email":"a@b.co"}"#), &())
                .await
                .unwrap();

        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let result = UserJson::from_request(json_request(r#"{"name": "Ram""#), &()).await;
        assert!(matches!(result, Err(UserError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"Ram"}"#))
            .unwrap();

        let result = UserJson::from_request(request, &()).await;
        assert!(matches!(result, Err(UserError::MalformedBody(_))));
    }
}
