//! Handler tests for the Users domain
//!
//! These drive the domain router in-process against the in-memory repository:
//! - Request deserialization and presence/format rules
//! - Response envelopes and HTTP status codes
//! - Error responses, including store failures

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> (Router, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::new();
    let router = handlers::router(UserService::new(repo.clone()));
    (router, repo)
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn seed_ram(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram", "email": "ram@ram.com", "phone": "9812345678" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["user"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201_with_envelope() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram", "email": "ram@ram.com", "phone": "9812345678" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User has been added successfully!");
    let user = &body["data"]["user"];
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Ram");
    assert_eq!(user["email"], "ram@ram.com");
    assert_eq!(user["phone"], "9812345678");
    assert!(user["createdAt"].is_string());
    assert!(user["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let (app, repo) = app();
    seed_ram(&app).await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram", "email": "ram@ram.com", "phone": "9812345678" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Email address already exists", "data": {} })
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_invalid_formats_returns_every_violation() {
    let (app, repo) = app();

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram1", "email": "ram@", "phone": "9812" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "ValidationError",
            "errors": [
                { "field": "name", "message": "Name can only contains alphabets and whitespaces" },
                { "field": "email", "message": "Provide a valid email address" },
                { "field": "phone", "message": "Mobile number can only contain 10 digits or 7 for landline numbers" }
            ]
        })
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_missing_field_returns_400() {
    let (app, _) = app();

    for payload in [
        json!({ "name": "Ram", "email": "ram@ram.com" }),
        json!({ "name": "", "email": "ram@ram.com", "phone": "9812345678" }),
        json!({ "name": null, "email": "ram@ram.com", "phone": "9812345678" }),
        json!({}),
    ] {
        let (status, body) = send(&app, request("POST", "/", Some(payload))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "message": "All fields are required!" })
        );
    }
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let (app, _) = app();

    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Ram\""))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Request body must be valid JSON" })
    );
}

#[tokio::test]
async fn test_list_users() {
    let (app, _) = app();

    let (status, body) = send(&app, request("GET", "/", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let builder = TestDataBuilder::from_test_name("handler_list");
    seed_ram(&app).await;
    send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({
                "name": builder.name(),
                "email": builder.email("second"),
                "phone": builder.phone()
            })),
        ),
    )
    .await;

    let (status, body) = send(&app, request("GET", "/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Users found");
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[1]["id"], 2);
}

#[tokio::test]
async fn test_get_user() {
    let (app, _) = app();

    let (_, created) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram", "email": "ram@ram.com", "phone": "9812345678" })),
        ),
    )
    .await;
    let id = created["data"]["user"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, request("GET", &format!("/{}", id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User found");
    assert_eq!(body["data"]["user"], created["data"]["user"]);

    let (status, body) = send(&app, request("GET", "/10000", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "User not found!" }));
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let (app, _) = app();
    seed_ram(&app).await;

    let (status, body) = send(&app, request("GET", "/abc", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found!");
}

#[tokio::test]
async fn test_replace_user() {
    let (app, _) = app();
    let id = seed_ram(&app).await;

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/{}", id),
            Some(json!({ "name": "Hari", "email": "hari@hari.com", "phone": "9812345699" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    let user = &body["data"]["user"];
    assert_eq!(user["id"], id);
    assert_eq!(user["name"], "Hari");
    assert_eq!(user["email"], "hari@hari.com");
    assert_eq!(user["phone"], "9812345699");
}

#[tokio::test]
async fn test_replace_unknown_user_returns_404() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        request(
            "PUT",
            "/10000",
            Some(json!({ "name": "Hari", "email": "hari@hari.com", "phone": "9812345699" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_requires_every_field() {
    let (app, _) = app();
    let id = seed_ram(&app).await;

    let (status, body) = send(
        &app,
        request("PUT", &format!("/{}", id), Some(json!({ "name": "Hari" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required!");
}

#[tokio::test]
async fn test_replace_with_taken_email_returns_409() {
    let (app, _) = app();
    seed_ram(&app).await;
    let (_, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Hari", "email": "hari@hari.com", "phone": "1234567" })),
        ),
    )
    .await;
    let hari = body["data"]["user"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/{}", hari),
            Some(json!({ "name": "Hari", "email": "ram@ram.com", "phone": "1234567" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_patch_user_changes_only_supplied_fields() {
    let (app, _) = app();
    let id = seed_ram(&app).await;

    let (status, body) = send(
        &app,
        request("PATCH", &format!("/{}", id), Some(json!({ "name": "Ram Kumar" }))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    let user = &body["data"]["user"];
    assert_eq!(user["name"], "Ram Kumar");
    assert_eq!(user["email"], "ram@ram.com");
    assert_eq!(user["phone"], "9812345678");
}

#[tokio::test]
async fn test_patch_invalid_field_returns_400() {
    let (app, _) = app();
    let id = seed_ram(&app).await;

    let (status, body) = send(
        &app,
        request("PATCH", &format!("/{}", id), Some(json!({ "phone": "12" }))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ValidationError");
    assert_eq!(body["errors"][0]["field"], "phone");
}

#[tokio::test]
async fn test_patch_unknown_user_returns_404() {
    let (app, _) = app();

    let (status, _) = send(
        &app,
        request("PATCH", "/10000", Some(json!({ "name": "Hari" }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let (app, repo) = app();
    let id = seed_ram(&app).await;
    let (_, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Hari", "email": "hari@hari.com", "phone": "1234567" })),
        ),
    )
    .await;
    let hari = body["data"]["user"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, request("DELETE", &format!("/{}", id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "User deleted successfully!", "data": {} })
    );
    assert_eq!(repo.count().await.unwrap(), 1);

    let (status, body) = send(&app, request("GET", &format!("/{}", id), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "User not found!" }));

    let (status, body) = send(&app, request("GET", "/", None)).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![hari]);

    let (status, _) = send(&app, request("DELETE", &format!("/{}", id), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_returns_not_found_body() {
    let (app, _) = app();

    let (status, body) = send(&app, request("DELETE", "/", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
}

/// Store that fails every call, standing in for a lost database
struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn create(&self, _user: ValidUser) -> UserResult<User> {
        Err(UserError::Unhandled("connection refused".into()))
    }

    async fn find_by_id(&self, _id: UserId) -> UserResult<Option<User>> {
        Err(UserError::Unhandled("connection refused".into()))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        Err(UserError::Unhandled("connection refused".into()))
    }

    async fn update(&self, _id: UserId, _user: ValidUser) -> UserResult<Option<User>> {
        Err(UserError::Unhandled("connection refused".into()))
    }

    async fn delete(&self, _id: UserId) -> UserResult<bool> {
        Err(UserError::Unhandled("connection refused".into()))
    }

    async fn count(&self) -> UserResult<u64> {
        Err(UserError::Unhandled("connection refused".into()))
    }
}

#[tokio::test]
async fn test_store_failure_returns_500_without_detail() {
    let app = handlers::router(UserService::new(FailingRepository));

    let (status, body) = send(&app, request("GET", "/", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error!" }));

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/",
            Some(json!({ "name": "Ram", "email": "ram@ram.com", "phone": "9812345678" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error!" }));
}
