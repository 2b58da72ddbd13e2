//! `{success, message, data}` envelopes and their OpenAPI response docs.

use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

use crate::models::User;
use crate::validation::FieldViolation;

/// Envelope messages. Clients compare against these strings.
pub mod messages {
    pub const USERS_FOUND: &str = "Users found";
    pub const USER_FOUND: &str = "User found";
    pub const USER_ADDED: &str = "User has been added successfully!";
    pub const USER_UPDATED: &str = "User updated successfully";
    pub const USER_DELETED: &str = "User deleted successfully!";
    pub const FIELDS_REQUIRED: &str = "All fields are required!";
    pub const VALIDATION_ERROR: &str = "ValidationError";
    pub const EMAIL_EXISTS: &str = "Email address already exists";
    pub const USER_NOT_FOUND: &str = "User not found!";
    pub const MALFORMED_BODY: &str = "Request body must be valid JSON";
}

/// Successful response envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserData {
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersData {
    pub users: Vec<User>,
}

/// Serializes as `{}`
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct EmptyData {}

/// Failure envelope for client errors.
///
/// `data` is only present on conflicts and `errors` only on format violations.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EmptyData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl FailureBody {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            errors: None,
        }
    }

    pub fn with_empty_data(mut self) -> Self {
        self.data = Some(EmptyData {});
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    examples(
        ("FieldsRequired" = (
            summary = "name, email or phone missing",
            value = json!({ "success": false, "message": "All fields are required!" })
        )),
        ("ValidationError" = (
            summary = "one entry per field that failed its format rule",
            value = json!({
                "success": false,
                "message": "ValidationError",
                "errors": [
                    { "field": "name", "message": "Name can only contains alphabets and whitespaces" },
                    { "field": "email", "message": "Provide a valid email address" }
                ]
            })
        )),
        ("MalformedBody" = (
            summary = "body is not a JSON object",
            value = json!({ "success": false, "message": "Request body must be valid JSON" })
        ))
    )
)]
pub struct BadRequestResponse(pub FailureBody);

#[derive(ToResponse)]
#[response(
    description = "Conflict - another user already has this email",
    content_type = "application/json",
    example = json!({ "success": false, "message": "Email address already exists", "data": {} })
)]
pub struct EmailConflictResponse(pub FailureBody);

#[derive(ToResponse)]
#[response(
    description = "No user with this id",
    content_type = "application/json",
    example = json!({ "success": false, "message": "User not found!" })
)]
pub struct UserNotFoundResponse(pub FailureBody);
