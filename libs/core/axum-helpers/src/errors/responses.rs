//! Reusable OpenAPI response types for the `{error}` envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Internal Server Error!" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "No route matches the request",
    content_type = "application/json",
    example = json!({ "error": "Not Found" })
)]
pub struct RouteNotFoundResponse(pub ErrorResponse);
