use utoipa::OpenApi;

/// Top-level API document; each domain contributes its own under a path prefix
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User IMS",
        version = "1.0.0",
        description = "User IMS a RESTful API developed for managing user information such as name, email, phone.",
        license(name = "MIT", url = "https://spdx.org/licenses/MIT.html")
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
