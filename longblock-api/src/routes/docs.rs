use actix_web::{Responder, get, web::Json};
use utoipa::OpenApi;

use crate::routes::debug::{PauseResponse, ResumeResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::debug::pause,
        crate::routes::debug::resume,
        crate::routes::health_check::health_check,
    ),
    components(schemas(PauseResponse, ResumeResponse)),
    tags(
        (name = "Debug", description = "Pause and resume block processing"),
        (name = "Health", description = "Liveness of the control API"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document of the control API.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    Json(ApiDoc::openapi())
}
