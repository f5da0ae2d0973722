use actix_web::{HttpResponse, Responder, get};

/// Check node health
///
/// Returns 200 while the control API is serving requests.
#[utoipa::path(
    responses(
        (status = 200, description = "The control API is up"),
    ),
    tag = "Health"
)]
#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
