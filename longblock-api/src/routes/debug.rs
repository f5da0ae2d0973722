use actix_web::{
    HttpResponse, Responder, ResponseError,
    http::StatusCode,
    post,
    web::{Data, Json},
};
use longblock::control::{ControlError, ControlResponse, ControlService};
use longblock::error::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failed pause or resume request.
///
/// The body has the same shape as a successful response, with `success` set to `false`
/// and the reason in `message`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct DebugRouteError(#[from] ControlError);

impl ResponseError for DebugRouteError {
    fn status_code(&self) -> StatusCode {
        match self.0.source.kind() {
            ErrorKind::FeatureDisabled => StatusCode::FORBIDDEN,
            ErrorKind::InvalidTransition => StatusCode::CONFLICT,
            ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0.response)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PauseResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Node paused successfully")]
    pub message: String,
}

impl From<ControlResponse> for PauseResponse {
    fn from(response: ControlResponse) -> Self {
        Self {
            success: response.success,
            message: response.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResumeResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Node resumed successfully")]
    pub message: String,
}

impl From<ControlResponse> for ResumeResponse {
    fn from(response: ControlResponse) -> Self {
        Self {
            success: response.success,
            message: response.message,
        }
    }
}

/// Pause block processing
///
/// Requests the node to hold before its next block until it is resumed.
#[utoipa::path(
    responses(
        (status = 200, description = "Pause requested", body = PauseResponse),
        (status = 403, description = "Pausing is disabled on this node", body = PauseResponse),
        (status = 409, description = "The node is already paused or pauses automatically", body = PauseResponse)
    ),
    tag = "Debug"
)]
#[post("/v1/debug/pause")]
pub async fn pause(control: Data<ControlService>) -> Result<impl Responder, DebugRouteError> {
    let response = control.pause()?;

    Ok(Json(PauseResponse::from(response)))
}

/// Resume block processing
///
/// Releases a node that is currently holding before a block.
#[utoipa::path(
    responses(
        (status = 200, description = "The node was resumed", body = ResumeResponse),
        (status = 403, description = "Pausing is disabled on this node", body = ResumeResponse),
        (status = 409, description = "The node is not held", body = ResumeResponse)
    ),
    tag = "Debug"
)]
#[post("/v1/debug/resume")]
pub async fn resume(control: Data<ControlService>) -> Result<impl Responder, DebugRouteError> {
    let response = control.resume()?;

    Ok(Json(ResumeResponse::from(response)))
}
