use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::adapters::outbound::activity_store::ActivityStoreError;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body read by the frontend.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn message_response(message: String) -> Response {
    Json(MessageResponse { message }).into_response()
}

pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: "internal server error".into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::ActivityNotFound(_)
        | ApplicationError::Store(ActivityStoreError::UnknownActivity(_))
        | ApplicationError::Domain(RosterError::NotSignedUp { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(RosterError::AlreadySignedUp { .. })
        | ApplicationError::Domain(RosterError::ActivityFull { .. })
        | ApplicationError::Store(ActivityStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::Store(ActivityStoreError::Backend(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn error_response(error: &ApplicationError) -> Response {
    let status = status_for(error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        return internal_error_response();
    }
    (
        status,
        Json(ErrorResponse {
            detail: detail_for(error),
        }),
    )
        .into_response()
}

/// Store internals stay out of the body; domain errors are already user-facing.
fn detail_for(error: &ApplicationError) -> String {
    match error {
        ApplicationError::Store(ActivityStoreError::VersionMismatch { .. }) => {
            "activity was updated concurrently, please try again".into()
        }
        other => other.to_string(),
    }
}
