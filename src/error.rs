use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Unknown user: {0}")]
    UnknownUser(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::UnknownUser(_) | ApiError::UserNotFound(_) => Status::NotFound,
            ApiError::Database(_) | ApiError::Pool(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let message = if status == Status::InternalServerError {
            log::error!("{} {}: {}", req.method(), req.uri(), self);
            "Server error".to_string()
        } else {
            log::warn!("{} {}: {}", req.method(), req.uri(), self);
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ApiError::Validation("x".into()).status(), Status::BadRequest);
        assert_eq!(ApiError::UnknownUser(1).status(), Status::NotFound);
        assert_eq!(ApiError::UserNotFound(1).status(), Status::NotFound);
        assert_eq!(
            ApiError::Database(rusqlite::Error::QueryReturnedNoRows).status(),
            Status::InternalServerError
        );
    }
}
