use rocket::{
    Request,
    http::Status,
    response::{self, Responder, status},
    serde::json::Json,
};
use serde::{Deserialize, Serialize};

/// JSON body of every error response: `{ "message": "..." }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(&'static str),
    NotFound(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(message) | ApiError::NotFound(message) => message,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        status::Custom(self.status(), Json(ErrorMessage::new(self.message()))).respond_to(request)
    }
}

#[catch(404)]
pub fn not_found() -> Json<ErrorMessage> {
    Json(ErrorMessage::new("Not found"))
}

#[catch(422)]
pub fn unprocessable() -> Json<ErrorMessage> {
    Json(ErrorMessage::new("Invalid request"))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorMessage> {
    Json(ErrorMessage::new("Internal server error"))
}
