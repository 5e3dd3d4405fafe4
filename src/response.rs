//! Uniform response envelope returned by the product endpoints.
//!
//! Both variants serialize to the same flat shape:
//! `{status, isSuccess, isError, error, message, body}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success {
        message: String,
        body: T,
    },
    Error {
        status: StatusCode,
        error: String,
        message: String,
    },
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, body: T) -> Self {
        Self::Success {
            message: message.into(),
            body,
        }
    }

    pub fn error(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { .. } => StatusCode::OK,
            Self::Error { status, .. } => *status,
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ApiResponse", 6)?;
        s.serialize_field("status", &self.status().as_u16())?;
        match self {
            Self::Success { message, body } => {
                s.serialize_field("isSuccess", &true)?;
                s.serialize_field("isError", &false)?;
                s.serialize_field("error", &None::<String>)?;
                s.serialize_field("message", message)?;
                s.serialize_field("body", body)?;
            }
            Self::Error { error, message, .. } => {
                s.serialize_field("isSuccess", &false)?;
                s.serialize_field("isError", &true)?;
                s.serialize_field("error", error)?;
                s.serialize_field("message", message)?;
                s.serialize_field("body", &None::<T>)?;
            }
        }
        s.end()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
