use std::any::Any;
use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub async fn new(config: &Configuration) -> LibraryResult<AppState> {
        let catalog = create_catalog_service(config).await?;
        Ok(AppState {
            catalog,
        })
    }
}

// ApiResponse is the success envelope shared by all catalog endpoints
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
            count: None,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    pub fn message(message: String) -> Self {
        Self {
            status: "success",
            message: Some(message),
            data: None,
            count: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            status: "error",
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ErrorResponse::new(message)))
}

pub(crate) fn endpoint_not_found() -> ServerError {
    server_error(StatusCode::NOT_FOUND, "Endpoint not found")
}

// used by the panic-catching layer so that a crashed handler still answers in JSON
pub(crate) fn internal_error(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    server_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::AlreadyRented { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::NotRented { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Serialization { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Runtime { .. } => {
                tracing::error!(error = err.message(), "catalog runtime failure");
                server_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
