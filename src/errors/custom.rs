use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Database Error: {0}")]
    DatabaseError(#[from] DbError),

    #[error("Blocking Error: {0}")]
    BlockingError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection Error: {0}")]
    ConnectionError(String),

    #[error("Query Error: {0}")]
    QueryBuilderError(String),

    #[error("Migration Error: {0}")]
    MigrationError(String),
}

impl CustomError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        CustomError::NotFound(format!("{} with id {} does not exist", entity, id))
    }
}

impl From<diesel::result::Error> for CustomError {
    fn from(err: diesel::result::Error) -> Self {
        CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string()))
    }
}

impl From<PoolError> for CustomError {
    fn from(err: PoolError) -> Self {
        CustomError::DatabaseError(DbError::ConnectionError(err.to_string()))
    }
}

impl From<BlockingError> for CustomError {
    fn from(err: BlockingError) -> Self {
        CustomError::BlockingError(err.to_string())
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CustomError::BlockingError(_) | CustomError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
