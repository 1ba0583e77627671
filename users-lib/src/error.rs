use actix_web::body::BoxBody;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};
use users_repo::user_repo::UserRepoError;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unable to decode request body: {0}")]
    Decode(JsonPayloadError),
    #[error("Unable to parse query: {0}")]
    Parse(QueryPayloadError),
    #[error(transparent)]
    Persistence(#[from] UserRepoError),
    #[error("Unable to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Every failure is reported as 400 with an empty body. Not-found, conflicts and storage failures
/// are only told apart in the logs.
impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            HandlerError::Decode(_) | HandlerError::Parse(_) => warn!(err = %self),
            HandlerError::Persistence(_) | HandlerError::Encode(_) => error!(err = %self),
        }
        HttpResponse::new(self.status_code())
    }
}
