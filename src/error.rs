use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use leptos::logging;
use thiserror::Error;

use crate::components::render_error_page;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Listing not found")]
    ListingNotFound,

    #[error("Page Not Found")]
    PageNotFound,

    #[error("Something went wrong!")]
    Database(#[from] rusqlite::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ListingNotFound | AppError::PageNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let AppError::Database(err) = self {
            logging::error!("[SERVER ERROR] Database failure: {:?}", err);
        } else {
            logging::log!("[SERVER] {} {}", status.as_u16(), self);
        }

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(render_error_page(status.as_u16(), self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let validation = AppError::from(ValidationError {
            issues: vec!["\"listing.title\" is required".into()],
        });
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "\"listing.title\" is required");

        assert_eq!(AppError::ListingNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(AppError::PageNotFound.to_string(), "Page Not Found");

        let internal = AppError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "Something went wrong!");
    }
}
