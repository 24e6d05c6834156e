//! Request-level errors and their HTTP rendering.

use actix_web::error::UrlGenerationError;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Failures that end a request.
///
/// Form validation failures are not here: they are shown back to the user in
/// the re-rendered form (see [`crate::forms::FormErrors`]).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("article {0} not found")]
    ArticleNotFound(i32),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("database error: {0}")]
    Persistence(#[from] DbErr),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("cannot build url: {0}")]
    Route(#[from] UrlGenerationError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ArticleNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) | AppError::Template(_) | AppError::Route(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::ArticleNotFound(id) => format!("Article {id} does not exist."),
            AppError::RouteNotFound(_) => "This page does not exist.".to_string(),
            other => {
                tracing::error!(error = %other, "request failed");
                "Something went wrong on our side.".to_string()
            }
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(error_page(status, &message))
    }
}

// Not a tera template, so a broken template cannot hide the original error.
fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">\
         <title>{code} {reason}</title></head>\
         <body><h1>{code} {reason}</h1><p>{message}</p>\
         <p><a href=\"/blog\">Back to the articles</a></p></body></html>\n",
        code = status.as_u16(),
        message = tera::escape_html(message),
    )
}
