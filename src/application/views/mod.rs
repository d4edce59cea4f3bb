// src/application/views/mod.rs
//
// HTTP handlers
//
// RULES:
// - Parse the request, call services, render a page or redirect
// - Never contain business logic

pub mod coleta_views;
pub mod criacao_views;
pub mod health;
pub mod relatorio_views;

pub use coleta_views::*;
pub use criacao_views::*;
pub use health::*;
pub use relatorio_views::*;

use axum::http::StatusCode;

use crate::domain::FieldErrors;
use crate::error::{AppError, AppResult};

/// Path ids that are not integers name no record
pub(crate) fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| AppError::NotFound)
}

/// Invalid forms are re-rendered with 422
pub(crate) fn form_status(errors: &FieldErrors) -> StatusCode {
    if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}
