// src/application/views/criacao_views.rs

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;

use super::form_status;
use crate::application::dto::{CriacaoDto, CriacaoForm, FormState};
use crate::application::render::{redirect, Page};
use crate::application::state::AppState;
use crate::domain::{Criacao, FieldErrors};
use crate::error::{AppError, AppResult};

pub const LISTAR_CRIACOES: &str = "listar_criacoes.html";
pub const CRIAR_CRIACAO: &str = "criar_criacao.html";

fn form_page(form: CriacaoForm, errors: FieldErrors) -> AppResult<Response> {
    let labels: serde_json::Map<String, serde_json::Value> = ["id", "raca", "data_entrada"]
        .into_iter()
        .filter_map(|field| {
            Criacao::verbose_name(field).map(|label| (field.to_string(), label.into()))
        })
        .collect();

    let page = Page::new(CRIAR_CRIACAO)
        .with_status(form_status(&errors))
        .with("form", FormState::new(form, errors))?
        .with("labels", labels)?;

    Ok(page.into_response())
}

/// GET /criacoes
pub async fn listar_criacoes(State(state): State<AppState>) -> AppResult<Page> {
    let criacoes: Vec<CriacaoDto> = state
        .criacao_service
        .list_criacoes()?
        .into_iter()
        .map(CriacaoDto::from)
        .collect();

    Page::new(LISTAR_CRIACOES).with("criacoes", criacoes)
}

/// GET /criacoes/novo
pub async fn criar_criacao_form() -> AppResult<Response> {
    form_page(CriacaoForm::default(), FieldErrors::new())
}

/// POST /criacoes/novo
pub async fn criar_criacao(
    State(state): State<AppState>,
    Form(form): Form<CriacaoForm>,
) -> AppResult<Response> {
    let request = match form.parse() {
        Ok(request) => request,
        Err(errors) => return form_page(form, errors),
    };

    match state.criacao_service.create_criacao(request) {
        Ok(_) => Ok(redirect("/criacoes")),
        Err(AppError::Validation(errors)) => form_page(form, errors),
        Err(e) => Err(e),
    }
}
