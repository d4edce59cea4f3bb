// src/application/views/coleta_views.rs
//
// Coleta pages: list, detail, create, edit, delete

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;

use super::{form_status, parse_id};
use crate::application::dto::{ColetaDto, ColetaForm, CriacaoDto, FormState};
use crate::application::render::{redirect, Page};
use crate::application::state::AppState;
use crate::domain::{Coleta, FieldErrors};
use crate::error::{AppError, AppResult};

pub const LISTAR_COLETAS: &str = "listar_coletas.html";
pub const DETALHES_COLETA: &str = "detalhes_coleta.html";
pub const CRIAR_COLETA: &str = "criar_coleta.html";
pub const EDITAR_COLETA: &str = "editar_coleta.html";
pub const DELETAR_COLETA: &str = "deletar_coleta.html";

const COLETAS_URL: &str = "/coletas";

fn load_coleta(state: &AppState, raw_id: &str) -> AppResult<Coleta> {
    let id = parse_id(raw_id)?;
    state.coleta_service.get_coleta(id)?.ok_or(AppError::NotFound)
}

/// Create/edit page: the form, its errors and the batches to choose from
fn form_page(
    state: &AppState,
    template: &'static str,
    form: ColetaForm,
    errors: FieldErrors,
    coleta: Option<Coleta>,
) -> AppResult<Response> {
    let criacoes: Vec<CriacaoDto> = state
        .criacao_service
        .list_criacoes()?
        .into_iter()
        .map(CriacaoDto::from)
        .collect();

    let mut page = Page::new(template)
        .with_status(form_status(&errors))
        .with("form", FormState::new(form, errors))?
        .with("criacoes", criacoes)?;
    if let Some(coleta) = coleta {
        page = page.with("coleta", ColetaDto::from(coleta))?;
    }

    Ok(page.into_response())
}

/// GET /coletas
pub async fn listar_coletas(State(state): State<AppState>) -> AppResult<Page> {
    let coletas: Vec<ColetaDto> = state
        .coleta_service
        .list_coletas()?
        .into_iter()
        .map(ColetaDto::from)
        .collect();

    Page::new(LISTAR_COLETAS).with("coletas", coletas)
}

/// GET /coletas/{id}
pub async fn detalhes_coleta(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Page> {
    let coleta = load_coleta(&state, &id)?;
    Page::new(DETALHES_COLETA).with("coleta", ColetaDto::from(coleta))
}

/// GET /coletas/novo
pub async fn criar_coleta_form(State(state): State<AppState>) -> AppResult<Response> {
    form_page(&state, CRIAR_COLETA, ColetaForm::default(), FieldErrors::new(), None)
}

/// POST /coletas/novo
pub async fn criar_coleta(
    State(state): State<AppState>,
    Form(form): Form<ColetaForm>,
) -> AppResult<Response> {
    let request = match form.parse() {
        Ok(request) => request,
        Err(errors) => return form_page(&state, CRIAR_COLETA, form, errors, None),
    };

    match state.coleta_service.create_coleta(request) {
        Ok(_) => Ok(redirect(COLETAS_URL)),
        Err(AppError::Validation(errors)) => form_page(&state, CRIAR_COLETA, form, errors, None),
        Err(e) => Err(e),
    }
}

/// GET /coletas/{id}/editar
pub async fn editar_coleta_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let coleta = load_coleta(&state, &id)?;
    let form = ColetaForm::from_coleta(&coleta);
    form_page(&state, EDITAR_COLETA, form, FieldErrors::new(), Some(coleta))
}

/// POST /coletas/{id}/editar
pub async fn editar_coleta(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ColetaForm>,
) -> AppResult<Response> {
    let coleta = load_coleta(&state, &id)?;

    let request = match form.parse() {
        Ok(request) => request,
        Err(errors) => return form_page(&state, EDITAR_COLETA, form, errors, Some(coleta)),
    };

    match state.coleta_service.update_coleta(coleta.id, request) {
        Ok(_) => Ok(redirect(COLETAS_URL)),
        Err(AppError::Validation(errors)) => {
            form_page(&state, EDITAR_COLETA, form, errors, Some(coleta))
        }
        Err(e) => Err(e),
    }
}

/// GET /coletas/{id}/deletar
pub async fn deletar_coleta_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Page> {
    let coleta = load_coleta(&state, &id)?;
    Page::new(DELETAR_COLETA).with("coleta", ColetaDto::from(coleta))
}

/// POST /coletas/{id}/deletar
pub async fn deletar_coleta(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.coleta_service.delete_coleta(id)?;
    Ok(redirect(COLETAS_URL))
}
