// src/application/views/relatorio_views.rs

use axum::extract::{Query, State};

use crate::application::dto::{CriacaoDto, RelatorioQuery};
use crate::application::render::Page;
use crate::application::state::AppState;
use crate::error::AppResult;

pub const EXIBIR_RELATORIO_COLETA: &str = "exibir_relatorio_coleta.html";

/// GET /relatorio[?criacao=<id>]
pub async fn exibir_relatorio_coleta(
    State(state): State<AppState>,
    Query(query): Query<RelatorioQuery>,
) -> AppResult<Page> {
    let relatorio = state.relatorio_service.gerar(query.criacao_id())?;

    let criacoes: Vec<CriacaoDto> = state
        .criacao_service
        .list_criacoes()?
        .into_iter()
        .map(CriacaoDto::from)
        .collect();

    Page::new(EXIBIR_RELATORIO_COLETA)
        .with("relatorio", relatorio)?
        .with("criacoes", criacoes)
}
