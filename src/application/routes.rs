// src/application/routes.rs
//
// Route registration

use axum::routing::get;
use axum::Router;

use crate::application::state::AppState;
use crate::application::views::*;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    let coleta_routes = Router::new()
        .route("/coletas", get(listar_coletas))
        .route("/coletas/novo", get(criar_coleta_form).post(criar_coleta))
        .route("/coletas/{id}", get(detalhes_coleta))
        .route(
            "/coletas/{id}/editar",
            get(editar_coleta_form).post(editar_coleta),
        )
        .route(
            "/coletas/{id}/deletar",
            get(deletar_coleta_form).post(deletar_coleta),
        );

    let criacao_routes = Router::new()
        .route("/criacoes", get(listar_criacoes))
        .route("/criacoes/novo", get(criar_criacao_form).post(criar_criacao));

    Router::new()
        .merge(coleta_routes)
        .merge(criacao_routes)
        .route("/relatorio", get(exibir_relatorio_coleta))
        .route("/health", get(health_check))
        .with_state(state)
}
