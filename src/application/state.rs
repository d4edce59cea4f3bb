// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::events::EventBus;
use crate::infrastructure::Clock;
use crate::repositories::{
    ColetaRepository, CriacaoRepository, SqliteColetaRepository, SqliteCriacaoRepository,
};
use crate::services::{ColetaService, CriacaoService, RelatorioService};

/// Application state shared by every handler.
/// All fields are Arc-wrapped; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub criacao_service: Arc<CriacaoService>,
    pub coleta_service: Arc<ColetaService>,
    pub relatorio_service: Arc<RelatorioService>,
}

impl AppState {
    /// Build repositories and services over `pool`
    pub fn wire(pool: Arc<ConnectionPool>, clock: Arc<dyn Clock>) -> Self {
        let event_bus = Arc::new(EventBus::new());

        // REPOSITORIES
        let criacao_repo: Arc<dyn CriacaoRepository> =
            Arc::new(SqliteCriacaoRepository::new(pool.clone()));
        let coleta_repo: Arc<dyn ColetaRepository> =
            Arc::new(SqliteColetaRepository::new(pool.clone()));

        // SERVICES
        let criacao_service = Arc::new(CriacaoService::new(
            criacao_repo.clone(),
            event_bus.clone(),
        ));
        let coleta_service = Arc::new(ColetaService::new(
            coleta_repo.clone(),
            criacao_repo.clone(),
            event_bus.clone(),
            clock.clone(),
        ));
        let relatorio_service = Arc::new(RelatorioService::new(coleta_repo, criacao_repo, clock));

        Self {
            pool,
            event_bus,
            criacao_service,
            coleta_service,
            relatorio_service,
        }
    }
}
