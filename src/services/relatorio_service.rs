// src/services/relatorio_service.rs
use std::sync::Arc;

use crate::domain::{gerar_relatorio, janela, Relatorio};
use crate::error::{AppError, AppResult};
use crate::infrastructure::Clock;
use crate::repositories::{ColetaRepository, CriacaoRepository};

/// Monthly report over the trailing twelve months.
/// Reports are computed on every request and never stored.
pub struct RelatorioService {
    coleta_repo: Arc<dyn ColetaRepository>,
    criacao_repo: Arc<dyn CriacaoRepository>,
    clock: Arc<dyn Clock>,
}

impl RelatorioService {
    pub fn new(
        coleta_repo: Arc<dyn ColetaRepository>,
        criacao_repo: Arc<dyn CriacaoRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            coleta_repo,
            criacao_repo,
            clock,
        }
    }

    /// Report for every batch, or only `criacao_id` when given
    pub fn gerar(&self, criacao_id: Option<&str>) -> AppResult<Relatorio> {
        if let Some(id) = criacao_id {
            if !self.criacao_repo.exists(id)? {
                return Err(AppError::NotFound);
            }
        }

        let hoje = self.clock.today();
        let (inicio, fim) = janela(hoje);
        let coletas = self.coleta_repo.list_between(inicio, fim)?;

        Ok(gerar_relatorio(&coletas, hoje, criacao_id))
    }
}
