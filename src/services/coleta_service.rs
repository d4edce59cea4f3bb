// src/services/coleta_service.rs
//
// Coleta Service - Collection management
//
// RULES:
// - Every create/edit goes through the date rules first
// - The UNIQUE (criacao_id, data) constraint is only a backstop
// - Deletion of an unknown id is NotFound, not a silent success

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    check_data_coleta, validate_coleta, Coleta, ColetaError, DomainError, FieldErrors, NovaColeta,
};
use crate::error::{AppError, AppResult};
use crate::events::{ColetaAtualizada, ColetaRegistrada, ColetaRemovida, EventBus};
use crate::infrastructure::Clock;
use crate::repositories::{ColetaRepository, CriacaoRepository};

/// Fields of a collection as submitted for create or edit
#[derive(Debug, Clone, PartialEq)]
pub struct SalvarColetaRequest {
    pub criacao_id: String,
    pub data: NaiveDate,
    pub quantidade: f64,
}

pub struct ColetaService {
    coleta_repo: Arc<dyn ColetaRepository>,
    criacao_repo: Arc<dyn CriacaoRepository>,
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
}

impl ColetaService {
    pub fn new(
        coleta_repo: Arc<dyn ColetaRepository>,
        criacao_repo: Arc<dyn CriacaoRepository>,
        event_bus: Arc<EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            coleta_repo,
            criacao_repo,
            event_bus,
            clock,
        }
    }

    /// All collections, newest date first
    pub fn list_coletas(&self) -> AppResult<Vec<Coleta>> {
        self.coleta_repo.list_all()
    }

    pub fn get_coleta(&self, id: i64) -> AppResult<Option<Coleta>> {
        self.coleta_repo.get_by_id(id)
    }

    /// Field errors for a submission; empty when it can be saved.
    ///
    /// `editando` is the id of the collection being edited, `None` on create.
    pub fn validate(
        &self,
        editando: Option<i64>,
        request: &SalvarColetaRequest,
    ) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_coleta(request.quantidade) {
            errors.add_domain(&e);
        }

        let existentes = if self.criacao_repo.exists(&request.criacao_id)? {
            self.coleta_repo.list_by_criacao(&request.criacao_id)?
        } else {
            errors.add(
                "criacao",
                "Select a valid choice. That choice is not one of the available choices.",
            );
            Vec::new()
        };

        for error in check_data_coleta(
            &existentes,
            editando,
            &request.criacao_id,
            request.data,
            self.clock.today(),
        ) {
            errors.add_domain(&DomainError::from(error));
        }

        Ok(errors)
    }

    pub fn create_coleta(&self, request: SalvarColetaRequest) -> AppResult<Coleta> {
        self.validate(None, &request)?.into_result()?;

        let nova = NovaColeta::new(request.criacao_id, request.data, request.quantidade);
        let id = self
            .coleta_repo
            .insert(&nova)
            .map_err(|e| duplicate_as_field_error(e, &nova.criacao_id, nova.data))?;
        let coleta = nova.into_coleta(id);

        self.event_bus.emit(ColetaRegistrada::new(
            coleta.id,
            coleta.criacao_id.clone(),
            coleta.data,
            coleta.quantidade,
        ));

        Ok(coleta)
    }

    pub fn update_coleta(&self, id: i64, request: SalvarColetaRequest) -> AppResult<Coleta> {
        let mut coleta = self.coleta_repo.get_by_id(id)?.ok_or(AppError::NotFound)?;

        self.validate(Some(id), &request)?.into_result()?;

        let data_anterior = coleta.data;
        coleta.update(request.criacao_id, request.data, request.quantidade);

        let updated = self
            .coleta_repo
            .update(&coleta)
            .map_err(|e| duplicate_as_field_error(e, &coleta.criacao_id, coleta.data))?;
        if !updated {
            return Err(AppError::NotFound);
        }

        self.event_bus.emit(ColetaAtualizada::new(
            coleta.id,
            data_anterior,
            coleta.data,
            coleta.quantidade,
        ));

        Ok(coleta)
    }

    pub fn delete_coleta(&self, id: i64) -> AppResult<()> {
        let coleta = self.coleta_repo.get_by_id(id)?.ok_or(AppError::NotFound)?;

        if !self.coleta_repo.delete(id)? {
            return Err(AppError::NotFound);
        }

        self.event_bus
            .emit(ColetaRemovida::new(coleta.id, coleta.criacao_id));

        Ok(())
    }
}

/// A concurrent submission can still win the race for a date
fn duplicate_as_field_error(error: AppError, criacao_id: &str, data: NaiveDate) -> AppError {
    if !error.is_unique_violation() {
        return error;
    }
    let mut errors = FieldErrors::new();
    errors.add_domain(&DomainError::from(ColetaError::DuplicateDate {
        criacao_id: criacao_id.to_string(),
        data,
    }));
    AppError::Validation(errors)
}
