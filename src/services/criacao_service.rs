// src/services/criacao_service.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::criacao::criacao_field_errors;
use crate::domain::{Criacao, FieldErrors};
use crate::error::{AppError, AppResult};
use crate::events::{CriacaoRegistrada, EventBus};
use crate::repositories::CriacaoRepository;

const DUPLICATE_ID: &str = "Criacao with this ID already exists.";

#[derive(Debug, Clone)]
pub struct CreateCriacaoRequest {
    pub id: String,
    pub raca: String,
    pub data_entrada: NaiveDate,
}

pub struct CriacaoService {
    criacao_repo: Arc<dyn CriacaoRepository>,
    event_bus: Arc<EventBus>,
}

impl CriacaoService {
    pub fn new(criacao_repo: Arc<dyn CriacaoRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            criacao_repo,
            event_bus,
        }
    }

    /// Register a new batch. Identifiers are never reused.
    pub fn create_criacao(&self, request: CreateCriacaoRequest) -> AppResult<Criacao> {
        let criacao = Criacao::new(request.id.trim(), request.raca.trim(), request.data_entrada);

        let mut errors = criacao_field_errors(&criacao);
        if !errors.contains("id") && self.criacao_repo.exists(&criacao.id)? {
            errors.add("id", DUPLICATE_ID);
        }
        errors.into_result()?;

        // A concurrent registration can still take the id first
        self.criacao_repo.insert(&criacao).map_err(|e| {
            if !e.is_unique_violation() {
                return e;
            }
            let mut errors = FieldErrors::new();
            errors.add("id", DUPLICATE_ID);
            AppError::Validation(errors)
        })?;

        self.event_bus.emit(CriacaoRegistrada::new(
            criacao.id.clone(),
            criacao.raca.clone(),
        ));

        Ok(criacao)
    }

    pub fn list_criacoes(&self) -> AppResult<Vec<Criacao>> {
        self.criacao_repo.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};
    use crate::repositories::{MockCriacaoRepository, SqliteCriacaoRepository};

    fn request(id: &str) -> CreateCriacaoRequest {
        CreateCriacaoRequest {
            id: id.to_string(),
            raca: "Cachorro".to_string(),
            data_entrada: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_create_saves_and_emits() {
        let mut repo = MockCriacaoRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let bus = Arc::new(EventBus::new());
        let service = CriacaoService::new(Arc::new(repo), bus.clone());

        let criacao = service.create_criacao(request(" 123 ")).unwrap();

        assert_eq!(criacao.id, "123");
        assert_eq!(bus.get_event_log()[0].event_type, "CriacaoRegistrada");
    }

    #[test]
    fn test_existing_id_is_rejected() {
        let mut repo = MockCriacaoRepository::new();
        repo.expect_exists().returning(|_| Ok(true));
        repo.expect_insert().never();

        let service = CriacaoService::new(Arc::new(repo), Arc::new(EventBus::new()));

        match service.create_criacao(request("123")) {
            Err(AppError::Validation(errors)) => assert!(errors.contains("id")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_id_is_rejected_without_lookup() {
        let mut repo = MockCriacaoRepository::new();
        repo.expect_exists().never();
        repo.expect_insert().never();

        let service = CriacaoService::new(Arc::new(repo), Arc::new(EventBus::new()));

        assert!(matches!(
            service.create_criacao(request("12345678901")),
            Err(AppError::Validation(_))
        ));
    }

    /// Real store whose `exists` always misses, as when two registrations interleave
    struct StaleLookup(SqliteCriacaoRepository);

    impl CriacaoRepository for StaleLookup {
        fn insert(&self, criacao: &Criacao) -> AppResult<()> {
            self.0.insert(criacao)
        }
        fn get_by_id(&self, id: &str) -> AppResult<Option<Criacao>> {
            self.0.get_by_id(id)
        }
        fn exists(&self, _id: &str) -> AppResult<bool> {
            Ok(false)
        }
        fn list_all(&self) -> AppResult<Vec<Criacao>> {
            self.0.list_all()
        }
    }

    #[test]
    fn test_lost_registration_race_keeps_first_batch() {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool(&dir.path().join("test.db"), 1).unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let repo = Arc::new(StaleLookup(SqliteCriacaoRepository::new(pool)));
        let service = CriacaoService::new(repo.clone(), Arc::new(EventBus::new()));

        service.create_criacao(request("123")).unwrap();

        let mut second = request("123");
        second.raca = "Galinha".to_string();
        match service.create_criacao(second) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.get("id"), [DUPLICATE_ID]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let stored = repo.get_by_id("123").unwrap().unwrap();
        assert_eq!(stored.raca, "Cachorro");
    }
}
