// src/lib.rs
// Producao - Farm production tracker
//
// Architecture:
// - Domain-centric: business rules live in domain/
// - Event-driven: services announce changes through the EventBus
// - Explicit: plain SQL, no implicit behavior
// - Application layer: HTTP boundary (axum)

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

pub mod application;
pub mod config;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    check_data_coleta,
    gerar_relatorio,
    janela,
    validate_coleta,
    validate_criacao,
    validate_data_coleta,
    // Coleta
    Coleta,
    ColetaError,
    // Criacao
    Criacao,
    DomainError,
    FieldErrors,
    NovaColeta,
    // Relatorio
    Relatorio,
    TotalMensal,
};

pub use error::{AppError, AppResult};

pub use events::{register_logging_handlers, DomainEvent, EventBus, EventLogEntry};

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    ColetaRepository, CriacaoRepository, SqliteColetaRepository, SqliteCriacaoRepository,
};

pub use infrastructure::{Clock, FixedClock, SystemClock};

pub use services::{
    ColetaService, CreateCriacaoRequest, CriacaoService, RelatorioService, SalvarColetaRequest,
};

pub use application::{build_router, AppState};
