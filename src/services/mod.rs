// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod coleta_service;
pub mod criacao_service;
pub mod relatorio_service;

pub use coleta_service::{ColetaService, SalvarColetaRequest};
pub use criacao_service::{CreateCriacaoRequest, CriacaoService};
pub use relatorio_service::RelatorioService;
