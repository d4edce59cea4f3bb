// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod coleta;
pub mod criacao;
pub mod field_errors;
pub mod relatorio;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Criacao Domain
pub use criacao::{validate_criacao, Criacao};

// Coleta Domain
pub use coleta::{
    check_data_coleta, validate_coleta, validate_data_coleta, Coleta, ColetaError, NovaColeta,
    QUANTIDADE_MAX,
};

// Relatorio Domain (Derived Data)
pub use relatorio::{gerar_relatorio, janela, Relatorio, TotalMensal};

pub use field_errors::FieldErrors;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Coleta(#[from] ColetaError),
}

impl DomainError {
    /// Form field the error belongs to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::InvariantViolation(_) => None,
            DomainError::InvalidField { field, .. } => Some(field),
            DomainError::Coleta(_) => Some("data"),
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
