//! Critical Coleta Invariants:
//!
//! 1. Coleta MUST belong to exactly one Criacao
//! 2. Per Criacao, the collection date is unique
//! 3. The collection date is never in the future
//! 4. Validation is pure: it reads the batch's records, never writes

pub mod entity;
pub mod invariants;

pub use entity::{Coleta, NovaColeta};
pub use invariants::{
    check_data_coleta, validate_coleta, validate_data_coleta, ColetaError, QUANTIDADE_MAX,
};
