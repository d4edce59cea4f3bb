pub mod entity;
pub mod invariants;

pub use entity::{Criacao, ID_MAX_LEN, RACA_MAX_LEN};
pub use invariants::{criacao_field_errors, validate_criacao};
