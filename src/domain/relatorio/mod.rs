//! Relatorio Invariants:
//!
//! 1. Reports are ALWAYS derived from Coleta records, never stored
//! 2. Exactly twelve months, oldest first, current month last
//! 3. Months without records total zero

pub mod entity;
pub use entity::{gerar_relatorio, janela, Relatorio, TotalMensal, MESES_NO_RELATORIO};
