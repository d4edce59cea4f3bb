// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Explicit SQL only

pub mod coleta_repository;
pub mod criacao_repository;

pub use coleta_repository::{ColetaRepository, SqliteColetaRepository};
pub use criacao_repository::{CriacaoRepository, SqliteCriacaoRepository};

#[cfg(test)]
pub use coleta_repository::MockColetaRepository;
#[cfg(test)]
pub use criacao_repository::MockCriacaoRepository;

use chrono::NaiveDate;

/// Dates are stored as ISO `YYYY-MM-DD` text
pub(crate) fn parse_date_column(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid date '{}': {}", value, e),
            )),
        )
    })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
