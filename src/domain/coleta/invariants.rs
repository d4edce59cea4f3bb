use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DomainError, DomainResult};

/// Rejections of a proposed collection date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColetaError {
    #[error("A collection for batch {criacao_id} is already recorded on {data}.")]
    DuplicateDate { criacao_id: String, data: NaiveDate },

    #[error("The collection date {data} cannot be in the future.")]
    FutureDate { data: NaiveDate },
}

/// Every rule a proposed collection date breaks.
///
/// `existentes` are the stored collections; only those of `criacao_id` are
/// considered, and `editando` (the collection being edited) is skipped.
pub fn check_data_coleta<'a, I>(
    existentes: I,
    editando: Option<i64>,
    criacao_id: &str,
    data: NaiveDate,
    hoje: NaiveDate,
) -> Vec<ColetaError>
where
    I: IntoIterator<Item = &'a super::Coleta>,
{
    let mut errors = Vec::new();

    let duplicada = existentes.into_iter().any(|c| {
        c.criacao_id == criacao_id && c.data == data && Some(c.id) != editando
    });
    if duplicada {
        errors.push(ColetaError::DuplicateDate {
            criacao_id: criacao_id.to_string(),
            data,
        });
    }

    if data > hoje {
        errors.push(ColetaError::FutureDate { data });
    }

    errors
}

/// First rule a proposed collection date breaks, if any
pub fn validate_data_coleta<'a, I>(
    existentes: I,
    editando: Option<i64>,
    criacao_id: &str,
    data: NaiveDate,
    hoje: NaiveDate,
) -> Result<(), ColetaError>
where
    I: IntoIterator<Item = &'a super::Coleta>,
{
    match check_data_coleta(existentes, editando, criacao_id, data, hoje)
        .into_iter()
        .next()
    {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Largest quantity a single collection may record; keeps report sums finite
pub const QUANTIDADE_MAX: f64 = 1e12;

/// Quantity must be a number in `0..=QUANTIDADE_MAX`
pub fn validate_coleta(quantidade: f64) -> DomainResult<()> {
    if !quantidade.is_finite() || quantidade < 0.0 {
        return Err(DomainError::InvalidField {
            field: "quantidade",
            message: "Ensure this value is greater than or equal to 0.".to_string(),
        });
    }
    if quantidade > QUANTIDADE_MAX {
        return Err(DomainError::InvalidField {
            field: "quantidade",
            message: format!(
                "Ensure this value is less than or equal to {}.",
                QUANTIDADE_MAX
            ),
        });
    }
    Ok(())
}

/// Critical Coleta Invariants:
///
/// 1. Coleta MUST belong to exactly one Criacao
/// 2. At most one Coleta per Criacao per date
/// 3. The date is never later than today
/// 4. Quantity is never negative and at most `QUANTIDADE_MAX`
