use super::entity::{Criacao, ID_MAX_LEN, RACA_MAX_LEN};
use crate::domain::{DomainError, DomainResult, FieldErrors};

/// Validates all Criacao invariants
pub fn validate_criacao(criacao: &Criacao) -> DomainResult<()> {
    validate_text("id", &criacao.id, ID_MAX_LEN)?;
    validate_text("raca", &criacao.raca, RACA_MAX_LEN)?;
    Ok(())
}

/// Same checks as `validate_criacao`, reported per field
pub fn criacao_field_errors(criacao: &Criacao) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for result in [
        validate_text("id", &criacao.id, ID_MAX_LEN),
        validate_text("raca", &criacao.raca, RACA_MAX_LEN),
    ] {
        if let Err(e) = result {
            errors.add_domain(&e);
        }
    }
    errors
}

/// Required, non-blank, at most `max` characters
fn validate_text(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidField {
            field,
            message: "This field is required.".to_string(),
        });
    }
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::InvalidField {
            field,
            message: format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, len
            ),
        });
    }
    Ok(())
}

/// Invariants that must hold true for Criacao domain:
///
/// 1. id is present and at most 10 characters
/// 2. raca is present and at most 20 characters
/// 3. data_entrada is always present (enforced by the type)
/// 4. id is immutable once registered
