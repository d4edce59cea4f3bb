use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of a batch identifier
pub const ID_MAX_LEN: usize = 10;

/// Maximum length of a breed name
pub const RACA_MAX_LEN: usize = 20;

/// Represents an animal batch being raised
/// This is the root entity every collection belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criacao {
    /// User-assigned identifier (up to 10 characters)
    pub id: String,

    /// Breed (up to 20 characters)
    pub raca: String,

    /// Date the batch entered the farm
    pub data_entrada: NaiveDate,
}

impl Criacao {
    pub fn new(id: impl Into<String>, raca: impl Into<String>, data_entrada: NaiveDate) -> Self {
        Self {
            id: id.into(),
            raca: raca.into(),
            data_entrada,
        }
    }

    /// Human-readable label of a field, as shown on forms
    pub fn verbose_name(field: &str) -> Option<&'static str> {
        match field {
            "id" => Some("ID"),
            "raca" => Some("Raça"),
            "data_entrada" => Some("Data de Entrada"),
            _ => None,
        }
    }
}
