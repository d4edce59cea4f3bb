use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded collection event for a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coleta {
    /// Store-assigned identifier
    pub id: i64,

    /// Owning batch
    pub criacao_id: String,

    /// Collection date
    pub data: NaiveDate,

    /// Amount collected (never negative)
    pub quantidade: f64,
}

/// A collection that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NovaColeta {
    pub criacao_id: String,
    pub data: NaiveDate,
    pub quantidade: f64,
}

impl NovaColeta {
    pub fn new(criacao_id: impl Into<String>, data: NaiveDate, quantidade: f64) -> Self {
        Self {
            criacao_id: criacao_id.into(),
            data,
            quantidade,
        }
    }

    /// Attach the identifier assigned by the store
    pub fn into_coleta(self, id: i64) -> Coleta {
        Coleta {
            id,
            criacao_id: self.criacao_id,
            data: self.data,
            quantidade: self.quantidade,
        }
    }
}

impl Coleta {
    /// Replace the editable fields, keeping the identity
    pub fn update(&mut self, criacao_id: String, data: NaiveDate, quantidade: f64) {
        self.criacao_id = criacao_id;
        self.data = data;
        self.quantidade = quantidade;
    }
}
