// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are page-friendly representations
// - Forms carry raw submitted text; parsing produces service requests
// - Conversion FROM domain entities only

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Coleta, Criacao, FieldErrors};
use crate::services::{CreateCriacaoRequest, SalvarColetaRequest};

const DATE_FORMAT: &str = "%Y-%m-%d";
const REQUIRED: &str = "This field is required.";

// ============================================================================
// CRIACAO DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriacaoDto {
    pub id: String,
    pub raca: String,
    pub data_entrada: String,
}

impl From<Criacao> for CriacaoDto {
    fn from(criacao: Criacao) -> Self {
        Self {
            id: criacao.id,
            raca: criacao.raca,
            data_entrada: criacao.data_entrada.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Submitted batch registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriacaoForm {
    pub id: String,
    pub raca: String,
    pub data_entrada: String,
}

impl CriacaoForm {
    pub fn parse(&self) -> Result<CreateCriacaoRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let data_entrada = parse_date(&self.data_entrada, "data_entrada", &mut errors);
        if self.id.trim().is_empty() {
            errors.add("id", REQUIRED);
        }
        if self.raca.trim().is_empty() {
            errors.add("raca", REQUIRED);
        }

        match data_entrada {
            Some(data_entrada) if errors.is_empty() => Ok(CreateCriacaoRequest {
                id: self.id.clone(),
                raca: self.raca.clone(),
                data_entrada,
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// COLETA DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColetaDto {
    pub id: i64,
    pub criacao: String,
    pub data: String,
    pub quantidade: f64,
}

impl From<Coleta> for ColetaDto {
    fn from(coleta: Coleta) -> Self {
        Self {
            id: coleta.id,
            criacao: coleta.criacao_id,
            data: coleta.data.format(DATE_FORMAT).to_string(),
            quantidade: coleta.quantidade,
        }
    }
}

/// Submitted collection, for create and edit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColetaForm {
    pub criacao: String,
    pub data: String,
    pub quantidade: String,
}

impl ColetaForm {
    /// Initial values when editing an existing collection
    pub fn from_coleta(coleta: &Coleta) -> Self {
        Self {
            criacao: coleta.criacao_id.clone(),
            data: coleta.data.format(DATE_FORMAT).to_string(),
            quantidade: coleta.quantidade.to_string(),
        }
    }

    pub fn parse(&self) -> Result<SalvarColetaRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let criacao_id = self.criacao.trim();
        if criacao_id.is_empty() {
            errors.add("criacao", REQUIRED);
        }
        let data = parse_date(&self.data, "data", &mut errors);
        let quantidade = parse_number(&self.quantidade, "quantidade", &mut errors);

        match (data, quantidade) {
            (Some(data), Some(quantidade)) if errors.is_empty() => Ok(SalvarColetaRequest {
                criacao_id: criacao_id.to_string(),
                data,
                quantidade,
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// FORM STATE
// ============================================================================

/// Submitted values plus their errors, as rendered back on the page
#[derive(Debug, Clone, Serialize)]
pub struct FormState<F: Serialize> {
    pub data: F,
    pub errors: FieldErrors,
}

impl<F: Serialize> FormState<F> {
    pub fn new(data: F, errors: FieldErrors) -> Self {
        Self { data, errors }
    }
}

// ============================================================================
// REPORT QUERY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatorioQuery {
    pub criacao: Option<String>,
}

impl RelatorioQuery {
    /// Blank filter means all batches
    pub fn criacao_id(&self) -> Option<&str> {
        self.criacao
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

fn parse_date(value: &str, field: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Enter a valid date.");
            None
        }
    }
}

fn parse_number(value: &str, field: &str, errors: &mut FieldErrors) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.add(field, "Enter a number.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(criacao: &str, data: &str, quantidade: &str) -> ColetaForm {
        ColetaForm {
            criacao: criacao.to_string(),
            data: data.to_string(),
            quantidade: quantidade.to_string(),
        }
    }

    #[test]
    fn test_valid_coleta_form() {
        let request = form("123", "2023-06-02", "5").parse().unwrap();
        assert_eq!(request.criacao_id, "123");
        assert_eq!(request.data, NaiveDate::from_ymd_opt(2023, 6, 2).unwrap());
        assert_eq!(request.quantidade, 5.0);
    }

    #[test]
    fn test_decimal_comma_is_accepted() {
        let request = form("123", "2023-06-02", "2,5").parse().unwrap();
        assert_eq!(request.quantidade, 2.5);
    }

    #[test]
    fn test_bad_values_are_reported_per_field() {
        let errors = form("", "01/06/2023", "muito").parse().unwrap_err();
        assert!(errors.contains("criacao"));
        assert_eq!(errors.get("data"), ["Enter a valid date."]);
        assert_eq!(errors.get("quantidade"), ["Enter a number."]);
    }

    #[test]
    fn test_round_trips_stored_coleta() {
        let coleta = Coleta {
            id: 1,
            criacao_id: "123".to_string(),
            data: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            quantidade: 10.0,
        };
        let request = ColetaForm::from_coleta(&coleta).parse().unwrap();
        assert_eq!(request.data, coleta.data);
        assert_eq!(request.quantidade, coleta.quantidade);
    }

    #[test]
    fn test_criacao_form_requires_fields() {
        let errors = CriacaoForm::default().parse().unwrap_err();
        assert!(errors.contains("id"));
        assert!(errors.contains("raca"));
        assert!(errors.contains("data_entrada"));
    }

    #[test]
    fn test_relatorio_query_blank_filter() {
        let query = RelatorioQuery {
            criacao: Some("  ".to_string()),
        };
        assert_eq!(query.criacao_id(), None);
    }
}
