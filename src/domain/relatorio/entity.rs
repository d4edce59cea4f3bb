use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Coleta;

/// Number of calendar months covered by the report, current month included
pub const MESES_NO_RELATORIO: usize = 12;

/// Total collected in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalMensal {
    pub ano: i32,
    /// 1..=12
    pub mes: u32,
    pub total: f64,
}

impl TotalMensal {
    /// First day of the month
    pub fn inicio(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.ano, self.mes, 1)
    }

    pub fn contem(&self, data: NaiveDate) -> bool {
        data.year() == self.ano && data.month() == self.mes
    }
}

/// Monthly collection totals over the trailing twelve months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relatorio {
    /// Date the report was computed for
    pub referencia: NaiveDate,

    /// Batch filter, `None` for all batches
    pub criacao_id: Option<String>,

    /// Oldest month first, always `MESES_NO_RELATORIO` entries
    pub meses: Vec<TotalMensal>,

    pub total_geral: f64,
}

/// Months are counted as `year * 12 + (month - 1)`
fn indice_mes(ano: i32, mes: u32) -> i64 {
    i64::from(ano) * 12 + i64::from(mes) - 1
}

fn mes_do_indice(indice: i64) -> (i32, u32) {
    (indice.div_euclid(12) as i32, indice.rem_euclid(12) as u32 + 1)
}

/// First and last day covered by the report for `hoje`
pub fn janela(hoje: NaiveDate) -> (NaiveDate, NaiveDate) {
    let primeiro_do_mes = hoje.with_day(1);
    let inicio = primeiro_do_mes
        .and_then(|d| d.checked_sub_months(Months::new(MESES_NO_RELATORIO as u32 - 1)))
        .unwrap_or(NaiveDate::MIN);
    let fim = primeiro_do_mes
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (inicio, fim)
}

/// Build the report for `hoje` from a sequence of collections.
///
/// Collections outside the window, or of another batch when `criacao_id` is
/// set, are ignored.
pub fn gerar_relatorio<'a, I>(coletas: I, hoje: NaiveDate, criacao_id: Option<&str>) -> Relatorio
where
    I: IntoIterator<Item = &'a Coleta>,
{
    let fim = indice_mes(hoje.year(), hoje.month());
    let inicio = fim - (MESES_NO_RELATORIO as i64 - 1);

    let mut meses: Vec<TotalMensal> = (inicio..=fim)
        .map(|indice| {
            let (ano, mes) = mes_do_indice(indice);
            TotalMensal { ano, mes, total: 0.0 }
        })
        .collect();

    for coleta in coletas {
        if let Some(filtro) = criacao_id {
            if coleta.criacao_id != filtro {
                continue;
            }
        }
        let indice = indice_mes(coleta.data.year(), coleta.data.month());
        if (inicio..=fim).contains(&indice) {
            meses[(indice - inicio) as usize].total += coleta.quantidade;
        }
    }

    let total_geral = meses.iter().map(|m| m.total).sum();

    Relatorio {
        referencia: hoje,
        criacao_id: criacao_id.map(str::to_string),
        meses,
        total_geral,
    }
}
