// src/repositories/coleta_repository.rs
//
// Coleta Repository
//
// - Identifiers are assigned by SQLite on insert
// - Listing order is newest date first, ties broken by newest id

use std::sync::Arc;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::{Coleta, NovaColeta};
use crate::error::AppResult;
use super::{format_date, parse_date_column};

const SELECT_COLETA: &str = "SELECT id, criacao_id, data, quantidade FROM coletas";

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait ColetaRepository: Send + Sync {
    /// Store a new collection, returning its identifier
    fn insert(&self, coleta: &NovaColeta) -> AppResult<i64>;

    /// Overwrite an existing collection. Returns false if `coleta.id` is unknown.
    fn update(&self, coleta: &Coleta) -> AppResult<bool>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Coleta>>;

    fn list_all(&self) -> AppResult<Vec<Coleta>>;

    fn list_by_criacao(&self, criacao_id: &str) -> AppResult<Vec<Coleta>>;

    /// Collections dated within `inicio..=fim`
    fn list_between(&self, inicio: NaiveDate, fim: NaiveDate) -> AppResult<Vec<Coleta>>;

    /// Returns false if nothing was deleted
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteColetaRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteColetaRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_coleta(row: &Row) -> rusqlite::Result<Coleta> {
        let data: String = row.get("data")?;

        Ok(Coleta {
            id: row.get("id")?,
            criacao_id: row.get("criacao_id")?,
            data: parse_date_column(2, &data)?,
            quantidade: row.get("quantidade")?,
        })
    }
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
impl ColetaRepository for SqliteColetaRepository {
    fn insert(&self, coleta: &NovaColeta) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO coletas (criacao_id, data, quantidade) VALUES (?1, ?2, ?3)",
            params![coleta.criacao_id, format_date(coleta.data), coleta.quantidade],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, coleta: &Coleta) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let changed = conn.execute(
            "UPDATE coletas SET criacao_id = ?1, data = ?2, quantidade = ?3 WHERE id = ?4",
            params![
                coleta.criacao_id,
                format_date(coleta.data),
                coleta.quantidade,
                coleta.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Coleta>> {
        let conn = self.pool.get()?;

        let coleta = conn
            .query_row(
                &format!("{SELECT_COLETA} WHERE id = ?1"),
                params![id],
                Self::row_to_coleta,
            )
            .optional()?;

        Ok(coleta)
    }

    fn list_all(&self) -> AppResult<Vec<Coleta>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLETA} ORDER BY data DESC, id DESC"))?;

        let coletas = stmt
            .query_map([], Self::row_to_coleta)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(coletas)
    }

    fn list_by_criacao(&self, criacao_id: &str) -> AppResult<Vec<Coleta>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLETA} WHERE criacao_id = ?1 ORDER BY data DESC, id DESC"
        ))?;

        let coletas = stmt
            .query_map(params![criacao_id], Self::row_to_coleta)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(coletas)
    }

    fn list_between(&self, inicio: NaiveDate, fim: NaiveDate) -> AppResult<Vec<Coleta>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLETA} WHERE data BETWEEN ?1 AND ?2 ORDER BY data, id"
        ))?;

        let coletas = stmt
            .query_map(
                params![format_date(inicio), format_date(fim)],
                Self::row_to_coleta,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(coletas)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;
        let deleted = conn.execute("DELETE FROM coletas WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};
    use crate::domain::Criacao;
    use crate::repositories::{CriacaoRepository, SqliteCriacaoRepository};

    fn dia(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
    }

    fn repo() -> (SqliteColetaRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool(&dir.path().join("test.db"), 1).unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let criacoes = SqliteCriacaoRepository::new(pool.clone());
        criacoes.insert(&Criacao::new("123", "Cachorro", dia(1))).unwrap();
        criacoes.insert(&Criacao::new("456", "Galinha", dia(1))).unwrap();

        (SqliteColetaRepository::new(pool), dir)
    }

    #[test]
    fn test_insert_assigns_ids() {
        let (repo, _dir) = repo();

        let a = repo.insert(&NovaColeta::new("123", dia(1), 10.0)).unwrap();
        let b = repo.insert(&NovaColeta::new("123", dia(2), 5.0)).unwrap();
        assert_ne!(a, b);

        let stored = repo.get_by_id(a).unwrap().unwrap();
        assert_eq!(stored.criacao_id, "123");
        assert_eq!(stored.data, dia(1));
        assert_eq!(stored.quantidade, 10.0);
    }

    #[test]
    fn test_list_all_newest_first() {
        let (repo, _dir) = repo();
        repo.insert(&NovaColeta::new("123", dia(3), 5.0)).unwrap();
        repo.insert(&NovaColeta::new("123", dia(2), 3.0)).unwrap();
        repo.insert(&NovaColeta::new("123", dia(4), 2.0)).unwrap();

        let datas: Vec<NaiveDate> = repo.list_all().unwrap().iter().map(|c| c.data).collect();
        assert_eq!(datas, vec![dia(4), dia(3), dia(2)]);
    }

    #[test]
    fn test_list_by_criacao_and_between() {
        let (repo, _dir) = repo();
        repo.insert(&NovaColeta::new("123", dia(1), 1.0)).unwrap();
        repo.insert(&NovaColeta::new("456", dia(1), 2.0)).unwrap();
        repo.insert(&NovaColeta::new("456", dia(20), 3.0)).unwrap();

        assert_eq!(repo.list_by_criacao("456").unwrap().len(), 2);
        assert_eq!(repo.list_between(dia(1), dia(10)).unwrap().len(), 2);
    }

    #[test]
    fn test_update_and_delete() {
        let (repo, _dir) = repo();
        let id = repo.insert(&NovaColeta::new("123", dia(1), 10.0)).unwrap();

        let mut coleta = repo.get_by_id(id).unwrap().unwrap();
        coleta.update("123".to_string(), dia(2), 5.0);
        assert!(repo.update(&coleta).unwrap());
        assert_eq!(repo.get_by_id(id).unwrap(), Some(coleta));

        assert!(repo.delete(id).unwrap());
        assert!(repo.get_by_id(id).unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_duplicate_date_hits_constraint() {
        let (repo, _dir) = repo();
        repo.insert(&NovaColeta::new("123", dia(1), 10.0)).unwrap();

        let err = repo.insert(&NovaColeta::new("123", dia(1), 5.0)).unwrap_err();
        assert!(err.is_unique_violation());
    }
}
