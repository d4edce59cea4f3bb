// src/repositories/criacao_repository.rs

use std::sync::Arc;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::Criacao;
use crate::error::AppResult;
use super::{format_date, parse_date_column};

#[cfg_attr(test, mockall::automock)]
pub trait CriacaoRepository: Send + Sync {
    fn insert(&self, criacao: &Criacao) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Criacao>>;
    fn exists(&self, id: &str) -> AppResult<bool>;
    fn list_all(&self) -> AppResult<Vec<Criacao>>;
}

pub struct SqliteCriacaoRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCriacaoRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_criacao(row: &Row) -> rusqlite::Result<Criacao> {
        let data_entrada: String = row.get("data_entrada")?;

        Ok(Criacao {
            id: row.get("id")?,
            raca: row.get("raca")?,
            data_entrada: parse_date_column(2, &data_entrada)?,
        })
    }
}

impl CriacaoRepository for SqliteCriacaoRepository {
    fn insert(&self, criacao: &Criacao) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO criacoes (id, raca, data_entrada) VALUES (?1, ?2, ?3)",
            params![criacao.id, criacao.raca, format_date(criacao.data_entrada)],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Criacao>> {
        let conn = self.pool.get()?;

        let criacao = conn
            .query_row(
                "SELECT id, raca, data_entrada FROM criacoes WHERE id = ?1",
                params![id],
                Self::row_to_criacao,
            )
            .optional()?;

        Ok(criacao)
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM criacoes WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn list_all(&self) -> AppResult<Vec<Criacao>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, raca, data_entrada FROM criacoes ORDER BY id")?;

        let criacoes = stmt
            .query_map([], Self::row_to_criacao)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(criacoes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};
    use chrono::NaiveDate;

    fn repo() -> (SqliteCriacaoRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool(&dir.path().join("test.db"), 1).unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        (SqliteCriacaoRepository::new(pool), dir)
    }

    #[test]
    fn test_insert_and_get() {
        let (repo, _dir) = repo();
        let criacao = Criacao::new("123", "Cachorro", NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

        repo.insert(&criacao).unwrap();

        assert_eq!(repo.get_by_id("123").unwrap(), Some(criacao));
        assert!(repo.exists("123").unwrap());
        assert!(!repo.exists("999").unwrap());
        assert_eq!(repo.get_by_id("999").unwrap(), None);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let (repo, _dir) = repo();
        let entrada = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        repo.insert(&Criacao::new("123", "Cachorro", entrada)).unwrap();

        let err = repo
            .insert(&Criacao::new("123", "Galinha", entrada))
            .unwrap_err();
        assert!(err.is_unique_violation());

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].raca, "Cachorro");
    }
}
