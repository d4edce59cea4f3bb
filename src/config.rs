// src/config.rs
//
// Command line / environment configuration

use std::path::PathBuf;

use clap::Parser;

use crate::db::{get_database_path, DEFAULT_POOL_SIZE};
use crate::error::AppResult;

/// Farm production tracker server.
#[derive(Parser, Debug, Clone)]
#[command(name = "producao", version, about = "Farm production tracker")]
pub struct Cli {
    /// SQLite database file (defaults to the per-user data directory).
    #[arg(long = "database", env = "PRODUCAO_DATABASE")]
    pub database: Option<PathBuf>,

    /// Listen address.
    #[arg(long = "listen", env = "PRODUCAO_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Maximum pooled SQLite connections.
    #[arg(long = "pool-size", env = "PRODUCAO_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,
}

impl Cli {
    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["producao"]).unwrap();
        assert_eq!(cli.listen, "0.0.0.0:8080");
        assert_eq!(cli.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_explicit_database_wins() {
        let cli = Cli::try_parse_from([
            "producao",
            "--database",
            "/tmp/fazenda.db",
            "--listen",
            "127.0.0.1:3000",
            "--pool-size",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.database_path().unwrap(), PathBuf::from("/tmp/fazenda.db"));
        assert_eq!(cli.listen, "127.0.0.1:3000");
        assert_eq!(cli.pool_size, 2);
    }

    #[test]
    fn test_pool_size_must_be_a_number() {
        assert!(Cli::try_parse_from(["producao", "--pool-size", "muitos"]).is_err());
    }
}
