//! Database backend descriptors
//!
//! Each supported database gets its own [`DatabaseBackend`] implementation that
//! knows how to describe a connection target. [`backend_for`] picks the
//! implementation from [`ConnectionSettings::db_type`]. Nothing here opens a
//! connection; drivers consume the produced connection strings.

pub mod clickhouse;
pub mod oracle;
pub mod postgres;
pub mod sqlserver;

pub use clickhouse::ClickHouseBackend;
pub use oracle::OracleBackend;
pub use postgres::PostgresBackend;
pub use sqlserver::SqlServerBackend;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder shown instead of passwords in logs
pub const REDACTED: &str = "****";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unsupported database type: {0}")]
    UnsupportedBackend(String),

    #[error("Invalid {kind} connection target: {reason}")]
    InvalidTarget { kind: BackendKind, reason: String },
}

/// Supported database families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Oracle,
    SqlServer,
    ClickHouse,
    Postgres,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Oracle => "oracle",
            BackendKind::SqlServer => "sqlserver",
            BackendKind::ClickHouse => "clickhouse",
            BackendKind::Postgres => "postgresql",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oracle" => Ok(BackendKind::Oracle),
            "sqlserver" => Ok(BackendKind::SqlServer),
            "clickhouse" => Ok(BackendKind::ClickHouse),
            "postgresql" | "postgres" => Ok(BackendKind::Postgres),
            _ => Err(StorageError::UnsupportedBackend(s.to_string())),
        }
    }
}

/// Where and as whom to connect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Backend tag, e.g. "postgresql" (case-insensitive)
    pub db_type: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database name (service name for Oracle)
    pub database: String,
}

impl ConnectionSettings {
    pub fn kind(&self) -> Result<BackendKind, StorageError> {
        self.db_type.parse()
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("db_type", &self.db_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("database", &self.database)
            .finish()
    }
}

/// One database family's view of a connection target
pub trait DatabaseBackend: Send + Sync + fmt::Debug {
    fn kind(&self) -> BackendKind;

    /// Connection string in the form the backend's driver expects
    fn connection_string(&self) -> String;

    /// Connection target with the password masked, for logs
    fn describe(&self) -> String;
}

/// Build the backend implementation matching `settings.db_type`
pub fn backend_for(settings: &ConnectionSettings) -> Result<Box<dyn DatabaseBackend>, StorageError> {
    let backend: Box<dyn DatabaseBackend> = match settings.kind()? {
        BackendKind::Oracle => Box::new(OracleBackend::new(settings.clone())),
        BackendKind::SqlServer => Box::new(SqlServerBackend::new(settings.clone())),
        BackendKind::ClickHouse => Box::new(ClickHouseBackend::new(settings.clone())?),
        BackendKind::Postgres => Box::new(PostgresBackend::new(settings.clone())),
    };
    Ok(backend)
}
