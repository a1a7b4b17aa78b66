//! Oracle connection target, EZConnect syntax with the database as service name

use super::{BackendKind, ConnectionSettings, DatabaseBackend, REDACTED};

#[derive(Debug, Clone)]
pub struct OracleBackend {
    settings: ConnectionSettings,
}

impl OracleBackend {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    /// `host:port/service_name`
    pub fn dsn(&self) -> String {
        format!(
            "{}:{}/{}",
            self.settings.host, self.settings.port, self.settings.database
        )
    }

    fn render(&self, password: &str) -> String {
        format!("{}/{}@//{}", self.settings.user, password, self.dsn())
    }
}

/// Passwords outside `[A-Za-z0-9_$#]` must be double-quoted in a connect string.
fn quote_password(password: &str) -> String {
    let plain = !password.is_empty()
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'));
    if plain {
        password.to_string()
    } else {
        format!("\"{}\"", password)
    }
}

impl DatabaseBackend for OracleBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Oracle
    }

    fn connection_string(&self) -> String {
        self.render(&quote_password(&self.settings.password))
    }

    fn describe(&self) -> String {
        self.render(REDACTED)
    }
}
