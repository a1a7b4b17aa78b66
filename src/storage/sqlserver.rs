//! SQL Server connection target as an ODBC connection string

use super::{BackendKind, ConnectionSettings, DatabaseBackend, REDACTED};

/// ODBC driver named in every connection string
pub const ODBC_DRIVER: &str = "ODBC Driver 17 for SQL Server";

#[derive(Debug, Clone)]
pub struct SqlServerBackend {
    settings: ConnectionSettings,
}

impl SqlServerBackend {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    fn render(&self, password: &str) -> String {
        let s = &self.settings;
        format!(
            "DRIVER={{{}}};SERVER={},{};DATABASE={};UID={};PWD={};",
            ODBC_DRIVER,
            s.host,
            s.port,
            brace_value(&s.database),
            brace_value(&s.user),
            brace_value(password)
        )
    }
}

/// Wrap an ODBC attribute value in `{}` when it could end the attribute early.
/// A closing brace inside the value is written twice.
fn brace_value(value: &str) -> String {
    let needs_braces = value.contains([';', '{', '}', '='])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace);
    if needs_braces {
        format!("{{{}}}", value.replace('}', "}}"))
    } else {
        value.to_string()
    }
}

impl DatabaseBackend for SqlServerBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::SqlServer
    }

    fn connection_string(&self) -> String {
        self.render(&self.settings.password)
    }

    fn describe(&self) -> String {
        self.render(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(password: &str) -> SqlServerBackend {
        SqlServerBackend::new(ConnectionSettings {
            db_type: "sqlserver".to_string(),
            host: "mssql".to_string(),
            port: 1433,
            user: "sa".to_string(),
            password: password.to_string(),
            database: "loja".to_string(),
        })
    }

    #[test]
    fn test_odbc_string() {
        let backend = backend("Pa55w0rd");

        assert_eq!(
            backend.connection_string(),
            "DRIVER={ODBC Driver 17 for SQL Server};SERVER=mssql,1433;DATABASE=loja;UID=sa;PWD=Pa55w0rd;"
        );
        assert!(backend.describe().ends_with("PWD=****;"));
    }

    #[test]
    fn test_password_with_separators_is_braced() {
        assert!(
            backend("a;b{c}")
                .connection_string()
                .ends_with("UID=sa;PWD={a;b{c}}};")
        );
        assert!(backend(" lead").connection_string().ends_with("PWD={ lead};"));
    }
}
