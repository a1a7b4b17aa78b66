//! PostgreSQL connection target in libpq key/value form

use super::{BackendKind, ConnectionSettings, DatabaseBackend, REDACTED};

#[derive(Debug, Clone)]
pub struct PostgresBackend {
    settings: ConnectionSettings,
}

impl PostgresBackend {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    fn render(&self, password: &str) -> String {
        let s = &self.settings;
        format!(
            "host={} port={} user={} password={} dbname={}",
            quote_value(&s.host),
            s.port,
            quote_value(&s.user),
            quote_value(password),
            quote_value(&s.database)
        )
    }
}

/// Single-quote a libpq value when it is empty or holds whitespace, quotes or
/// backslashes. Inside quotes `'` and `\` are backslash-escaped.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

impl DatabaseBackend for PostgresBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }

    fn connection_string(&self) -> String {
        self.render(&self.settings.password)
    }

    fn describe(&self) -> String {
        self.render(REDACTED)
    }
}
