//! ClickHouse connection target as an HTTP interface URL

use super::{BackendKind, ConnectionSettings, DatabaseBackend, REDACTED, StorageError};
use url::Url;

#[derive(Debug, Clone)]
pub struct ClickHouseBackend {
    settings: ConnectionSettings,
    base: Url,
}

impl ClickHouseBackend {
    /// Fails when host and port do not form a valid HTTP authority.
    pub fn new(settings: ConnectionSettings) -> Result<Self, StorageError> {
        let mut base = Url::parse(&format!("http://{}:{}/", settings.host, settings.port))
            .map_err(|e| StorageError::InvalidTarget {
                kind: BackendKind::ClickHouse,
                reason: e.to_string(),
            })?;
        base.query_pairs_mut()
            .append_pair("database", &settings.database);
        Ok(Self { settings, base })
    }

    fn render(&self, password: &str) -> String {
        let mut url = self.base.clone();
        // Userinfo setters only fail on URLs without a host, and `base` has one.
        let _ = url.set_username(&self.settings.user);
        let _ = url.set_password(Some(password));
        url.into()
    }
}

impl DatabaseBackend for ClickHouseBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::ClickHouse
    }

    fn connection_string(&self) -> String {
        self.render(&self.settings.password)
    }

    fn describe(&self) -> String {
        self.render(REDACTED)
    }
}
