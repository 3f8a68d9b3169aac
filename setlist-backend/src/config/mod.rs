mod database;
pub mod log;
mod server;

pub use database::Database;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use log::Log;
use serde::Deserialize;
pub use server::Server;
use setlist_api::constant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub log: Log,
}

impl Config {
    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("database", Database::default()))
            .join(Serialized::default("log", Log::default()))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        let env = Env::prefixed(const_format::concatcp!(constant::SERVER_NAME, "_")).split("__");
        Self::from_figment(Figment::new().merge(env)).expect("Could not parse config")
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SETLIST_DATABASE__URL", "postgres://localhost/setlist");
            jail.set_env("SETLIST_DATABASE__LOCK_TIMEOUT_MS", "250");
            jail.set_env("SETLIST_SERVER__PORT", "8080");
            jail.set_env("SETLIST_LOG__FORMAT", "json");

            let config = Config::default();
            assert_eq!(config.database.url, "postgres://localhost/setlist");
            assert_eq!(config.database.lock_timeout_ms, 250);
            assert_eq!(
                config.database.statement_timeout_ms,
                Database::default().statement_timeout_ms
            );
            assert_eq!(config.server.port, 8080);
            assert!(matches!(config.log.format, log::Format::Json));
            assert!(config.log.time);
            Ok(())
        });
    }

    #[test]
    fn test_missing_url() {
        Jail::expect_with(|_| {
            let config = Config::from_figment(Figment::new()).unwrap();
            assert!(config.database.url.is_empty());
            Ok(())
        });
    }
}
