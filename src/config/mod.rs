use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "featuremap.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be at least 1"));
        }

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        Ok(Self { db, webserver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert_eq!(cfg.webserver.port, 8080);
        assert!(!cfg.webserver.enable_cors);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(
            r#"
              [webserver]
              address = "0.0.0.0"
              port = 3000
              cors = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.db.conn_sqlite, "featuremap.db");
        assert_eq!(cfg.webserver.address.to_string(), "0.0.0.0");
        assert_eq!(cfg.webserver.port, 3000);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let result = parse(
            r#"
              [db]
              connection-sqlite = ":memory:"
              connection-pool-size = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn fail_on_invalid_config_file() {
        let dir = env::temp_dir().join(format!("featuremap-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("invalid.toml");
        fs::write(&file, "[db\n").unwrap();
        assert!(Config::try_load_from_file_or_default(Some(&file)).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
