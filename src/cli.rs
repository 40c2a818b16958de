use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Serve the feature map and its HTTP API.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file (TOML).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database, overrides the configuration.
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin.
    #[arg(long)]
    pub enable_cors: bool,

    /// Set the port to listen.
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl Args {
    /// Command line arguments take precedence over the configuration.
    pub fn apply_to(self, cfg: &mut Config) {
        let Self {
            config: _,
            db_url,
            enable_cors,
            port,
        } = self;
        if let Some(db_url) = db_url {
            cfg.db.conn_sqlite = db_url;
        }
        if enable_cors {
            cfg.webserver.enable_cors = true;
        }
        if let Some(port) = port {
            cfg.webserver.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        let file: Option<&std::path::Path> = Some(std::path::Path::new("does-not-exist.toml"));
        Config::try_load_from_file_or_default(file).unwrap()
    }

    #[test]
    fn override_configuration() {
        let args = Args::try_parse_from([
            "featuremap",
            "--db-url",
            "test.db",
            "--enable-cors",
            "--port",
            "9000",
        ])
        .unwrap();
        let mut cfg = default_config();
        args.apply_to(&mut cfg);
        assert_eq!(cfg.db.conn_sqlite, "test.db");
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.webserver.port, 9000);
    }

    #[test]
    fn keep_configuration_without_arguments() {
        let args = Args::try_parse_from(["featuremap"]).unwrap();
        assert_eq!(args.config, None);
        let mut cfg = default_config();
        let port = cfg.webserver.port;
        args.apply_to(&mut cfg);
        assert_eq!(cfg.webserver.port, port);
        assert!(!cfg.webserver.enable_cors);
    }

    #[test]
    fn reject_invalid_port() {
        assert!(Args::try_parse_from(["featuremap", "--port", "99999"]).is_err());
    }
}
