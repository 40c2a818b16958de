use clap::Parser;

mod cli;
mod config;

use self::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.apply_to(&mut cfg);
    log::debug!("{cfg:?}");

    let Config { db, webserver } = cfg;

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections = featuremap_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    featuremap_db_sqlite::run_embedded_database_migrations(&connections.exclusive()?)?;

    let web_cfg = featuremap_webserver::Cfg {
        address: webserver.address,
        port: webserver.port,
        enable_cors: webserver.enable_cors,
    };
    log::info!("Listening on {}:{}", web_cfg.address, web_cfg.port);
    featuremap_webserver::run(connections, web_cfg, env!("CARGO_PKG_VERSION")).await
}
