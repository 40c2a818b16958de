#[macro_use]
extern crate log;

use featuremap_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, cfg: Cfg, version: &'static str) -> anyhow::Result<()> {
    web::run(connections.into(), cfg, version).await
}
