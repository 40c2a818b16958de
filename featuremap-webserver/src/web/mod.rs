use std::net::IpAddr;

use anyhow::anyhow;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, cfg: Cfg, version: &'static str) -> anyhow::Result<()> {
    let Cfg {
        address,
        port,
        enable_cors,
    } = cfg;
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address;
    rocket_cfg.port = port;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        info!("Allow requests from any origin");
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS configuration: {err}"))?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        return Err(anyhow!("Web server failed: {err}"));
    }
    Ok(())
}
