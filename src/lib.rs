#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{fairing::AdHoc, figment::Figment, Build, Rocket};

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

use error::Result;
use logging::LoggerFairing;
use model::{auth::Accounts, catalog::ElectionCatalog};

/// Build the server from `Rocket.toml` and the `ROCKET_*` environment.
///
/// Fails only if the demo account passwords cannot be hashed.
pub fn build() -> Result<Rocket<Build>> {
    rocket_for_figment(rocket::Config::figment())
}

pub(crate) fn rocket_for_figment(figment: Figment) -> Result<Rocket<Build>> {
    let accounts = Accounts::demo()?;
    Ok(rocket::custom(figment)
        .mount("/", api::routes())
        .mount("/api", api::api_routes())
        .register("/", api::catchers())
        .register("/api", api::api_catchers())
        .attach(AdHoc::config::<Config>())
        .attach(LoggerFairing)
        .manage(ElectionCatalog::demo())
        .manage(accounts))
}

/// Configuration for tests: no simulated latency, and nothing read from the
/// environment that tests depend on.
#[cfg(test)]
pub(crate) fn test_figment() -> Figment {
    let config = Config::example();
    rocket::Config::figment()
        .merge(("login_delay", config.login_delay))
        .merge(("submit_delay", config.submit_delay))
        .merge(("jwt_secret", config.jwt_secret))
        .merge(("auth_ttl", config.auth_ttl))
        .merge(("api_url", config.api_url))
        .merge(("registered_voters", config.registered_voters))
}

#[cfg(test)]
pub(crate) fn test_rocket() -> Rocket<Build> {
    rocket_for_figment(test_figment()).unwrap()
}
