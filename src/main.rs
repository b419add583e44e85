#[macro_use]
extern crate rocket;

mod config;
mod cors;
mod db;
mod error;
mod ledger;
mod models;
mod routes;


use config::AppConfig;
use db::DbPool;
use error::ApiError;
use rocket::fairing::{self, AdHoc};
use rocket::figment::Figment;
use rocket::{Build, Rocket};

fn open_ledger(config: &AppConfig) -> Result<DbPool, ApiError> {
    let pool = db::init_db(&config.database_path)?;
    let conn = pool.get()?;
    db::run_migrations(&conn)?;
    let added = db::seed_users(&conn, &config.users)?;
    drop(conn);

    log::info!(
        "cost ledger at {} ready, {} of {} configured users newly seeded",
        config.database_path.display(),
        added,
        config.users.len()
    );
    Ok(pool)
}

async fn init_ledger(rocket: Rocket<Build>) -> fairing::Result {
    let Some(config) = rocket.state::<AppConfig>().cloned() else {
        log::error!("application config is not managed");
        return Err(rocket);
    };

    if let Some(dir) = config
        .database_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        if let Err(err) = std::fs::create_dir_all(dir) {
            log::error!("cannot create {}: {err}", dir.display());
            return Err(rocket);
        }
    }

    match open_ledger(&config) {
        Ok(pool) => Ok(rocket.manage(pool)),
        Err(err) => {
            log::error!("cannot open cost ledger: {err}");
            Err(rocket)
        }
    }
}

fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AdHoc::config::<AppConfig>())
        .attach(AdHoc::try_on_ignite("SQLite cost ledger", init_ledger))
        .attach(cors::Cors)
        .mount("/api", routes::api_routes())
        .mount("/api", cors::preflight_routes())
        .register("/", routes::catchers())
}

#[launch]
fn rocket() -> _ {
    build(rocket::Config::figment())
}
