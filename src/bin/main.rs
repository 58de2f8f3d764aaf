use actix_web::{middleware::Logger, web, HttpServer};
use once_cell::sync::Lazy;
use roster_server::{
    config::Settings,
    http::{admin::AdminGate, routes},
    metrics,
    store::PlayerStore,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration (missing ADMIN_PASSWORD aborts startup)
    let settings = Settings::from_env()?;
    log::info!("starting with {settings:?}");

    // Register domain counters so they show up on /metrics before first use
    Lazy::force(&metrics::PLAYERS_CREATED);

    let store = if settings.seed_test_player {
        PlayerStore::seeded()
    } else {
        PlayerStore::new()
    };
    let store = web::Data::new(store);
    let gate = web::Data::new(AdminGate::new(settings.admin_password.clone()));
    let max_body_bytes = settings.max_body_bytes;

    HttpServer::new(move || {
        routes::app(store.clone(), gate.clone(), max_body_bytes)
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
    })
    .bind(&settings.server_addr)?
    .run()
    .await?;

    Ok(())
}
