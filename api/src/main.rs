use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use cf_api::middleware::create_cors;
use cf_api::telemetry::init_tracing;
use cf_api::{build_services, configure_routes};
use cf_core::clock::SystemClock;
use cf_core::services::spawn_cleanup_task;
use cf_infra::{
    create_sms_service, DatabasePool, MySqlOtpRepository, MySqlSubscriptionRepository,
    MySqlUserRepository, SmsServiceAdapter,
};
use cf_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = ?config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting ClarityFin API server"
    );
    if config.auth.is_using_default_secret() {
        tracing::warn!("Using the default JWT secret; set CLARITYFIN__AUTH__JWT_SECRET");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to apply database migrations")?;
    }

    let sms = create_sms_service(&config.sms).context("failed to initialise SMS provider")?;

    let services = build_services(
        &config,
        Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
        Arc::new(MySqlSubscriptionRepository::new(pool.get_pool().clone())),
        Arc::new(MySqlOtpRepository::new(pool.get_pool().clone())),
        Arc::new(SmsServiceAdapter::new(sms)),
        Arc::new(SystemClock),
        Arc::new(pool.clone()),
    );

    let cleanup = config.otp.cleanup_enabled.then(|| {
        spawn_cleanup_task(
            Arc::clone(&services.otp_service),
            Duration::from_secs(config.otp.cleanup_interval_secs),
        )
    });

    let state = web::Data::new(services.state);
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(create_cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    if let Some(handle) = cleanup {
        handle.abort();
    }
    pool.close().await;
    tracing::info!("ClarityFin API server stopped");

    Ok(())
}
