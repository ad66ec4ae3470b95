mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use roster_gateway::{App, AppState};
use roster_service::EmployeeService;
use roster_storage::{InMemoryRepository, MySqlRepository, Repository};
use roster_telemetry::TelemetrySettings;
use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

const SERVICE_NAME: &str = "roster-gateway";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    let telemetry = TelemetrySettings::builder()
        .service_name(SERVICE_NAME)
        .format(config.log_format.into())
        .otlp_endpoint(config.otlp_endpoint.clone())
        .build();
    let _telemetry = roster_telemetry::init(telemetry).context("failed to initialize tracing")?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting roster gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let pool = MySqlPoolOptions::new()
                .max_connections(config.mysql_max_connections)
                .connect(&mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            let repository = MySqlRepository::new(pool);
            repository
                .init_schema()
                .await
                .context("failed to initialize employees schema")?;
            run_server(config.listen_addr, repository).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    repository: R,
) -> anyhow::Result<()> {
    let directory = EmployeeService::new(repository);
    let router = App::router(AppState::new(Arc::new(directory)));

    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("roster gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
