use habit_calendar::{AppState, Config, load_records, router};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let records = load_records(&config.data_path).await;
    info!(
        path = %config.data_path.display(),
        records = records.len(),
        "loaded record store"
    );
    let app = router(AppState::new(config.data_path.clone(), records));

    let addr = config.socket_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
