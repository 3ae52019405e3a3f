mod config;
mod routes;
mod services;
mod state;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(600);

#[tokio::main]
async fn main() {
    // A missing `.env` is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(&config);

    if let Some(demo) = &config.demo_user {
        match state.accounts.register(&demo.name, &demo.email, &demo.password).await {
            Ok(user) => tracing::info!(email = %user.email, "demo account seeded"),
            Err(e) => tracing::warn!(error = %e, "demo account not seeded"),
        }
    }

    let _purge = services::session::spawn_purge_task(state.sessions.clone(), SESSION_PURGE_INTERVAL);

    if !config.site_dir.join("index.html").exists() {
        tracing::warn!(site_dir = %config.site_dir.display(), "client bundle not found; only the API will respond");
    }
    let app = routes::app(state, &config.site_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "learnsync listening");
    axum::serve(listener, app).await.expect("server failed");
}
