use shortly::{auth, config, routing, server, state::AppState};

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    let dotenv = dotenvy::dotenv();

    let settings = config::get_settings();

    init_tracing(settings.json_logs());

    if let Err(e) = dotenv {
        info!("No .env file found, using environment variables: {}", e);
    }

    info!("Starting {} {}...", settings.app_name, settings.version);

    // Route table is fixed for the lifetime of the process
    let policy = routing::AccessPolicy::from_settings(settings)?;
    info!(
        "Protected routes: {}",
        policy.routes().patterns().collect::<Vec<_>>().join(", ")
    );

    let provider = auth::create_provider(settings)?;
    if settings.auth_provider == "session-token"
        && settings.session_public_key.is_none()
        && settings.session_secret.starts_with("change-this")
    {
        warn!("SESSION_SECRET is the development default; sessions are not secure");
    }

    let state = AppState::new(provider, policy);

    let app = server::router(state).nest_service(
        routing::INTERNAL_ASSET_PREFIX,
        ServeDir::new(&settings.assets_dir),
    );

    // Create server address
    let addr: SocketAddr = settings.address().parse()?;

    info!("{} started on http://{}", settings.app_name, addr);

    // Start server with graceful shutdown
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutting down Shortly...");
        },
        _ = terminate => {
            info!("Shutting down Shortly...");
        },
    }
}
