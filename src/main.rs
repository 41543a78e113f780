use std::{net::SocketAddr, sync::Arc};

use tokio::signal;
use tracing::{error, info, warn};

use casa_admin as api;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = api::config::load_config()?;
    api::config::init_tracing(cfg.log_level(), cfg.log_json);

    // Init DB
    let db_pool = api::db::establish_connection_from_app_config(&cfg).await?;
    if cfg.auto_migrate {
        api::db::run_migrations(&db_pool).await.map_err(|e| {
            error!("Failed running migrations: {}", e);
            e
        })?;
    }
    let db_arc = Arc::new(db_pool);

    // Init events
    let (event_sender, event_rx) = api::events::channel(api::events::EVENT_CHANNEL_CAPACITY);
    tokio::spawn(api::events::process_events(event_rx));

    if cfg.cors_allow_any_origin && cfg.cors_allow_credentials {
        warn!("CORS allows any origin; credentials will not be sent cross-origin");
    }

    let host: std::net::IpAddr = cfg.host.parse()?;
    let addr = SocketAddr::new(host, cfg.port);

    let app_state = api::AppState::new(db_arc, cfg, event_sender);
    let app = api::build_router(app_state);

    // Bind and serve
    info!("casa-admin listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("casa-admin stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
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
}
