//! BMTC WhatsApp bot server.

use std::sync::Arc;

use message_router::MessageRouter;
use mistral_brain::{MistralBrain, MistralBrainConfig};
use tokio::net::TcpListener;
use tracing::{error, info};
use transit::{DemoTransitProvider, TransitProvider};
use whatsapp_webhook::{logging, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    let _logging = logging::init(&config.log_dir, config.debug)?;

    info!("Starting BMTC WhatsApp Bot");
    info!(
        account_sid = %config.twilio.account_sid,
        number = %config.twilio.whatsapp_number,
        "Twilio credentials loaded"
    );

    let brain_config = MistralBrainConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Mistral configuration missing");
    })?;
    let model = brain_config.model.clone();
    let brain = MistralBrain::new(brain_config)?;
    info!(model = %model, "Mistral configuration loaded");

    let router = MessageRouter::new(Arc::new(brain));
    let transit: Arc<dyn TransitProvider> = Arc::new(DemoTransitProvider::new());
    let state = AppState::new(router, transit, model);
    let app = whatsapp_webhook::app(state.clone());

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "Server ready to receive requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down BMTC WhatsApp Bot");
    state.router.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
