//! Waitlist server entry-point: loads settings, wires the Resend adapter into
//! the waitlist service, and serves the HTTP API.

mod server;

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use waitlist::domain::WaitlistService;
use waitlist::inbound::http::health::HealthState;
use waitlist::inbound::http::state::HttpState;
use waitlist::outbound::resend::ResendSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = [OsString::from("waitlist")];
    let server_settings = ServerSettings::load_from_iter(args.clone())
        .map_err(|e| io::Error::other(format!("failed to load server settings: {e}")))?;
    let resend_settings = ResendSettings::load_from_iter(args)
        .map_err(|e| io::Error::other(format!("failed to load Resend settings: {e}")))?;

    let binding = resend_settings
        .registry_binding()
        .map_err(|e| io::Error::other(format!("failed to configure Resend: {e}")))?;
    let service = WaitlistService::new(binding);
    if !service.is_configured() {
        warn!("RESEND_API_KEY or RESEND_AUDIENCE_ID unset; signups will fail until configured");
    }
    let http_state = HttpState::new(Arc::new(service));

    let bind_addr = server_settings
        .bind_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, config)?;
    info!(%bind_addr, "waitlist server listening");
    server.await
}
