//! Backend entry-point: loads settings, wires REST endpoints and OpenAPI docs.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use community_backend::config::AppSettings;
use community_backend::inbound::http::health::HealthState;
use community_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use community_backend::outbound::supabase::SupabaseProject;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let supabase = SupabaseProject::from_settings(
        settings.supabase_url.as_deref(),
        settings.supabase_anon_key.as_deref(),
        settings.request_timeout(),
    )
    .map_err(std::io::Error::other)?;

    let bind_addr = settings.bind_addr();
    let config = ServerConfig::new(session, bind_addr)
        .with_supabase(supabase)
        .with_categories_table(settings.categories_table());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "community backend listening");
    server.await
}
