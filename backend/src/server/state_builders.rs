//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use community_backend::domain::ports::{AuthProvider, CategorySource};
use community_backend::inbound::http::state::HttpState;
use community_backend::outbound::supabase::{SupabaseAuthProvider, SupabaseCategorySource};

use super::ServerConfig;

/// Build handler state from the configured Supabase project.
///
/// Without a project, auth reports itself unconfigured and the category
/// browser serves the built-in list.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (auth, categories): (Option<Arc<dyn AuthProvider>>, Option<Arc<dyn CategorySource>>) =
        match &config.supabase {
            Some(project) => {
                info!(table = %config.categories_table, "using Supabase adapters");
                (
                    Some(Arc::new(SupabaseAuthProvider::new(project.clone()))),
                    Some(Arc::new(SupabaseCategorySource::new(
                        project.clone(),
                        config.categories_table.clone(),
                    ))),
                )
            }
            None => {
                warn!("Supabase not configured; signup and login will report unavailable");
                (None, None)
            }
        };
    web::Data::new(HttpState::new(auth, categories))
}
