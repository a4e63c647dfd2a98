//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use community_backend::inbound::http::session_config::SessionSettings;
use community_backend::outbound::supabase::SupabaseProject;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) supabase: Option<SupabaseProject>,
    pub(crate) categories_table: String,
}

impl ServerConfig {
    /// Construct a server configuration from session settings and a bind
    /// address. Authentication stays unconfigured until a project is
    /// attached.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            supabase: None,
            categories_table: community_backend::outbound::supabase::DEFAULT_CATEGORIES_TABLE
                .to_owned(),
        }
    }

    /// Attach a Supabase project for the auth and category adapters.
    #[must_use]
    pub fn with_supabase(mut self, project: Option<SupabaseProject>) -> Self {
        self.supabase = project;
        self
    }

    /// Read categories from `table` instead of the default.
    #[must_use]
    pub fn with_categories_table(mut self, table: impl Into<String>) -> Self {
        self.categories_table = table.into();
        self
    }
}
