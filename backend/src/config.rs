//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COMMUNITY_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::supabase::DEFAULT_CATEGORIES_TABLE;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Runtime settings for the community backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMUNITY")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Supabase project URL.
    pub supabase_url: Option<String>,
    /// Supabase anon key.
    pub supabase_anon_key: Option<String>,
    /// Table holding the discussion categories.
    pub categories_table: Option<String>,
    /// Timeout for outbound provider requests, in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl AppSettings {
    /// Configured bind address, or `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Configured categories table, or `business_processes`.
    pub fn categories_table(&self) -> &str {
        self.categories_table
            .as_deref()
            .map(str::trim)
            .filter(|table| !table.is_empty())
            .unwrap_or(DEFAULT_CATEGORIES_TABLE)
    }

    /// Configured outbound timeout, at least one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
