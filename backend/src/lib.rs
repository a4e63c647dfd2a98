//! Backend library modules.
//!
//! Hexagonal layout: [`domain`] holds validation, submission and category
//! logic behind ports; [`inbound`] adapts HTTP; [`outbound`] talks to
//! Supabase.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
