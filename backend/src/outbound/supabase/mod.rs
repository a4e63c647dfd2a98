//! Supabase outbound adapters.
//!
//! [`SupabaseProject`] holds the project URL, anon key and HTTP client. The
//! auth adapter implements `AuthProvider` against GoTrue and the category
//! adapter implements `CategorySource` against PostgREST.

mod auth;
mod categories;
mod config;
mod dto;

pub use auth::SupabaseAuthProvider;
pub use categories::{DEFAULT_CATEGORIES_TABLE, SupabaseCategorySource};
pub use config::{
    PLACEHOLDER_ANON_KEY, PLACEHOLDER_URL, SupabaseConfigError, SupabaseProject,
};
