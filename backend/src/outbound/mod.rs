//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **supabase**: reqwest-backed authentication and category adapters for a
//!   Supabase project.
//!
//! Adapters are thin translators between domain types and wire payloads. They
//! contain no business logic.

pub mod supabase;
