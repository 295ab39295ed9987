//! SIGES staff authentication API.
//!
//! Validates administrative staff ("Personal Administrativo") credentials
//! against Postgres and issues JWT session tokens, honoring role-level
//! lockouts. The wire contract lives in `siges-core`; this crate is the
//! axum service around it.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod state;
