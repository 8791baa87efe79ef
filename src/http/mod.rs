//! HTTP server module.
//!
//! Axum-based REST layer exposing the scheduling engine. The two planner
//! endpoints are the crate's two call-sites: the interactive preview
//! (coarse sampling) and the authoritative sequence export (fine
//! sampling). Both delegate to the same service pipeline; only the
//! sampling step differs.
//!
//! Requests are self-contained: the target catalog, location, and setup
//! travel in the request body, so the server holds no mutable state and
//! independent requests are evaluated concurrently.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
