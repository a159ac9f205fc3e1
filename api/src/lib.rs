//! HTTP boundary of the ClarityFin backend
//!
//! Library exports so the binary and the integration tests share the same
//! routes, middleware and wiring.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{build_services, configure_routes, AppServices, AppState, HealthProbe};
