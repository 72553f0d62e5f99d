//! HTTP API
//!
//! JSON over HTTP for the city catalog, plus health and metrics endpoints.

pub mod handlers;
pub mod routes;
