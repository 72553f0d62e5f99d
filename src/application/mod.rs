//! Application Layer
//!
//! Contains the city info service and data transfer objects (DTOs).
//! This layer orchestrates the flow of data between the presentation
//! and domain layers.

pub mod services;
pub mod dto;
