//! Consulta CPF Relay Library
//!
//! This library provides the core functionality for the CPF lookup relay:
//! configuration loading, CPF shape validation, the upstream lookup client
//! with candidate-endpoint fallback, response normalization, and the HTTP
//! handlers.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `cpf`: CPF input validation and normalization.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response data models.
//! - `upstream`: Upstream lookup API client.

// Re-export primary modules for shared use in tests and other binaries
pub mod config;
pub mod cpf;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod upstream;
