//! Configuration modules for the registrar API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: Token signing configuration
//! - [`rate_limit`]: API rate limiting configuration

pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
