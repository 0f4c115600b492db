//! Costwatch server library.
//!
//! The glue around [`costwatch_core`]:
//! - REST API (router, state, handlers)
//! - mock cost data source with a per-session cache
//! - configuration and server lifecycle

pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use server::Server;
