//! Configuration module for Stub DNS
//!
//! Structures are organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `server`: bind address and port
//! - `resolver`: placeholder answer settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
