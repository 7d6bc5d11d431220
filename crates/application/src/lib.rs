//! Stub DNS Application Layer
pub mod handler;
pub mod ports;

pub use handler::QueryHandler;
pub use ports::resolver::{ResolveError, Resolver};
