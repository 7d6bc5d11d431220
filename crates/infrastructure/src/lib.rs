//! Stub DNS Infrastructure Layer
pub mod dns;

pub use dns::{FixedResolver, UdpServer};
