//! Stub DNS Domain Layer
pub mod config;
pub mod errors;
pub mod header;
pub mod name;
pub mod question;
pub mod record;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::ProtocolError;
pub use header::{Header, Opcode, ResponseCode};
pub use question::{Question, QueryClass, QueryType};
pub use record::ResourceRecord;
