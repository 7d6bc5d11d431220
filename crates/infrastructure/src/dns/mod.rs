pub mod fixed_resolver;
pub mod server;

pub use fixed_resolver::FixedResolver;
pub use server::UdpServer;
