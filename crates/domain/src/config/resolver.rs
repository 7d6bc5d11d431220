use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Settings for the placeholder resolver.
///
/// Every question is answered with `answer_address` until a real resolver
/// is plugged in behind the resolver seam.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IPv4 address returned for every question (default: 192.0.2.1,
    /// from the TEST-NET-1 documentation range)
    #[serde(default = "default_answer_address")]
    pub answer_address: Ipv4Addr,

    /// TTL in seconds stamped on every answer (default: 60)
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_answer_address() -> Ipv4Addr {
    Ipv4Addr::new(192, 0, 2, 1)
}

fn default_ttl() -> u32 {
    60
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            answer_address: default_answer_address(),
            ttl: default_ttl(),
        }
    }
}
