use async_trait::async_trait;
use bytes::Bytes;
use stubdns_domain::{QueryClass, QueryType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Resolver unavailable: {0}")]
    Unavailable(String),
}

/// Capability for turning a question into answer resource data.
///
/// This is the substitution seam for real resolution: the handler only asks
/// for the rdata bytes and wraps them into a record itself. `Ok(None)` means
/// the resolver has no answer for the question.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(
        &self,
        name: &str,
        qtype: QueryType,
        class: QueryClass,
    ) -> Result<Option<Bytes>, ResolveError>;
}
