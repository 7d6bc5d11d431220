use async_trait::async_trait;
use bytes::Bytes;
use std::net::Ipv4Addr;
use stubdns_application::ports::resolver::{ResolveError, Resolver};
use stubdns_domain::{QueryClass, QueryType};

/// Placeholder resolver: answers every question with one configured IPv4
/// address. Stands in behind the `Resolver` seam until real resolution is
/// wired up.
pub struct FixedResolver {
    address: Ipv4Addr,
}

impl FixedResolver {
    pub fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }
}

#[async_trait]
impl Resolver for FixedResolver {
    async fn resolve(
        &self,
        _name: &str,
        _qtype: QueryType,
        _class: QueryClass,
    ) -> Result<Option<Bytes>, ResolveError> {
        Ok(Some(Bytes::copy_from_slice(&self.address.octets())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_answers_every_question_with_configured_address() {
        let resolver = FixedResolver::new(Ipv4Addr::new(192, 0, 2, 1));

        for (name, qtype) in [
            ("codecrafters.io", QueryType::A),
            ("example.com", QueryType::AAAA),
            ("", QueryType::MX),
        ] {
            let rdata = resolver
                .resolve(name, qtype, QueryClass::IN)
                .await
                .unwrap()
                .expect("fixed resolver always answers");
            assert_eq!(rdata.as_ref(), &[192, 0, 2, 1]);
        }
    }
}
