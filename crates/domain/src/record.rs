use crate::errors::ProtocolError;
use crate::name;
use crate::question::{QueryClass, QueryType};
use bytes::Bytes;
use std::net::Ipv4Addr;

/// One answer-section resource record.
///
/// `rdata` is opaque to the codec; its length is type-dependent (4 bytes for
/// an A record) and is written as the RDLENGTH prefix on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: QueryType,
    pub class: QueryClass,
    pub ttl: u32,
    pub rdata: Bytes,
}

impl ResourceRecord {
    /// Build an A record for `address`.
    pub fn a(name: impl Into<String>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rtype: QueryType::A,
            class: QueryClass::IN,
            ttl,
            rdata: Bytes::copy_from_slice(&address.octets()),
        }
    }

    /// Append the wire form to `buf`: name labels, then the fixed 10-byte
    /// block (type, class, TTL, RDLENGTH, all big-endian), then the rdata.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        name::encode_name(&self.name, buf);
        buf.extend_from_slice(&self.rtype.to_wire().to_be_bytes());
        buf.extend_from_slice(&self.class.to_wire().to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&(self.rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.rdata);
    }

    /// Encode a whole answer section in input order.
    pub fn encode_all(records: &[ResourceRecord]) -> Vec<u8> {
        let mut buf = Vec::new();
        for record in records {
            record.encode_into(&mut buf);
        }
        buf
    }

    /// Decode one record starting at `offset`, mirroring [`Question::decode`].
    ///
    /// The server only ever produces records; decode exists so tests can read
    /// back what was written.
    ///
    /// [`Question::decode`]: crate::question::Question::decode
    pub fn decode(buf: &[u8], offset: usize) -> Result<(ResourceRecord, usize), ProtocolError> {
        let (name, name_len) = name::decode_name(buf, offset)?;
        let mut pos = offset + name_len;
        let fixed = buf
            .get(pos..pos + 10)
            .ok_or(ProtocolError::TruncatedRecord(pos))?;
        let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        pos += 10;
        let rdata = buf
            .get(pos..pos + rdlength)
            .ok_or(ProtocolError::TruncatedRecord(pos))?;
        let record = ResourceRecord {
            name,
            rtype: QueryType::from_wire(u16::from_be_bytes([fixed[0], fixed[1]])),
            class: QueryClass::from_wire(u16::from_be_bytes([fixed[2], fixed[3]])),
            ttl: u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]),
            rdata: Bytes::copy_from_slice(rdata),
        };
        Ok((record, name_len + 10 + rdlength))
    }
}
