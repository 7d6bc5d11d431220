use crate::errors::ProtocolError;
use crate::name;

/// 16-bit query type. Unknown values are preserved for re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

impl QueryType {
    pub fn from_wire(value: u16) -> Self {
        match value {
            1 => QueryType::A,
            2 => QueryType::NS,
            5 => QueryType::CNAME,
            6 => QueryType::SOA,
            12 => QueryType::PTR,
            15 => QueryType::MX,
            16 => QueryType::TXT,
            28 => QueryType::AAAA,
            v => QueryType::Unknown(v),
        }
    }

    pub fn to_wire(self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::SOA => 6,
            QueryType::PTR => 12,
            QueryType::MX => 15,
            QueryType::TXT => 16,
            QueryType::AAAA => 28,
            QueryType::Unknown(v) => v,
        }
    }
}

/// 16-bit query class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    IN,
    CH,
    HS,
    Unknown(u16),
}

impl QueryClass {
    pub fn from_wire(value: u16) -> Self {
        match value {
            1 => QueryClass::IN,
            3 => QueryClass::CH,
            4 => QueryClass::HS,
            v => QueryClass::Unknown(v),
        }
    }

    pub fn to_wire(self) -> u16 {
        match self {
            QueryClass::IN => 1,
            QueryClass::CH => 3,
            QueryClass::HS => 4,
            QueryClass::Unknown(v) => v,
        }
    }
}

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QueryType,
    pub class: QueryClass,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: QueryType, class: QueryClass) -> Self {
        Self {
            name: name.into(),
            qtype,
            class,
        }
    }

    /// Append the wire form to `buf`: the name labels, then type and class
    /// as big-endian 16-bit integers.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        name::encode_name(&self.name, buf);
        buf.extend_from_slice(&self.qtype.to_wire().to_be_bytes());
        buf.extend_from_slice(&self.class.to_wire().to_be_bytes());
    }

    /// Encode a whole question section in input order.
    pub fn encode_all(questions: &[Question]) -> Vec<u8> {
        let mut buf = Vec::new();
        for question in questions {
            question.encode_into(&mut buf);
        }
        buf
    }

    /// Decode one question starting at `offset`.
    ///
    /// Returns the question and the bytes consumed, which the caller adds to
    /// `offset` to find the next question of a multi-question packet.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Question, usize), ProtocolError> {
        let (name, name_len) = name::decode_name(buf, offset)?;
        let fixed = buf
            .get(offset + name_len..offset + name_len + 4)
            .ok_or(ProtocolError::TruncatedQuestion(offset + name_len))?;
        let question = Question {
            name,
            qtype: QueryType::from_wire(u16::from_be_bytes([fixed[0], fixed[1]])),
            class: QueryClass::from_wire(u16::from_be_bytes([fixed[2], fixed[3]])),
        };
        Ok((question, name_len + 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let question = Question::new("codecrafters.io", QueryType::A, QueryClass::IN);
        let mut buf = Vec::new();
        question.encode_into(&mut buf);
        assert_eq!(buf, b"\x0ccodecrafters\x02io\x00\x00\x01\x00\x01");
    }

    #[test]
    fn test_decode_reports_bytes_consumed() {
        let question = Question::new("example.com", QueryType::AAAA, QueryClass::CH);
        let encoded = Question::encode_all(std::slice::from_ref(&question));
        let (decoded, consumed) = Question::decode(&encoded, 0).unwrap();
        assert_eq!(decoded, question);
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn test_unknown_type_and_class_round_trip() {
        let question = Question::new("x", QueryType::Unknown(999), QueryClass::Unknown(255));
        let encoded = Question::encode_all(std::slice::from_ref(&question));
        let (decoded, _) = Question::decode(&encoded, 0).unwrap();
        assert_eq!(decoded, question);
    }

    #[test]
    fn test_missing_type_and_class_is_truncated() {
        let mut buf = Vec::new();
        crate::name::encode_name("a", &mut buf);
        buf.extend_from_slice(&[0x00, 0x01]);
        assert_eq!(
            Question::decode(&buf, 0),
            Err(ProtocolError::TruncatedQuestion(3))
        );
    }
}
