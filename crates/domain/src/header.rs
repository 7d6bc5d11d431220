use crate::errors::ProtocolError;

/// 4-bit query kind. Reserved values survive a decode/encode cycle so a
/// response can echo the request OPCODE verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    #[default]
    StandardQuery,
    InverseQuery,
    ServerStatus,
    Reserved(u8),
}

impl Opcode {
    pub fn from_wire(value: u8) -> Self {
        match value & 0x0f {
            0 => Opcode::StandardQuery,
            1 => Opcode::InverseQuery,
            2 => Opcode::ServerStatus,
            v => Opcode::Reserved(v),
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Opcode::StandardQuery => 0,
            Opcode::InverseQuery => 1,
            Opcode::ServerStatus => 2,
            Opcode::Reserved(v) => v & 0x0f,
        }
    }
}

/// 4-bit response status (RCODE).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Reserved(u8),
}

impl ResponseCode {
    pub fn from_wire(value: u8) -> Self {
        match value & 0x0f {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            v => ResponseCode::Reserved(v),
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Reserved(v) => v & 0x0f,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Reserved(_) => "RESERVED",
        }
    }
}

/// The fixed 12-byte DNS message header.
///
/// Flags are carried as booleans; bit packing happens only in
/// [`Header::encode`] and [`Header::decode`]. The four section counts must
/// match what the message body actually contains; callers building a
/// response recompute them from the encoded sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    /// QR bit: false for a query, true for a response.
    pub response: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// 3-bit reserved field. Zero on everything we emit.
    pub z: u8,
    pub rcode: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub const LEN: usize = 12;

    /// Pack into wire format, big-endian throughout.
    ///
    /// Byte 2 is `QR(1) | OPCODE(4) | AA(1) | TC(1) | RD(1)`, byte 3 is
    /// `RA(1) | Z(3) | RCODE(4)`.
    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut buf = [0u8; Self::LEN];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2] = u8::from(self.response) << 7
            | self.opcode.to_wire() << 3
            | u8::from(self.authoritative) << 2
            | u8::from(self.truncated) << 1
            | u8::from(self.recursion_desired);
        buf[3] = u8::from(self.recursion_available) << 7 | (self.z & 0x07) << 4 | self.rcode.to_wire();
        buf[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.additional_count.to_be_bytes());
        buf
    }

    /// Unpack from the first 12 bytes of `buf`. Pure function of the input;
    /// extra bytes past the header are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        if buf.len() < Self::LEN {
            return Err(ProtocolError::TruncatedHeader(buf.len()));
        }
        Ok(Self {
            id: u16::from_be_bytes([buf[0], buf[1]]),
            response: buf[2] & 0x80 != 0,
            opcode: Opcode::from_wire(buf[2] >> 3),
            authoritative: buf[2] & 0x04 != 0,
            truncated: buf[2] & 0x02 != 0,
            recursion_desired: buf[2] & 0x01 != 0,
            recursion_available: buf[3] & 0x80 != 0,
            z: (buf[3] >> 4) & 0x07,
            rcode: ResponseCode::from_wire(buf[3]),
            question_count: u16::from_be_bytes([buf[4], buf[5]]),
            answer_count: u16::from_be_bytes([buf[6], buf[7]]),
            authority_count: u16::from_be_bytes([buf[8], buf[9]]),
            additional_count: u16::from_be_bytes([buf[10], buf[11]]),
        })
    }
}
