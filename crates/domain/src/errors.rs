use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Packet length {0} outside the accepted 12..=512 byte range")]
    PacketLength(usize),

    #[error("Header truncated: got {0} bytes, need 12")]
    TruncatedHeader(usize),

    #[error("Label of {length} bytes at offset {offset} runs past the end of the buffer")]
    MalformedName { offset: usize, length: usize },

    #[error("Name unterminated at offset {0}")]
    UnterminatedName(usize),

    #[error("Question truncated at offset {0}")]
    TruncatedQuestion(usize),

    #[error("Resource record truncated at offset {0}")]
    TruncatedRecord(usize),
}
