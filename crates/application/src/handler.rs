use crate::ports::resolver::Resolver;
use std::sync::Arc;
use stubdns_domain::{
    Header, Opcode, ProtocolError, Question, QueryClass, QueryType, ResourceRecord, ResponseCode,
};
use tracing::{debug, warn};

/// Smallest packet that can carry a header.
pub const MIN_PACKET_SIZE: usize = Header::LEN;
/// Largest UDP DNS message without EDNS(0).
pub const MAX_PACKET_SIZE: usize = 512;

/// Per-packet request orchestrator.
///
/// Decodes one inbound message, asks the resolver for answers, and encodes
/// the response. All state is per-call; one handler can serve any number of
/// packets concurrently.
pub struct QueryHandler {
    resolver: Arc<dyn Resolver>,
    answer_ttl: u32,
}

impl QueryHandler {
    pub fn new(resolver: Arc<dyn Resolver>, answer_ttl: u32) -> Self {
        Self {
            resolver,
            answer_ttl,
        }
    }

    /// Process one request packet into one response packet.
    ///
    /// An error means the packet was unusable and nothing should be sent
    /// back; it never affects later packets.
    pub async fn handle(&self, packet: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        if !(MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(&packet.len()) {
            return Err(ProtocolError::PacketLength(packet.len()));
        }

        let request = Header::decode(packet)?;

        let mut questions = Vec::with_capacity(request.question_count as usize);
        let mut offset = Header::LEN;
        for _ in 0..request.question_count {
            let (question, consumed) = Question::decode(packet, offset)?;
            offset += consumed;
            questions.push(question);
        }

        let mut answers = Vec::with_capacity(questions.len());
        for question in &questions {
            match self
                .resolver
                .resolve(&question.name, question.qtype, question.class)
                .await
            {
                Ok(Some(rdata)) => answers.push(ResourceRecord {
                    name: question.name.clone(),
                    rtype: QueryType::A,
                    class: QueryClass::IN,
                    ttl: self.answer_ttl,
                    rdata,
                }),
                Ok(None) => debug!(domain = %question.name, "No answer for question"),
                Err(e) => warn!(domain = %question.name, error = %e, "Resolver failed"),
            }
        }

        let header = Self::response_header(&request, questions.len() as u16, answers.len() as u16);

        let mut response = Vec::with_capacity(MAX_PACKET_SIZE);
        response.extend_from_slice(&header.encode());
        for question in &questions {
            question.encode_into(&mut response);
        }
        for answer in &answers {
            answer.encode_into(&mut response);
        }

        debug!(
            id = request.id,
            questions = questions.len(),
            answers = answers.len(),
            rcode = header.rcode.as_str(),
            "Request handled"
        );

        Ok(response)
    }

    /// Derive the response header from the request header.
    ///
    /// ID, OPCODE, and RD are echoed; everything else is set by this server.
    /// Only standard queries are implemented, any other OPCODE is answered
    /// with NOTIMP. Counts come from the sections actually encoded, never
    /// from the request.
    fn response_header(request: &Header, question_count: u16, answer_count: u16) -> Header {
        let rcode = if request.opcode == Opcode::StandardQuery {
            ResponseCode::NoError
        } else {
            ResponseCode::NotImplemented
        };
        Header {
            id: request.id,
            response: true,
            opcode: request.opcode,
            authoritative: false,
            truncated: false,
            recursion_desired: request.recursion_desired,
            recursion_available: false,
            z: 0,
            rcode,
            question_count,
            answer_count,
            authority_count: 0,
            additional_count: 0,
        }
    }
}
