//! End-to-end UDP flow test
//!
//! Starts the stub server on an ephemeral port and drives it with raw
//! datagrams: query → decode → fabricated answer → response.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use stubdns_application::QueryHandler;
use stubdns_domain::{
    Header, Opcode, Question, QueryClass, QueryType, ResourceRecord, ResponseCode,
};
use stubdns_infrastructure::{FixedResolver, UdpServer};
use tokio::net::UdpSocket;

async fn start_server() -> SocketAddr {
    let resolver = Arc::new(FixedResolver::new(Ipv4Addr::new(192, 0, 2, 1)));
    let handler = Arc::new(QueryHandler::new(resolver, 60));
    let server = UdpServer::bind("127.0.0.1:0".parse().unwrap(), handler)
        .await
        .expect("Failed to bind server");
    let addr = server.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    addr
}

fn build_query(id: u16, domain: &str) -> Vec<u8> {
    let header = Header {
        id,
        recursion_desired: true,
        question_count: 1,
        ..Default::default()
    };
    let mut packet = header.encode().to_vec();
    Question::new(domain, QueryType::A, QueryClass::IN).encode_into(&mut packet);
    packet
}

async fn exchange(server: SocketAddr, packet: &[u8]) -> Vec<u8> {
    let client = UdpSocket::bind("127.0.0.1:0").await.expect("client bind");
    client.send_to(packet, server).await.expect("send");

    let mut buf = [0u8; 512];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
        .await
        .expect("Timed out waiting for response")
        .expect("recv");
    buf[..len].to_vec()
}

// ============================================================================
// Round-Trip Flow Tests
// ============================================================================

#[tokio::test]
async fn test_query_gets_fabricated_answer() {
    let server = start_server().await;
    let response = exchange(server, &build_query(0x04d2, "codecrafters.io")).await;

    let header = Header::decode(&response).unwrap();
    assert_eq!(header.id, 0x04d2);
    assert!(header.response);
    assert_eq!(header.opcode, Opcode::StandardQuery);
    assert_eq!(header.rcode, ResponseCode::NoError);
    assert_eq!(header.question_count, 1);
    assert_eq!(header.answer_count, 1);

    let (question, consumed) = Question::decode(&response, Header::LEN).unwrap();
    assert_eq!(question.name, "codecrafters.io");
    assert_eq!(question.qtype, QueryType::A);
    assert_eq!(question.class, QueryClass::IN);

    let (answer, record_len) = ResourceRecord::decode(&response, Header::LEN + consumed).unwrap();
    assert_eq!(answer.name, "codecrafters.io");
    assert_eq!(answer.ttl, 60);
    assert_eq!(answer.rdata.as_ref(), &[192, 0, 2, 1]);
    assert_eq!(Header::LEN + consumed + record_len, response.len());
}

#[tokio::test]
async fn test_malformed_packet_does_not_stop_the_server() {
    let server = start_server().await;

    // Undersized garbage gets no response and must not kill the loop.
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(&[0xff; 5], server).await.unwrap();

    // A valid query right after still gets answered.
    let response = exchange(server, &build_query(0x0101, "example.com")).await;
    let header = Header::decode(&response).unwrap();
    assert_eq!(header.id, 0x0101);
    assert_eq!(header.answer_count, 1);
}

#[tokio::test]
async fn test_consecutive_queries_are_independent() {
    let server = start_server().await;

    for (id, domain) in [(1u16, "one.example"), (2, "two.example"), (3, "three.example")] {
        let response = exchange(server, &build_query(id, domain)).await;
        let header = Header::decode(&response).unwrap();
        assert_eq!(header.id, id);

        let (question, _) = Question::decode(&response, Header::LEN).unwrap();
        assert_eq!(question.name, domain);
    }
}
