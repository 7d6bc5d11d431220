use std::net::SocketAddr;
use std::sync::Arc;
use stubdns_application::QueryHandler;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Oversized datagrams must be read whole so the handler can reject them by
/// length instead of the socket silently truncating them.
const RECV_BUFFER_SIZE: usize = 1024;

/// Connectionless UDP front end.
///
/// Each inbound datagram is an independent request/response cycle: decode
/// failures and send failures are logged and the loop moves on to the next
/// packet.
pub struct UdpServer {
    socket: UdpSocket,
    handler: Arc<QueryHandler>,
}

impl UdpServer {
    pub async fn bind(addr: SocketAddr, handler: Arc<QueryHandler>) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!(bind_address = %socket.local_addr()?, protocol = "UDP", "DNS server listening");
        Ok(Self { socket, handler })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serve datagrams until the socket fails or the task is cancelled.
    pub async fn run(self) -> std::io::Result<()> {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        loop {
            let (len, remote) = self.socket.recv_from(&mut buf).await?;
            debug!(remote = %remote, bytes = len, "Packet received");

            match self.handler.handle(&buf[..len]).await {
                Ok(response) => match self.socket.send_to(&response, remote).await {
                    Ok(sent) => debug!(remote = %remote, bytes = sent, "Response sent"),
                    Err(e) => warn!(remote = %remote, error = %e, "Failed to send response"),
                },
                Err(e) => {
                    warn!(remote = %remote, bytes = len, error = %e, "Dropping malformed packet")
                }
            }
        }
    }
}
