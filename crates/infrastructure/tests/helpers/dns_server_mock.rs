use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use zonediff_infrastructure::dns::forwarding::MessageBuilder;

type Responder = Arc<dyn Fn(&Message) -> Option<Message> + Send + Sync>;

/// Loopback UDP nameserver answering with a scripted responder.
///
/// The responder sees every decoded query; returning `None` drops it, which
/// is how tests simulate an unreachable server.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&Message) -> Option<Message> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let responder: Responder = Arc::new(responder);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let seen = Arc::clone(&queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        seen.fetch_add(1, Ordering::SeqCst);

                        if let Some(response) = responder(&query) {
                            if let Ok(bytes) = MessageBuilder::serialize_message(&response) {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// A server that receives queries but never answers.
    pub async fn silent() -> Result<Self, std::io::Error> {
        Self::start(|_| None).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries_seen(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Empty response echoing the query's ID and question.
pub fn reply_to(query: &Message, rcode: ResponseCode) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.recursion_desired());
    response.set_response_code(rcode);
    for question in query.queries() {
        response.add_query(question.clone());
    }
    response
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        ttl,
        RData::A(A::new(ip[0], ip[1], ip[2], ip[3])),
    )
}

pub fn ns_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        ttl,
        RData::NS(NS(Name::from_str(target).unwrap())),
    )
}
