use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_proto::serialize::txt::Parser;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Authoritative nameserver on a loopback port, serving records parsed from
/// zone text.
///
/// NS queries for names registered with `delegating` are answered the way a
/// parent zone answers for a cut: empty answer, NS set in authority.
pub struct TestNameserver {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

pub struct TestNameserverBuilder {
    records: Vec<Record>,
    delegations: Vec<Name>,
    rcode: ResponseCode,
    silent: bool,
}

impl TestNameserver {
    pub fn builder() -> TestNameserverBuilder {
        TestNameserverBuilder {
            records: Vec::new(),
            delegations: Vec::new(),
            rcode: ResponseCode::NoError,
            silent: false,
        }
    }

    pub async fn serving(zone: &str) -> Result<Self, std::io::Error> {
        Self::builder().zone(zone).start().await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries_seen(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for TestNameserver {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl TestNameserverBuilder {
    /// Serve every record in `zone`, relative to `example.com.`.
    pub fn zone(mut self, zone: &str) -> Self {
        let origin = Name::from_str(super::ORIGIN).unwrap();
        let (_, record_sets) = Parser::new(zone, None, Some(origin)).parse().unwrap();
        for record_set in record_sets.into_values() {
            self.records
                .extend(record_set.records_without_rrsigs().cloned());
        }
        self
    }

    pub fn delegating(mut self, name: &str) -> Self {
        self.delegations.push(Name::from_str(name).unwrap());
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    /// Receive queries but never answer.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub async fn start(self) -> Result<TestNameserver, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&queries);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        seen.fetch_add(1, Ordering::SeqCst);

                        if self.silent {
                            continue;
                        }

                        let response = self.answer(&query);
                        let mut bytes = Vec::with_capacity(512);
                        let mut encoder = BinEncoder::new(&mut bytes);
                        if response.emit(&mut encoder).is_ok() {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(TestNameserver {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    fn answer(&self, query: &Message) -> Message {
        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        response.set_response_code(self.rcode);
        for question in query.queries() {
            response.add_query(question.clone());
        }

        if self.rcode != ResponseCode::NoError {
            return response;
        }

        let Some(question) = query.queries().first() else {
            return response;
        };

        let delegated = question.query_type() == RecordType::NS
            && self.delegations.iter().any(|cut| cut == question.name());

        let matching = self.records.iter().filter(|record| {
            record.name() == question.name() && record.record_type() == question.query_type()
        });

        for record in matching {
            if delegated {
                response.add_name_server(record.clone());
            } else {
                response.add_answer(record.clone());
            }
        }

        response
    }
}
