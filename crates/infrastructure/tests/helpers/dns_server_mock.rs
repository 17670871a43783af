#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock server saw in one incoming query.
#[derive(Debug, Clone)]
pub struct SeenQuery {
    pub id: u16,
    pub name: String,
    pub qtype: u16,
    pub recursion_desired: bool,
    /// Zero-based position of this query among all received.
    pub index: usize,
}

/// Scripted reply for one query.
#[derive(Debug, Clone)]
pub enum MockReply {
    Answer(Vec<Ipv4Addr>),
    /// Answer with the TC bit set.
    Truncated(Vec<Ipv4Addr>),
    /// Answer echoing a different question name.
    OtherQuestion { name: String, ips: Vec<Ipv4Addr> },
    Referral { zone: String, hosts: Vec<String> },
    NoData,
    NxDomain,
    WrongId,
    Garbage,
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on 127.0.0.1 and answers with `script`.
    pub async fn start<F>(script: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&SeenQuery) -> MockReply + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let index = counter.fetch_add(1, Ordering::SeqCst);
                            let Some((seen, question)) = parse_query(&buf[..len], index) else {
                                continue;
                            };
                            if let Some(response) = build_reply(&seen, question, &script(&seen)) {
                                let _ = socket.send_to(&response, peer).await;
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

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Returns the parsed header info and the raw question section.
fn parse_query(query: &[u8], index: usize) -> Option<(SeenQuery, &[u8])> {
    if query.len() < 12 {
        return None;
    }

    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(query.get(pos..pos + len)?).to_string());
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    let question = query.get(12..pos + 4)?;

    Some((
        SeenQuery {
            id: u16::from_be_bytes([query[0], query[1]]),
            name: format!("{}.", labels.join(".")),
            qtype,
            recursion_desired: query[2] & 0x01 == 0x01,
            index,
        },
        question,
    ))
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn build_reply(seen: &SeenQuery, question: &[u8], reply: &MockReply) -> Option<Vec<u8>> {
    let id = match reply {
        MockReply::Silent => return None,
        MockReply::Garbage => return Some(vec![0xde, 0xad]),
        MockReply::WrongId => seen.id.wrapping_add(1),
        _ => seen.id,
    };
    let rcode = match reply {
        MockReply::NxDomain => 0x03,
        _ => 0x00,
    };

    let truncated = matches!(reply, MockReply::Truncated(_));
    let echoed_question = match reply {
        MockReply::OtherQuestion { name, .. } => {
            let mut q = encode_name(name);
            q.extend_from_slice(&question[question.len() - 4..]);
            q
        }
        _ => question.to_vec(),
    };

    let (answers, authority): (Vec<Vec<u8>>, Vec<Vec<u8>>) = match reply {
        MockReply::Answer(ips)
        | MockReply::Truncated(ips)
        | MockReply::OtherQuestion { ips, .. } => {
            let records = ips
                .iter()
                .map(|ip| {
                    let mut rr = vec![
                        0xc0, 0x0c, // name -> question
                        0x00, 0x01, // A
                        0x00, 0x01, // IN
                        0x00, 0x00, 0x00, 0x3c, // TTL 60
                        0x00, 0x04,
                    ];
                    rr.extend_from_slice(&ip.octets());
                    rr
                })
                .collect();
            (records, vec![])
        }
        MockReply::Referral { zone, hosts } => {
            let records = hosts
                .iter()
                .map(|host| {
                    let target = encode_name(host);
                    let mut rr = encode_name(zone);
                    rr.extend_from_slice(&[0x00, 0x02, 0x00, 0x01, 0x00, 0x02, 0xa3, 0x00]);
                    rr.extend_from_slice(&(target.len() as u16).to_be_bytes());
                    rr.extend_from_slice(&target);
                    rr
                })
                .collect();
            (vec![], records)
        }
        _ => (vec![], vec![]),
    };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&id.to_be_bytes());
    let tc_flag = if truncated { 0x02 } else { 0x00 };
    let rd_flag = if seen.recursion_desired { 0x01 } else { 0x00 };
    response.push(0x80 | tc_flag | rd_flag);
    response.push(rcode);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&(authority.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&echoed_question);
    for rr in answers.iter().chain(authority.iter()) {
        response.extend_from_slice(rr);
    }
    Some(response)
}
