use async_trait::async_trait;
use rootwalk_application::ports::{DnsQueryPort, NameLookupPort};
use rootwalk_domain::{
    DnsResponse, DomainError, QueryFailureKind, RecordType, ResourceRecord,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

/// Answers queries from a per-server script and records every call.
///
/// Servers without a scripted response time out.
#[derive(Clone, Default)]
pub struct MockDnsQuery {
    responses: Arc<Mutex<HashMap<IpAddr, Result<DnsResponse, DomainError>>>>,
    calls: Arc<Mutex<Vec<(IpAddr, String)>>>,
    always_fail: Arc<Mutex<bool>>,
}

impl MockDnsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, server: IpAddr, response: DnsResponse) {
        self.responses.lock().unwrap().insert(server, Ok(response));
    }

    pub fn set_failure(&self, server: IpAddr, kind: QueryFailureKind) {
        self.responses.lock().unwrap().insert(
            server,
            Err(DomainError::query_failed(server, kind, "scripted failure")),
        );
    }

    pub fn fail_everything(&self) {
        *self.always_fail.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<(IpAddr, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_servers(&self) -> Vec<IpAddr> {
        self.calls().into_iter().map(|(ip, _)| ip).collect()
    }
}

#[async_trait]
impl DnsQueryPort for MockDnsQuery {
    async fn query(&self, server: IpAddr, domain: &str) -> Result<DnsResponse, DomainError> {
        self.calls.lock().unwrap().push((server, domain.to_string()));

        if *self.always_fail.lock().unwrap() {
            return Err(DomainError::query_failed(
                server,
                QueryFailureKind::Transport,
                "network unreachable",
            ));
        }

        self.responses
            .lock()
            .unwrap()
            .get(&server)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::query_failed(
                    server,
                    QueryFailureKind::Timeout,
                    "no scripted response",
                ))
            })
    }
}

/// Lookup backend with fixed answers per (hostname, type).
///
/// Unknown names are NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockNameLookup {
    records: Arc<Mutex<HashMap<(String, RecordType), Result<Vec<ResourceRecord>, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockNameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_records(&self, hostname: &str, record_type: RecordType, records: Vec<ResourceRecord>) {
        self.records
            .lock()
            .unwrap()
            .insert((hostname.to_string(), record_type), Ok(records));
    }

    pub fn set_addresses(&self, hostname: &str, addrs: &[&str]) {
        self.set_records(hostname, RecordType::A, super::a_records(hostname, addrs));
    }

    pub fn set_error(&self, hostname: &str, record_type: RecordType, error: DomainError) {
        self.records
            .lock()
            .unwrap()
            .insert((hostname.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lookups_of(&self, hostname: &str) -> usize {
        self.calls().iter().filter(|(h, _)| h == hostname).count()
    }
}

#[async_trait]
impl NameLookupPort for MockNameLookup {
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((hostname.to_string(), record_type));

        self.records
            .lock()
            .unwrap()
            .get(&(hostname.to_string(), record_type))
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NxDomain(hostname.to_string())))
    }
}
