use super::RecordType;
use std::net::IpAddr;

/// One decoded resource record.
///
/// `name` is the owner name as rendered by the codec (fully qualified, with
/// the trailing dot). `data` is the presentation form of the RDATA, e.g.
/// `93.184.216.34` for A or `a.gtld-servers.net.` for NS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }

    /// Address carried by an A or AAAA record.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.record_type {
            RecordType::A | RecordType::AAAA => self.data.parse().ok(),
            _ => None,
        }
    }

    /// Target hostname of an NS record.
    pub fn ns_hostname(&self) -> Option<&str> {
        (self.record_type == RecordType::NS).then_some(self.data.as_str())
    }

    /// Case-insensitive owner comparison that ignores the root label dot.
    pub fn is_owned_by(&self, domain: &str) -> bool {
        normalize_name(&self.name) == normalize_name(domain)
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
