use super::resource_record::normalize_name;
use super::{RecordType, ReferralRecord, ResourceRecord};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded DNS response, consumed by one step of a lookup and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    /// Name in the question section, if the reply echoed one.
    pub question: Option<String>,
    pub truncated: bool,
    pub answer: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn new(id: u16, rcode: ResponseCode) -> Self {
        Self {
            id,
            rcode,
            question: None,
            truncated: false,
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn with_question(mut self, name: impl Into<String>) -> Self {
        self.question = Some(name.into());
        self
    }

    /// Whether the echoed question (if any) names `domain`.
    pub fn answers_question_for(&self, domain: &str) -> bool {
        self.question
            .as_deref()
            .map_or(true, |q| normalize_name(q) == normalize_name(domain))
    }

    pub fn with_answer(mut self, record: ResourceRecord) -> Self {
        self.answer.push(record);
        self
    }

    pub fn with_authority(mut self, record: ResourceRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    pub fn first_answer(&self) -> Option<&ResourceRecord> {
        self.answer.first()
    }

    /// NS targets of the authority section, in wire order.
    ///
    /// Repeated hostnames are kept; callers decide whether to collapse them.
    pub fn referrals(&self) -> Vec<ReferralRecord> {
        self.authority
            .iter()
            .filter_map(ResourceRecord::ns_hostname)
            .map(ReferralRecord::new)
            .collect()
    }

    /// Records of `record_type` from the answer section.
    pub fn answers_of(&self, record_type: RecordType) -> impl Iterator<Item = &ResourceRecord> {
        self.answer
            .iter()
            .filter(move |r| r.record_type == record_type)
    }
}
