use std::net::IpAddr;

/// NS target taken from the authority section of a referral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralRecord {
    pub hostname: String,
}

impl ReferralRecord {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

/// A referral hostname together with the addresses it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReferral {
    pub hostname: String,
    pub addresses: Vec<IpAddr>,
}
