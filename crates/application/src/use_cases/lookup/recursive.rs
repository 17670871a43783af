use crate::ports::NameLookupPort;
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::{info, warn};

/// Record types fetched by a recursive lookup, in order.
const RECURSIVE_TYPES: [RecordType; 2] = [RecordType::NS, RecordType::A];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursiveLookupReport {
    pub domain: String,
    /// Records gathered before the lookup finished or failed.
    pub records: Vec<ResourceRecord>,
    pub error: Option<DomainError>,
}

impl RecursiveLookupReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Hands the whole resolution to the lookup backend: NS records of the
/// domain first, then its A records. The first failure ends the lookup.
pub struct RecursiveLookupUseCase {
    lookup: Arc<dyn NameLookupPort>,
}

impl RecursiveLookupUseCase {
    pub fn new(lookup: Arc<dyn NameLookupPort>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, domain: &str) -> RecursiveLookupReport {
        info!(domain = %domain, "Starting recursive lookup");

        let mut records = Vec::new();
        for record_type in RECURSIVE_TYPES {
            match self.lookup.lookup(domain, record_type).await {
                Ok(found) => records.extend(found),
                Err(error) => {
                    warn!(domain = %domain, record_type = %record_type, error = %error, "Recursive lookup failed");
                    return RecursiveLookupReport {
                        domain: domain.to_string(),
                        records,
                        error: Some(error),
                    };
                }
            }
        }

        RecursiveLookupReport {
            domain: domain.to_string(),
            records,
            error: None,
        }
    }
}
