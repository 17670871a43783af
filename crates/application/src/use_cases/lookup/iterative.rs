use super::referrals::resolve_referrals;
use crate::ports::{DnsQueryPort, NameLookupPort};
use rootwalk_domain::{
    DnsResponse, DomainError, NameserverSet, ResolutionStage, ResolverConfig, WalkEvent,
    WalkOutcome, WalkReport,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Query the remaining servers of a stage before giving up on it.
    pub try_all_candidates: bool,
    /// Resolve every distinct NS hostname of a referral only once.
    pub dedupe_ns_hostnames: bool,
}

impl From<&ResolverConfig> for WalkOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            try_all_candidates: config.try_all_candidates,
            dedupe_ns_hostnames: config.dedupe_ns_hostnames,
        }
    }
}

enum StageResult {
    Responded(IpAddr, DnsResponse),
    Failed(IpAddr, DomainError),
    NoCandidates,
}

/// Iterative resolution from the root servers down the delegation chain.
///
/// Each round queries the current stage's servers, stops on the first
/// answer, and otherwise builds the next stage's servers from the NS records
/// of the referral. Queries and hostname lookups are awaited strictly one at
/// a time.
pub struct IterativeLookupUseCase {
    query: Arc<dyn DnsQueryPort>,
    lookup: Arc<dyn NameLookupPort>,
    roots: NameserverSet,
    options: WalkOptions,
}

impl IterativeLookupUseCase {
    pub fn new(
        query: Arc<dyn DnsQueryPort>,
        lookup: Arc<dyn NameLookupPort>,
        roots: NameserverSet,
    ) -> Self {
        Self {
            query,
            lookup,
            roots,
            options: WalkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn execute(&self, domain: &str) -> WalkReport {
        info!(domain = %domain, "Starting iterative lookup");

        let mut events = Vec::new();
        let mut nameservers = self.roots.clone();
        let mut stage = ResolutionStage::Root;

        let outcome = loop {
            let (server, response) =
                match self.query_stage(stage, &nameservers, domain, &mut events).await {
                    StageResult::Responded(server, response) => (server, response),
                    StageResult::Failed(server, error) => {
                        error!(stage = %stage, server = %server, error = %error, "Query failed");
                        break WalkOutcome::QueryFailed {
                            stage,
                            server,
                            error,
                        };
                    }
                    StageResult::NoCandidates => {
                        error!(stage = %stage, domain = %domain, "No nameservers left to query");
                        break WalkOutcome::ReferralExhausted { stage };
                    }
                };

            if let Some(record) = response.first_answer() {
                info!(
                    stage = %stage,
                    server = %server,
                    record_type = %record.record_type,
                    data = %record.data,
                    "Answer found"
                );
                break WalkOutcome::AnswerFound {
                    stage,
                    server,
                    record: record.clone(),
                };
            }

            let referrals = response.referrals();
            for referral in &referrals {
                events.push(WalkEvent::NameserverExtracted {
                    hostname: referral.hostname.clone(),
                });
            }
            debug!(stage = %stage, referrals = referrals.len(), "Referral received");

            let (next, resolved) = resolve_referrals(
                self.lookup.as_ref(),
                &referrals,
                self.options.dedupe_ns_hostnames,
                &mut events,
            )
            .await;

            let next_stage = stage.next();
            debug!(
                resolved_hostnames = resolved.len(),
                nameservers = next.len(),
                "Referral resolved"
            );
            events.push(WalkEvent::StageAdvanced {
                from: stage,
                to: next_stage,
                nameservers: next.len(),
            });

            stage = next_stage;
            nameservers = next;
        };

        WalkReport {
            domain: domain.to_string(),
            events,
            outcome,
        }
    }

    async fn query_stage(
        &self,
        stage: ResolutionStage,
        nameservers: &NameserverSet,
        domain: &str,
        events: &mut Vec<WalkEvent>,
    ) -> StageResult {
        let limit = if self.options.try_all_candidates {
            nameservers.len()
        } else {
            1
        };

        let mut last_failure = None;
        for server in nameservers.iter().take(limit) {
            debug!(stage = %stage, server = %server, domain = %domain, "Querying nameserver");

            match self.query.query(server, domain).await {
                Ok(response) => {
                    info!(stage = %stage, server = %server, "Nameserver responded");
                    events.push(WalkEvent::QuerySucceeded { stage, server });
                    return StageResult::Responded(server, response);
                }
                Err(error) => {
                    if self.options.try_all_candidates {
                        warn!(stage = %stage, server = %server, error = %error, "Query failed, trying next candidate");
                    }
                    events.push(WalkEvent::QueryFailed {
                        stage,
                        server,
                        error: error.clone(),
                    });
                    last_failure = Some((server, error));
                }
            }
        }

        match last_failure {
            Some((server, error)) => StageResult::Failed(server, error),
            None => StageResult::NoCandidates,
        }
    }
}
