use super::{DomainError, ResolutionStage, ResourceRecord};
use std::net::IpAddr;

/// How an iterative walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    AnswerFound {
        stage: ResolutionStage,
        server: IpAddr,
        record: ResourceRecord,
    },
    QueryFailed {
        stage: ResolutionStage,
        server: IpAddr,
        error: DomainError,
    },
    ReferralExhausted {
        stage: ResolutionStage,
    },
}

impl WalkOutcome {
    pub fn is_answer(&self) -> bool {
        matches!(self, WalkOutcome::AnswerFound { .. })
    }

    pub fn stage(&self) -> ResolutionStage {
        match self {
            WalkOutcome::AnswerFound { stage, .. }
            | WalkOutcome::QueryFailed { stage, .. }
            | WalkOutcome::ReferralExhausted { stage } => *stage,
        }
    }
}

/// Progress step recorded while walking, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    QuerySucceeded {
        stage: ResolutionStage,
        server: IpAddr,
    },
    QueryFailed {
        stage: ResolutionStage,
        server: IpAddr,
        error: DomainError,
    },
    NameserverExtracted {
        hostname: String,
    },
    NameserverResolved {
        hostname: String,
        ip: IpAddr,
    },
    NameserverUnresolved {
        hostname: String,
        error: DomainError,
    },
    StageAdvanced {
        from: ResolutionStage,
        to: ResolutionStage,
        nameservers: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub domain: String,
    pub events: Vec<WalkEvent>,
    pub outcome: WalkOutcome,
}

impl WalkReport {
    /// Stage of every query sent, successful or not.
    pub fn stages_queried(&self) -> Vec<ResolutionStage> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WalkEvent::QuerySucceeded { stage, .. } | WalkEvent::QueryFailed { stage, .. } => {
                    Some(*stage)
                }
                _ => None,
            })
            .collect()
    }

    pub fn query_count(&self) -> usize {
        self.stages_queried().len()
    }

    pub fn answer(&self) -> Option<&ResourceRecord> {
        match &self.outcome {
            WalkOutcome::AnswerFound { record, .. } => Some(record),
            _ => None,
        }
    }
}
