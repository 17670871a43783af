//! rootwalk domain layer
pub mod config;
pub mod dns_response;
pub mod errors;
pub mod nameserver_set;
pub mod record_type;
pub mod referral;
pub mod resource_record;
pub mod root_hints;
pub mod stage;
pub mod walk;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, NameLookupMode, ResolverConfig};
pub use dns_response::{DnsResponse, ResponseCode};
pub use errors::{DomainError, QueryFailureKind};
pub use nameserver_set::NameserverSet;
pub use record_type::RecordType;
pub use referral::{ReferralRecord, ResolvedReferral};
pub use resource_record::ResourceRecord;
pub use root_hints::{RootServer, ROOT_SERVERS};
pub use stage::ResolutionStage;
pub use walk::{WalkEvent, WalkOutcome, WalkReport};
