use crate::ports::NameLookupPort;
use rootwalk_domain::{NameserverSet, ReferralRecord, ResolvedReferral, WalkEvent};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Turns referral hostnames into the next stage's candidate servers.
///
/// Hostnames are resolved one after another in referral order. A hostname
/// that cannot be resolved is recorded as `NameserverUnresolved` and skipped;
/// it never aborts the walk. Addresses shared between hostnames are kept once,
/// at the position they were first seen.
pub async fn resolve_referrals(
    lookup: &dyn NameLookupPort,
    referrals: &[ReferralRecord],
    dedupe_hostnames: bool,
    events: &mut Vec<WalkEvent>,
) -> (NameserverSet, Vec<ResolvedReferral>) {
    let mut nameservers = NameserverSet::new();
    let mut resolved = Vec::with_capacity(referrals.len());
    let mut attempted: HashSet<String> = HashSet::new();

    for referral in referrals {
        if dedupe_hostnames && !attempted.insert(referral.hostname.to_ascii_lowercase()) {
            debug!(hostname = %referral.hostname, "Skipping repeated NS hostname");
            continue;
        }

        match lookup.lookup_addresses(&referral.hostname).await {
            Ok(addresses) => {
                for ip in &addresses {
                    if nameservers.insert(*ip) {
                        debug!(hostname = %referral.hostname, ip = %ip, "Resolved NS hostname");
                        events.push(WalkEvent::NameserverResolved {
                            hostname: referral.hostname.clone(),
                            ip: *ip,
                        });
                    }
                }
                resolved.push(ResolvedReferral {
                    hostname: referral.hostname.clone(),
                    addresses,
                });
            }
            Err(error) => {
                warn!(hostname = %referral.hostname, error = %error, "Could not resolve NS hostname");
                events.push(WalkEvent::NameserverUnresolved {
                    hostname: referral.hostname.clone(),
                    error,
                });
            }
        }
    }

    (nameservers, resolved)
}
