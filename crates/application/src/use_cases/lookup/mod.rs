mod iterative;
mod recursive;
mod referrals;

pub use iterative::{IterativeLookupUseCase, WalkOptions};
pub use recursive::{RecursiveLookupReport, RecursiveLookupUseCase};
pub use referrals::resolve_referrals;
