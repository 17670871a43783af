use std::fmt;

/// Position of the walker in the delegation hierarchy.
///
/// Labels diagnostics only; the walk never branches on it. The derived
/// ordering is `Root < Tld < Auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ResolutionStage {
    #[default]
    Root,
    Tld,
    Auth,
}

impl ResolutionStage {
    /// Stage reached after following one referral. `Auth` is absorbing.
    pub fn next(self) -> Self {
        match self {
            ResolutionStage::Root => ResolutionStage::Tld,
            ResolutionStage::Tld | ResolutionStage::Auth => ResolutionStage::Auth,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Root => "ROOT",
            ResolutionStage::Tld => "TLD",
            ResolutionStage::Auth => "AUTH",
        }
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
