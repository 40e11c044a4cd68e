//! Shared CLI value types

use clap::ValueEnum;

/// Path provisioning provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// Segment routing (default)
    #[default]
    Sr,
    /// MPLS
    Mpls,
}

impl Provider {
    /// Wire value for the `provider` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Sr => "sr",
            Provider::Mpls => "mpls",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
