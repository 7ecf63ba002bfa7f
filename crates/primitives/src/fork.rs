//! The ordered set of consensus forks and the capabilities each one introduces.

use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// A named consensus fork, in activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkName {
    /// The original beacon chain.
    Phase0,
    /// Sync committees and participation flags.
    Altair,
    /// The merge: execution payloads embedded in beacon blocks.
    Bellatrix,
    /// Withdrawals.
    Capella,
    /// Blob-carrying transactions.
    Deneb,
    /// Execution-layer requests, compounding validators and churn accounting.
    Electra,
}

/// Flags describing which optional genesis steps a fork requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForkCapabilities {
    /// The state carries current and next sync committees.
    pub sync_committee: bool,
    /// The state carries the latest execution payload header.
    pub execution_payload: bool,
    /// The execution payload header commits to withdrawals.
    pub withdrawals: bool,
    /// The execution payload header carries blob gas accounting.
    pub blob_gas: bool,
    /// Blocks carry execution-layer requests whose commitment must be empty at genesis.
    pub execution_requests: bool,
    /// The state tracks exit and consolidation churn.
    pub churn_accounting: bool,
}

impl ForkName {
    /// Every fork, in activation order.
    pub const ALL: [Self; 6] =
        [Self::Phase0, Self::Altair, Self::Bellatrix, Self::Capella, Self::Deneb, Self::Electra];

    /// Returns the fork activated immediately before this one, if any.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Phase0 => None,
            Self::Altair => Some(Self::Phase0),
            Self::Bellatrix => Some(Self::Altair),
            Self::Capella => Some(Self::Bellatrix),
            Self::Deneb => Some(Self::Capella),
            Self::Electra => Some(Self::Deneb),
        }
    }

    /// Returns the [ForkCapabilities] of this fork.
    pub fn capabilities(self) -> ForkCapabilities {
        ForkCapabilities {
            sync_committee: self >= Self::Altair,
            execution_payload: self >= Self::Bellatrix,
            withdrawals: self >= Self::Capella,
            blob_gas: self >= Self::Deneb,
            execution_requests: self >= Self::Electra,
            churn_accounting: self >= Self::Electra,
        }
    }

    /// Returns `true` if this is the first fork to embed an execution payload header.
    pub fn is_first_execution_fork(self) -> bool {
        self.capabilities().execution_payload &&
            self.previous().is_some_and(|prev| !prev.capabilities().execution_payload)
    }
}

impl fmt::Display for ForkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phase0 => "phase0",
            Self::Altair => "altair",
            Self::Bellatrix => "bellatrix",
            Self::Capella => "capella",
            Self::Deneb => "deneb",
            Self::Electra => "electra",
        };
        f.write_str(name)
    }
}

impl FromStr for ForkName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fork| fork.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown fork: {s}"))
    }
}
