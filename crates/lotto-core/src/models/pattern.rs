use std::fmt;

use serde::{Deserialize, Serialize};

/// Named heuristic patterns carrying a learned weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Consecutive,
    SumRange,
    Distribution,
    BalancedRange,
    LowCluster,
    PairAffinity,
    TripletAffinity,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consecutive => "consecutive",
            Self::SumRange => "sum_range",
            Self::Distribution => "distribution",
            Self::BalancedRange => "balanced_range",
            Self::LowCluster => "low_cluster",
            Self::PairAffinity => "pair_affinity",
            Self::TripletAffinity => "triplet_affinity",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
