//! Deal stage enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five canonical pipeline stages, in board order.
///
/// Every stage is reachable from every other stage, including moves out of
/// `closed_won`/`closed_lost` back into active ones. Enforcing terminality
/// is a caller-side policy, not an engine rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl Stage {
    /// All stages in canonical board order.
    pub const ALL: [Stage; 5] = [
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    /// Stage assigned to new deals when the caller supplies none, and the
    /// board bucket for unrecognized stage strings.
    pub const DEFAULT: Stage = Stage::Qualified;

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Qualified => "qualified",
            Stage::Proposal => "proposal",
            Stage::Negotiation => "negotiation",
            Stage::ClosedWon => "closed_won",
            Stage::ClosedLost => "closed_lost",
        }
    }

    /// Parses a stage string. Returns `None` for anything outside the
    /// canonical five; callers pick their own fallback policy.
    pub fn parse(s: &str) -> Option<Stage> {
        match s {
            "qualified" => Some(Stage::Qualified),
            "proposal" => Some(Stage::Proposal),
            "negotiation" => Some(Stage::Negotiation),
            "closed_won" => Some(Stage::ClosedWon),
            "closed_lost" => Some(Stage::ClosedLost),
            _ => None,
        }
    }

    /// Parses a stage string, bucketing unknown values into the default
    /// stage. This is the board-grouping fallback.
    pub fn parse_or_default(s: &str) -> Stage {
        Self::parse(s).unwrap_or(Self::DEFAULT)
    }

    /// True for `closed_won` and `closed_lost`.
    pub fn is_closed(&self) -> bool {
        matches!(self, Stage::ClosedWon | Stage::ClosedLost)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
