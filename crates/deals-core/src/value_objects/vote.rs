//! Vote direction, transitions, and the heat score delta table
//!
//! A vote action is described by the transition it causes in the ledger:
//! first vote, retraction (re-selecting the active direction), or flip.
//! Each transition maps to a fixed `(Δupvotes, Δdownvotes, Δheat)` triple
//! that is applied to the deal's cached counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a vote on a deal
///
/// Closed two-variant set; anything else is rejected at the API edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Storage encoding: +1 for up, -1 for down
    #[inline]
    pub const fn as_sign(self) -> i16 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Decode the storage encoding; any other value is invalid
    pub const fn from_sign(sign: i16) -> Option<Self> {
        match sign {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The opposite direction
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter deltas produced by a single vote transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreDelta {
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat: i64,
}

impl ScoreDelta {
    pub const fn new(upvotes: i64, downvotes: i64, heat: i64) -> Self {
        Self {
            upvotes,
            downvotes,
            heat,
        }
    }
}

/// State change in the vote ledger caused by one `cast_vote` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum VoteTransition {
    /// No prior entry; a new vote is recorded
    Cast { to: VoteDirection },
    /// Prior entry matched the requested direction; the vote is removed
    Retract { from: VoteDirection },
    /// Prior entry had the opposite direction; the vote is reversed
    Flip {
        from: VoteDirection,
        to: VoteDirection,
    },
}

impl VoteTransition {
    /// Determine the transition for a request, given the current ledger entry.
    ///
    /// Re-selecting the active direction always retracts (toggle semantics).
    pub fn resolve(current: Option<VoteDirection>, requested: VoteDirection) -> Self {
        match current {
            None => Self::Cast { to: requested },
            Some(dir) if dir == requested => Self::Retract { from: dir },
            Some(dir) => Self::Flip {
                from: dir,
                to: requested,
            },
        }
    }

    /// Ledger state after this transition
    pub const fn outcome(self) -> Option<VoteDirection> {
        match self {
            Self::Cast { to } | Self::Flip { to, .. } => Some(to),
            Self::Retract { .. } => None,
        }
    }

    /// The heat score contract: an upvote is worth +2, a downvote -1,
    /// and a flip undoes the old effect before applying the new one.
    ///
    /// These values are the authoritative business rule, not derived state.
    pub const fn delta(self) -> ScoreDelta {
        use VoteDirection::{Down, Up};
        match self {
            Self::Cast { to: Up } => ScoreDelta::new(1, 0, 2),
            Self::Cast { to: Down } => ScoreDelta::new(0, 1, -1),
            Self::Retract { from: Up } => ScoreDelta::new(-1, 0, -2),
            Self::Retract { from: Down } => ScoreDelta::new(0, -1, 1),
            Self::Flip { from: Down, to: Up } => ScoreDelta::new(1, -1, 3),
            Self::Flip { from: Up, to: Down } => ScoreDelta::new(-1, 1, -3),
            // from == to is unreachable via resolve(); treat as a no-op
            Self::Flip { .. } => ScoreDelta::new(0, 0, 0),
        }
    }

    /// Short label for logs and receipts
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Cast { .. } => "cast",
            Self::Retract { .. } => "retracted",
            Self::Flip { .. } => "flipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteDirection::{Down, Up};

    #[test]
    fn test_direction_sign_round_trip() {
        assert_eq!(VoteDirection::from_sign(Up.as_sign()), Some(Up));
        assert_eq!(VoteDirection::from_sign(Down.as_sign()), Some(Down));
        assert_eq!(VoteDirection::from_sign(0), None);
        assert_eq!(VoteDirection::from_sign(2), None);
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Up).unwrap(), "\"up\"");
        let dir: VoteDirection = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(dir, Down);
        assert!(serde_json::from_str::<VoteDirection>("\"sideways\"").is_err());
    }

    #[test]
    fn test_resolve_first_vote() {
        let t = VoteTransition::resolve(None, Up);
        assert_eq!(t, VoteTransition::Cast { to: Up });
        assert_eq!(t.outcome(), Some(Up));
    }

    #[test]
    fn test_resolve_same_direction_retracts() {
        let t = VoteTransition::resolve(Some(Up), Up);
        assert_eq!(t, VoteTransition::Retract { from: Up });
        assert_eq!(t.outcome(), None);
    }

    #[test]
    fn test_resolve_opposite_direction_flips() {
        let t = VoteTransition::resolve(Some(Down), Up);
        assert_eq!(t, VoteTransition::Flip { from: Down, to: Up });
        assert_eq!(t.outcome(), Some(Up));
    }

    #[test]
    fn test_delta_table() {
        assert_eq!(
            VoteTransition::Cast { to: Up }.delta(),
            ScoreDelta::new(1, 0, 2)
        );
        assert_eq!(
            VoteTransition::Cast { to: Down }.delta(),
            ScoreDelta::new(0, 1, -1)
        );
        assert_eq!(
            VoteTransition::Retract { from: Up }.delta(),
            ScoreDelta::new(-1, 0, -2)
        );
        assert_eq!(
            VoteTransition::Retract { from: Down }.delta(),
            ScoreDelta::new(0, -1, 1)
        );
        assert_eq!(
            VoteTransition::Flip { from: Down, to: Up }.delta(),
            ScoreDelta::new(1, -1, 3)
        );
        assert_eq!(
            VoteTransition::Flip { from: Up, to: Down }.delta(),
            ScoreDelta::new(-1, 1, -3)
        );
    }

    #[test]
    fn test_flip_equals_retract_plus_cast() {
        // down->up must equal undoing the down and applying the up
        let undo = VoteTransition::Retract { from: Down }.delta();
        let redo = VoteTransition::Cast { to: Up }.delta();
        let flip = VoteTransition::Flip { from: Down, to: Up }.delta();
        assert_eq!(flip.upvotes, undo.upvotes + redo.upvotes);
        assert_eq!(flip.downvotes, undo.downvotes + redo.downvotes);
        assert_eq!(flip.heat, undo.heat + redo.heat);
    }

    #[test]
    fn test_cast_then_retract_nets_zero() {
        let cast = VoteTransition::resolve(None, Down);
        let retract = VoteTransition::resolve(cast.outcome(), Down);
        let net = (
            cast.delta().upvotes + retract.delta().upvotes,
            cast.delta().downvotes + retract.delta().downvotes,
            cast.delta().heat + retract.delta().heat,
        );
        assert_eq!(net, (0, 0, 0));
    }

    #[test]
    fn test_scenario_sequence() {
        // Two users working a single deal through every transition kind.
        let mut up = 0i64;
        let mut down = 0i64;
        let mut heat = 0i64;
        let mut apply = |t: VoteTransition| {
            let d = t.delta();
            up += d.upvotes;
            down += d.downvotes;
            heat += d.heat;
        };

        // A casts up
        let mut a = None;
        let t = VoteTransition::resolve(a, Up);
        a = t.outcome();
        apply(t);
        assert_eq!((up, down, heat), (1, 0, 2));

        // B casts down
        let mut b = None;
        let t = VoteTransition::resolve(b, Down);
        b = t.outcome();
        apply(t);
        assert_eq!((up, down, heat), (1, 1, 1));

        // A flips to down
        let t = VoteTransition::resolve(a, Down);
        a = t.outcome();
        apply(t);
        assert_eq!((up, down, heat), (0, 2, -2));

        // A re-selects down, retracting
        let t = VoteTransition::resolve(a, Down);
        a = t.outcome();
        apply(t);
        assert_eq!((up, down, heat), (0, 1, -1));
        assert_eq!(a, None);

        // B retracts
        let t = VoteTransition::resolve(b, Down);
        b = t.outcome();
        apply(t);
        assert_eq!((up, down, heat), (0, 0, 0));
        assert_eq!(b, None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(VoteTransition::Cast { to: Up }.kind(), "cast");
        assert_eq!(VoteTransition::Retract { from: Up }.kind(), "retracted");
        assert_eq!(
            VoteTransition::Flip { from: Up, to: Down }.kind(),
            "flipped"
        );
    }
}
