//! Hole outcomes and the per-hole result log.
//!
//! A hole ends either tied ("no blood") or won by a team. A won hole carries
//! the credited players and how the wolf played it, which fixes the point
//! multiplier:
//!
//! | `WinType` | tag | multiplier |
//! |---|---|---|
//! | `Team` | `team` | 1 |
//! | `SoloPost` | `solo_post` | 2 |
//! | `SoloPre` | `solo_pre` | 3 |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::WolfError;
use super::player::PlayerId;

/// Players credited with a hole. Inline for up to four players.
pub type Team = SmallVec<[PlayerId; 4]>;

/// Result text for a tied hole.
pub const TIE_TEXT: &str = "Tie (No Blood)";

/// How a won hole was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    /// Wolf took a partner, or the opponents won.
    Team,
    /// Wolf went alone after seeing the tee shots.
    SoloPost,
    /// Wolf went alone before any tee shot.
    SoloPre,
}

impl WinType {
    pub const ALL: [WinType; 3] = [WinType::Team, WinType::SoloPost, WinType::SoloPre];

    /// Point multiplier for this way of winning.
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            WinType::Team => 1,
            WinType::SoloPost => 2,
            WinType::SoloPre => 3,
        }
    }

    /// Short tag used in result text and at string boundaries.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            WinType::Team => "team",
            WinType::SoloPost => "solo_post",
            WinType::SoloPre => "solo_pre",
        }
    }
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WinType {
    type Err = WolfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WinType::ALL
            .into_iter()
            .find(|w| w.tag() == s)
            .ok_or_else(|| WolfError::UnknownWinType(s.to_string()))
    }
}

/// What happened on a hole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleOutcome {
    /// Nobody won; the pot carries to the next hole.
    Tie,
    /// `team` won the hole, scored with `win_type`'s multiplier.
    Won { team: Team, win_type: WinType },
}

impl HoleOutcome {
    /// A won hole credited to `team`.
    #[must_use]
    pub fn won(team: &[PlayerId], win_type: WinType) -> Self {
        HoleOutcome::Won {
            team: SmallVec::from_slice(team),
            win_type,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, HoleOutcome::Tie)
    }
}

/// One entry in the hole log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    /// Hole number (1-based).
    pub hole: u32,

    /// Wolf for this hole.
    pub wolf: PlayerId,

    /// Human-readable outcome, e.g. `"Ann + Bob won (team)"`.
    pub result: String,

    /// Points given to each credited player. Zero for a tie.
    pub points_awarded: i64,

    /// Carry-over in effect: the new count after a tie, or the count that
    /// was cashed in on a won hole.
    pub carry_over: u32,

    /// Credited players; empty for a tie.
    pub winners: Team,

    /// `None` for a tie.
    pub win_type: Option<WinType>,
}

impl HoleResult {
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.win_type.is_none()
    }
}
