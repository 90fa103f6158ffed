//! Point arithmetic and standings.

use serde::{Deserialize, Serialize};

use crate::core::hole::WinType;
use crate::core::player::{PlayerId, PlayerMap, Roster};

/// Points paid to each credited player on a won hole.
///
/// Every tied hole before this one adds another base unit to the pot.
///
/// ```
/// use wolf_golf::core::WinType;
/// use wolf_golf::rules::hole_points;
///
/// assert_eq!(hole_points(0, WinType::Team), 1);
/// assert_eq!(hole_points(1, WinType::Team), 2);
/// assert_eq!(hole_points(2, WinType::SoloPre), 9);
/// ```
#[must_use]
pub fn hole_points(carry_over: u32, win_type: WinType) -> i64 {
    (i64::from(carry_over) + 1) * win_type.multiplier()
}

/// One line of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
}

/// Players sorted by score, highest first. Equal scores keep roster order.
pub fn standings(roster: &Roster, scores: &PlayerMap<i64>) -> Vec<Standing> {
    let mut out: Vec<Standing> = roster
        .iter()
        .map(|(player, name)| Standing {
            player,
            name: name.to_string(),
            score: scores[player],
        })
        .collect();
    out.sort_by(|a, b| b.score.cmp(&a.score));
    out
}
