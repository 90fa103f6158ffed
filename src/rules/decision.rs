//! Turning a scorer's hole entry into an engine outcome.
//!
//! The scorer answers two questions per hole: how did the wolf play it, and
//! who won. `HoleDecision::resolve` maps those answers onto the credited
//! team and win type that `WolfGame::record_hole` expects.
//!
//! - The wolf's side is the wolf plus partner, the wolf alone when solo, or
//!   every other player when the wolf took no partner.
//! - When the opponents win they are always scored as a plain team win,
//!   whatever the wolf chose.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WolfError};
use crate::core::hole::{HoleOutcome, WinType};
use crate::core::player::PlayerId;
use crate::core::state::WolfGame;

/// How the wolf chose to play the hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WolfStrategy {
    /// Wolf picked a partner.
    Partner(PlayerId),
    /// Wolf took nobody; the rest of the group forms one side.
    NoPartner,
    /// Alone after the tee shots (2x).
    SoloPostTee,
    /// Alone before any tee shot (3x).
    SoloPreTee,
}

impl WolfStrategy {
    #[must_use]
    pub fn win_type(self) -> WinType {
        match self {
            WolfStrategy::Partner(_) | WolfStrategy::NoPartner => WinType::Team,
            WolfStrategy::SoloPostTee => WinType::SoloPost,
            WolfStrategy::SoloPreTee => WinType::SoloPre,
        }
    }
}

/// Which side took the hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleWinner {
    WolfSide,
    Opponents,
    Tie,
}

/// A scorer's entry for the current hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDecision {
    pub strategy: WolfStrategy,
    pub winner: HoleWinner,
}

impl HoleDecision {
    #[must_use]
    pub fn new(strategy: WolfStrategy, winner: HoleWinner) -> Self {
        Self { strategy, winner }
    }

    /// Players on the wolf's side for the current hole.
    pub fn wolf_side(&self, game: &WolfGame) -> Result<Vec<PlayerId>> {
        let wolf = game.current_wolf();
        let side = match self.strategy {
            WolfStrategy::Partner(partner) => {
                if partner == wolf || !game.roster().contains(partner) {
                    return Err(WolfError::InvalidPartner(partner));
                }
                vec![wolf, partner]
            },
            WolfStrategy::NoPartner => game.roster().ids().filter(|&p| p != wolf).collect(),
            WolfStrategy::SoloPostTee | WolfStrategy::SoloPreTee => vec![wolf],
        };
        Ok(side)
    }

    /// Outcome to record for the current hole.
    pub fn resolve(&self, game: &WolfGame) -> Result<HoleOutcome> {
        let side = self.wolf_side(game)?;
        let outcome = match self.winner {
            HoleWinner::Tie => HoleOutcome::Tie,
            HoleWinner::WolfSide => HoleOutcome::won(&side, self.strategy.win_type()),
            HoleWinner::Opponents => {
                let opponents: Vec<PlayerId> = game
                    .roster()
                    .ids()
                    .filter(|p| !side.contains(p))
                    .collect();
                HoleOutcome::won(&opponents, WinType::Team)
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId(0);
    const B: PlayerId = PlayerId(1);
    const C: PlayerId = PlayerId(2);
    const D: PlayerId = PlayerId(3);

    fn game4() -> WolfGame {
        WolfGame::with_rotation(["A", "B", "C", "D"], &[A, B, C, D]).unwrap()
    }

    fn won(team: &[PlayerId], win_type: WinType) -> HoleOutcome {
        HoleOutcome::won(team, win_type)
    }

    #[test]
    fn test_partner_side_wins() {
        let d = HoleDecision::new(WolfStrategy::Partner(C), HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game4()).unwrap(), won(&[A, C], WinType::Team));
    }

    #[test]
    fn test_partner_opponents_win() {
        let d = HoleDecision::new(WolfStrategy::Partner(C), HoleWinner::Opponents);
        assert_eq!(d.resolve(&game4()).unwrap(), won(&[B, D], WinType::Team));
    }

    #[test]
    fn test_solo_sides() {
        let game = game4();

        let d = HoleDecision::new(WolfStrategy::SoloPreTee, HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game).unwrap(), won(&[A], WinType::SoloPre));

        let d = HoleDecision::new(WolfStrategy::SoloPostTee, HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game).unwrap(), won(&[A], WinType::SoloPost));

        // Beating a solo wolf pays the opponents at 1x.
        let d = HoleDecision::new(WolfStrategy::SoloPreTee, HoleWinner::Opponents);
        assert_eq!(d.resolve(&game).unwrap(), won(&[B, C, D], WinType::Team));
    }

    #[test]
    fn test_no_partner_sides() {
        let game = game4();

        let d = HoleDecision::new(WolfStrategy::NoPartner, HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game).unwrap(), won(&[B, C, D], WinType::Team));

        let d = HoleDecision::new(WolfStrategy::NoPartner, HoleWinner::Opponents);
        assert_eq!(d.resolve(&game).unwrap(), won(&[A], WinType::Team));
    }

    #[test]
    fn test_tie_ignores_strategy() {
        let d = HoleDecision::new(WolfStrategy::SoloPreTee, HoleWinner::Tie);
        assert_eq!(d.resolve(&game4()).unwrap(), HoleOutcome::Tie);
    }

    #[test]
    fn test_follows_current_wolf() {
        let mut game = game4();
        game.advance_hole();

        let d = HoleDecision::new(WolfStrategy::Partner(D), HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game).unwrap(), won(&[B, D], WinType::Team));
    }

    #[test]
    fn test_invalid_partner() {
        let game = game4();

        let d = HoleDecision::new(WolfStrategy::Partner(A), HoleWinner::WolfSide);
        assert_eq!(d.resolve(&game).unwrap_err(), WolfError::InvalidPartner(A));

        let d = HoleDecision::new(WolfStrategy::Partner(PlayerId(7)), HoleWinner::Tie);
        assert_eq!(d.resolve(&game).unwrap_err(), WolfError::InvalidPartner(PlayerId(7)));
    }
}
