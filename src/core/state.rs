//! The Wolf scoring engine.
//!
//! `WolfGame` owns everything about one round:
//! - Roster and the fixed wolf rotation
//! - Running per-player totals
//! - Current hole and carry-over from tied holes
//! - The append-only hole log
//!
//! It is mutated only by `record_hole` and `advance_hole`. Everything else
//! is a read.
//!
//! ## Example
//!
//! ```
//! use wolf_golf::core::{HoleOutcome, PlayerId, WinType, WolfGame};
//!
//! let rotation = [PlayerId(0), PlayerId(1), PlayerId(2)];
//! let mut game = WolfGame::with_rotation(["Ann", "Bob", "Cat"], &rotation).unwrap();
//!
//! let wolf = game.wolf_for_hole(game.current_hole());
//! game.record_hole(wolf, HoleOutcome::won(&[PlayerId(0), PlayerId(1)], WinType::Team))
//!     .unwrap();
//! game.advance_hole();
//!
//! assert_eq!(game.scores()["Ann"], 1);
//! assert_eq!(game.scores()["Cat"], 0);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{Result, WolfError};
use super::hole::{HoleOutcome, HoleResult, Team, WinType, TIE_TEXT};
use super::player::{PlayerId, PlayerMap, Roster};
use super::rng::GameRng;
use crate::rules::scoring::{self, Standing};

/// Complete state of a Wolf round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfGame {
    roster: Roster,

    /// Wolf order, a permutation of the roster. Fixed for the game.
    rotation: Vec<PlayerId>,

    scores: PlayerMap<i64>,

    /// Starts at 1.
    current_hole: u32,

    /// Consecutive tied holes immediately before the current one.
    carry_over: u32,

    hole_results: Vector<HoleResult>,

    /// Whether `current_hole` already has an entry in `hole_results`.
    current_recorded: bool,

    /// Seed the rotation was drawn from, if it was drawn.
    seed: Option<u64>,
}

impl WolfGame {
    /// Start a game with a rotation drawn from `seed`.
    ///
    /// The rotation is a single shuffle of the roster and never changes.
    pub fn new<I, S>(names: I, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Roster::new(names)?;
        let rotation = generate_rotation(&roster, &mut GameRng::new(seed));
        let mut game = Self::from_parts(roster, rotation);
        game.seed = Some(seed);
        Ok(game)
    }

    /// Start a game with a caller-chosen rotation.
    pub fn with_rotation<I, S>(names: I, rotation: &[PlayerId]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Roster::new(names)?;
        if !is_permutation(&roster, rotation) {
            return Err(WolfError::InvalidRotation);
        }
        Ok(Self::from_parts(roster, rotation.to_vec()))
    }

    fn from_parts(roster: Roster, rotation: Vec<PlayerId>) -> Self {
        let scores = PlayerMap::with_default(roster.len());
        Self {
            roster,
            rotation,
            scores,
            current_hole: 1,
            carry_over: 0,
            hole_results: Vector::new(),
            current_recorded: false,
            seed: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn rotation(&self) -> &[PlayerId] {
        &self.rotation
    }

    #[must_use]
    pub fn current_hole(&self) -> u32 {
        self.current_hole
    }

    #[must_use]
    pub fn carry_over(&self) -> u32 {
        self.carry_over
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the current hole already has a result.
    #[must_use]
    pub fn is_current_hole_recorded(&self) -> bool {
        self.current_recorded
    }

    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.roster.id_of(name)
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.roster.name(player)
    }

    /// Wolf for a 1-based hole number.
    ///
    /// Cycles through the rotation: hole `h` and hole `h + player_count`
    /// always share a wolf. Hole 0 wraps to the last player in the rotation.
    #[must_use]
    pub fn wolf_for_hole(&self, hole: u32) -> PlayerId {
        let n = self.rotation.len() as u64;
        let index = (u64::from(hole) + n - 1) % n;
        self.rotation[index as usize]
    }

    /// Wolf for the hole being played.
    #[must_use]
    pub fn current_wolf(&self) -> PlayerId {
        self.wolf_for_hole(self.current_hole)
    }

    /// Running total for one player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    /// Totals for every player by name, zero included.
    #[must_use]
    pub fn scores(&self) -> FxHashMap<String, i64> {
        self.roster
            .iter()
            .map(|(id, name)| (name.to_string(), self.scores[id]))
            .collect()
    }

    /// Players ordered by score, highest first.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        scoring::standings(&self.roster, &self.scores)
    }

    /// Every recorded hole, in order.
    #[must_use]
    pub fn hole_summary(&self) -> &Vector<HoleResult> {
        &self.hole_results
    }

    // === Mutation ===

    /// Record the outcome of the current hole.
    ///
    /// A tie adds one to the carry-over. A won hole pays
    /// `(carry_over + 1) * multiplier` to every credited player and clears
    /// the carry-over. The hole counter is not advanced.
    ///
    /// Nothing is changed when an error is returned.
    pub fn record_hole(&mut self, wolf: PlayerId, outcome: HoleOutcome) -> Result<&HoleResult> {
        if self.current_recorded {
            return Err(WolfError::HoleAlreadyRecorded(self.current_hole));
        }
        let expected = self.current_wolf();
        if wolf != expected {
            return Err(WolfError::WrongWolf {
                hole: self.current_hole,
                expected,
                got: wolf,
            });
        }

        let result = match outcome {
            HoleOutcome::Tie => self.record_tie(wolf),
            HoleOutcome::Won { team, win_type } => self.record_win(wolf, team, win_type)?,
        };

        tracing::debug!(
            hole = result.hole,
            wolf = %wolf,
            points = result.points_awarded,
            carry_over = self.carry_over,
            "{}",
            result.result
        );

        let index = self.hole_results.len();
        self.hole_results.push_back(result);
        self.current_recorded = true;
        Ok(&self.hole_results[index])
    }

    fn record_tie(&mut self, wolf: PlayerId) -> HoleResult {
        self.carry_over += 1;
        HoleResult {
            hole: self.current_hole,
            wolf,
            result: TIE_TEXT.to_string(),
            points_awarded: 0,
            carry_over: self.carry_over,
            winners: Team::new(),
            win_type: None,
        }
    }

    fn record_win(&mut self, wolf: PlayerId, team: Team, win_type: WinType) -> Result<HoleResult> {
        self.check_team(&team)?;

        let total_points = scoring::hole_points(self.carry_over, win_type);
        for &player in &team {
            self.scores[player] += total_points;
        }

        let names: Vec<&str> = team
            .iter()
            .filter_map(|&p| self.roster.name(p))
            .collect();

        let result = HoleResult {
            hole: self.current_hole,
            wolf,
            result: format!("{} won ({})", names.join(" + "), win_type),
            points_awarded: total_points,
            carry_over: self.carry_over,
            winners: team,
            win_type: Some(win_type),
        };

        self.carry_over = 0;
        Ok(result)
    }

    fn check_team(&self, team: &[PlayerId]) -> Result<()> {
        if team.is_empty() {
            return Err(WolfError::EmptyTeam);
        }
        for (i, &player) in team.iter().enumerate() {
            if !self.roster.contains(player) {
                return Err(WolfError::UnknownPlayerId(player));
            }
            if team[..i].contains(&player) {
                return Err(WolfError::DuplicateTeamMember(player));
            }
        }
        Ok(())
    }

    /// Move to the next hole.
    pub fn advance_hole(&mut self) {
        self.current_hole += 1;
        self.current_recorded = false;
        tracing::debug!(hole = self.current_hole, wolf = %self.current_wolf(), "Advanced hole");
    }

    /// Check the structural invariants of a game that came from outside
    /// (e.g. a decoded snapshot).
    pub fn check_consistency(&self) -> Result<()> {
        // Re-run the roster checks: empty, duplicate names, too many players.
        let roster = Roster::new(self.roster.iter().map(|(_, name)| name.to_string()))?;
        if !is_permutation(&roster, &self.rotation) {
            return Err(WolfError::InvalidRotation);
        }
        if self.scores.player_count() != roster.len() || self.current_hole == 0 {
            return Err(WolfError::Codec("inconsistent game state".to_string()));
        }

        let last_hole = self.hole_results.last().map(|r| r.hole);
        let log_matches = match last_hole {
            Some(hole) if self.current_recorded => hole == self.current_hole,
            Some(hole) => hole < self.current_hole,
            None => !self.current_recorded,
        };
        if !log_matches {
            return Err(WolfError::Codec(
                "hole log does not match the current hole".to_string(),
            ));
        }
        Ok(())
    }
}

/// Draw a wolf rotation: one uniform shuffle of the roster.
pub fn generate_rotation(roster: &Roster, rng: &mut GameRng) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = roster.ids().collect();
    rng.shuffle(&mut order);
    order
}

fn is_permutation(roster: &Roster, rotation: &[PlayerId]) -> bool {
    if rotation.len() != roster.len() {
        return false;
    }
    let mut sorted = rotation.to_vec();
    sorted.sort();
    sorted.iter().copied().eq(roster.ids())
}
