//! End-to-end scoring scenarios.
//!
//! These walk a round hole by hole through the public API and check totals,
//! carry-over and the hole log after every step.

use wolf_golf::core::{HoleOutcome, PlayerId, WinType, WolfGame};
use wolf_golf::rules::{HoleDecision, HoleWinner, WolfStrategy};

const A: PlayerId = PlayerId(0);
const B: PlayerId = PlayerId(1);
const C: PlayerId = PlayerId(2);
const D: PlayerId = PlayerId(3);

fn scores(game: &WolfGame) -> Vec<i64> {
    game.roster().ids().map(|p| game.score(p)).collect()
}

/// Four holes with three players, rotation fixed as [A, B, C].
#[test]
fn test_three_player_round() {
    let mut game = WolfGame::with_rotation(["A", "B", "C"], &[A, B, C]).unwrap();

    // Hole 1: A takes B as partner and they win.
    assert_eq!(game.wolf_for_hole(1), A);
    game.record_hole(A, HoleOutcome::won(&[A, B], WinType::Team))
        .unwrap();
    assert_eq!(scores(&game), vec![1, 1, 0]);
    assert_eq!(game.carry_over(), 0);
    assert_eq!(game.hole_summary()[0].points_awarded, 1);
    game.advance_hole();

    // Hole 2: B goes solo before the tee shot and wins.
    assert_eq!(game.wolf_for_hole(2), B);
    game.record_hole(B, HoleOutcome::won(&[B], WinType::SoloPre))
        .unwrap();
    assert_eq!(scores(&game), vec![1, 4, 0]);
    game.advance_hole();

    // Hole 3: tie.
    assert_eq!(game.wolf_for_hole(3), C);
    game.record_hole(C, HoleOutcome::Tie).unwrap();
    assert_eq!(game.carry_over(), 1);
    assert_eq!(scores(&game), vec![1, 4, 0]);
    assert_eq!(game.hole_summary()[2].points_awarded, 0);
    game.advance_hole();

    // Hole 4: A's opponents win with one carried hole in the pot.
    assert_eq!(game.wolf_for_hole(4), A);
    game.record_hole(A, HoleOutcome::won(&[B, C], WinType::Team))
        .unwrap();
    assert_eq!(scores(&game), vec![1, 6, 2]);
    assert_eq!(game.carry_over(), 0);

    let log: Vec<_> = game
        .hole_summary()
        .iter()
        .map(|r| (r.hole, r.result.as_str(), r.points_awarded, r.carry_over))
        .collect();
    assert_eq!(
        log,
        vec![
            (1, "A + B won (team)", 1, 0),
            (2, "B won (solo_pre)", 3, 0),
            (3, "Tie (No Blood)", 0, 1),
            (4, "B + C won (team)", 2, 1),
        ]
    );
}

/// The same round entered the way a scorer would: strategy plus winner.
#[test]
fn test_three_player_round_from_decisions() {
    let mut game = WolfGame::with_rotation(["A", "B", "C"], &[A, B, C]).unwrap();

    let entries = [
        HoleDecision::new(WolfStrategy::Partner(B), HoleWinner::WolfSide),
        HoleDecision::new(WolfStrategy::SoloPreTee, HoleWinner::WolfSide),
        HoleDecision::new(WolfStrategy::Partner(A), HoleWinner::Tie),
        HoleDecision::new(WolfStrategy::SoloPostTee, HoleWinner::Opponents),
    ];

    for entry in entries {
        let outcome = entry.resolve(&game).unwrap();
        game.record_hole(game.current_wolf(), outcome).unwrap();
        game.advance_hole();
    }

    assert_eq!(scores(&game), vec![1, 6, 2]);
    assert_eq!(game.current_hole(), 5);
    assert_eq!(game.hole_summary().len(), 4);
}

/// A run of ties builds the pot for a solo win.
#[test]
fn test_four_player_carry_over_into_solo() {
    let mut game =
        WolfGame::with_rotation(["Ann", "Bob", "Cat", "Dan"], &[D, C, B, A]).unwrap();

    for hole in 1..=3 {
        let wolf = game.current_wolf();
        let result = game.record_hole(wolf, HoleOutcome::Tie).unwrap();
        assert_eq!(result.carry_over, hole);
        game.advance_hole();
    }

    // Hole 4: Ann is wolf, goes solo after the tee shots and wins.
    assert_eq!(game.current_wolf(), A);
    let result = game
        .record_hole(A, HoleOutcome::won(&[A], WinType::SoloPost))
        .unwrap()
        .clone();
    assert_eq!(result.points_awarded, (3 + 1) * 2);
    assert_eq!(result.carry_over, 3);
    assert_eq!(result.result, "Ann won (solo_post)");
    assert_eq!(game.carry_over(), 0);

    let totals = game.scores();
    assert_eq!(totals["Ann"], 8);
    assert_eq!(totals["Bob"], 0);
    assert_eq!(totals["Cat"], 0);
    assert_eq!(totals["Dan"], 0);
    assert_eq!(game.standings()[0].name, "Ann");
}

/// An 18-hole round keeps cycling the rotation.
#[test]
fn test_full_round_rotation() {
    let mut game = WolfGame::new(["Ann", "Bob", "Cat", "Dan"], 2024).unwrap();
    let rotation = game.rotation().to_vec();

    for hole in 1..=18u32 {
        let wolf = game.current_wolf();
        assert_eq!(wolf, rotation[((hole - 1) % 4) as usize]);
        game.record_hole(wolf, HoleOutcome::won(&[wolf], WinType::SoloPre))
            .unwrap();
        game.advance_hole();
    }

    // Each wolf won all of their holes solo; the first two in the rotation wolfed 5 holes.
    let wins: Vec<i64> = rotation.iter().map(|&p| game.score(p)).collect();
    assert_eq!(wins, vec![15, 15, 12, 12]);
    assert_eq!(game.current_hole(), 19);
    assert_eq!(game.hole_summary().len(), 18);
    assert!(game.hole_summary().iter().all(|r| r.points_awarded == 3));
}
