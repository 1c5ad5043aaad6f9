mod common;

use common::pos;
use negabot::board::cozy::Position;
use negabot::board::Rules;
use negabot::search::eval::{DRAW_SCORE, MATE_SCORE};
use negabot::search::time::{ManualClock, TimeBudget};
use negabot::search::{Node, Searcher};
use negabot::{EngineConfig, EngineError};

#[test]
fn stalemate_scores_zero_without_a_move() {
    let mut p = pos("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    assert!(p.is_draw());
    assert!(!p.is_checkmate());
    let clock = ManualClock::new(0, 0);
    let budget = TimeBudget::unlimited(&clock);
    let mut s = Searcher::new(EngineConfig::default());
    let node = s.search(&mut p, 3, -MATE_SCORE, MATE_SCORE, 0, &budget);
    assert_eq!(node, Some(Node { score: DRAW_SCORE, best: None }));
}

#[test]
fn stalemated_root_has_no_move_to_play() {
    let mut p = pos("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    let clock = ManualClock::new(60_000, 0);
    let mut engine = negabot::search::Engine::new(EngineConfig::default());
    assert!(matches!(engine.think(&mut p, &clock), Err(EngineError::NoLegalMoves)));
}

#[test]
fn threefold_repetition_is_a_draw() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let moves: Vec<String> = shuffle.iter().chain(shuffle.iter()).map(|s| s.to_string()).collect();
    let mut p = Position::set_from_start_and_moves(&moves).unwrap();
    assert!(p.is_draw());
    let clock = ManualClock::new(0, 0);
    let budget = TimeBudget::unlimited(&clock);
    let mut s = Searcher::new(EngineConfig::default());
    let node = s.search(&mut p, 2, -MATE_SCORE, MATE_SCORE, 0, &budget).unwrap();
    assert_eq!(node.score, DRAW_SCORE);
}

#[test]
fn twofold_repetition_is_not_yet_a_draw() {
    let moves: Vec<String> = ["g1f3", "g8f6", "f3g1", "f6g8"].iter().map(|s| s.to_string()).collect();
    let p = Position::set_from_start_and_moves(&moves).unwrap();
    assert!(!p.is_draw());
}

#[test]
fn fifty_move_rule() {
    assert!(pos("k7/8/8/8/8/8/1R6/7K w - - 100 80").is_draw());
    assert!(!pos("k7/8/8/8/8/8/1R6/7K w - - 99 80").is_draw());
}

#[test]
fn insufficient_material_endings() {
    assert!(pos("k7/8/8/8/8/8/8/6NK w - - 0 1").is_draw());
    assert!(pos("k7/8/8/8/8/8/8/6BK w - - 0 1").is_draw());
    assert!(!pos("k7/8/8/8/8/8/8/5NNK w - - 0 1").is_draw());
    assert!(!pos("k7/8/8/8/8/8/P7/7K w - - 0 1").is_draw());
}

#[test]
fn drawn_root_with_moves_is_still_searched() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let moves: Vec<String> = shuffle.iter().chain(shuffle.iter()).map(|s| s.to_string()).collect();
    let mut p = Position::set_from_start_and_moves(&moves).unwrap();
    assert!(p.is_draw());
    let clock = ManualClock::new(0, 0);
    let budget = TimeBudget::unlimited(&clock);
    let mut engine = negabot::search::Engine::new(EngineConfig::default());
    let r = engine.think_to_depth(&mut p, &budget, 2).unwrap();
    assert_eq!(r.depth, 2, "root should be searched, not replaced by the fallback");
    assert!(p.legal_moves().contains(&r.best_move));
    assert_eq!(p.ply(), 8);
}

#[test]
fn fifty_move_root_is_still_searched() {
    let mut p = pos("k7/8/8/8/8/8/1R6/7K w - - 100 80");
    let clock = ManualClock::new(0, 0);
    let budget = TimeBudget::unlimited(&clock);
    let mut engine = negabot::search::Engine::new(EngineConfig::default());
    let r = engine.think_to_depth(&mut p, &budget, 2).unwrap();
    assert_eq!(r.depth, 2);
    assert!(p.legal_moves().contains(&r.best_move));
}
