mod common;

use common::{pos, reference_negamax};
use negabot::board::Rules;
use negabot::search::eval::MATE_SCORE;
use negabot::search::time::{ManualClock, TimeBudget};
use negabot::search::Searcher;
use negabot::EngineConfig;

const POSITIONS: &[(&str, i32)] = &[
    ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3", 2),
    ("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1", 3),
    ("4k3/ppp2ppp/8/3n4/8/2N5/PPP2PPP/4K3 w - - 0 1", 2),
    ("8/2k5/3p4/p2P1p2/P4P2/2K5/8/8 w - - 0 1", 3),
];

fn check(config: EngineConfig) {
    let clock = ManualClock::new(0, 0);
    let budget = TimeBudget::unlimited(&clock);
    for &(fen, depth) in POSITIONS {
        let mut p = pos(fen);
        let expected = reference_negamax(&mut p, depth);
        let mut s = Searcher::new(config.clone());
        let node = s.search(&mut p, depth, -MATE_SCORE, MATE_SCORE, 0, &budget).unwrap();
        assert_eq!(node.score, expected, "score mismatch on {fen} at depth {depth}");

        // The reported move must actually achieve the score.
        let mv = node.best.expect("root move");
        p.make_move(mv);
        let achieved = -reference_negamax(&mut p, depth - 1);
        p.undo_move();
        assert_eq!(achieved, expected, "bestmove {mv} does not reach {expected} on {fen}");
    }
}

#[test]
fn pruned_search_matches_full_width_without_table() {
    check(EngineConfig { use_tt: false, use_killers: false, ..EngineConfig::default() });
}

#[test]
fn killers_do_not_change_the_result() {
    check(EngineConfig { use_tt: false, use_killers: true, ..EngineConfig::default() });
}
