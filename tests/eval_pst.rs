mod common;

use common::pos;
use negabot::board::{PieceKind, Side};
use negabot::search::eval::{evaluate, piece_value, positional_bonus, side_eval, KNIGHT, PAWN};

#[test]
fn knight_center_better_than_rim() {
    let center = evaluate(&pos("k7/8/8/8/3N4/8/8/7K w - - 0 1"));
    let rim = evaluate(&pos("k7/8/8/8/8/8/8/N6K w - - 0 1"));
    assert!(center > rim, "center eval {center} should be greater than rim {rim}");
}

#[test]
fn pawn_advanced_better_than_back() {
    let advanced = evaluate(&pos("k7/8/8/8/4P3/8/8/7K w - - 0 1"));
    let back = evaluate(&pos("k7/8/8/8/8/8/4P3/7K w - - 0 1"));
    assert!(advanced > back, "advanced pawn eval {advanced} should exceed back pawn {back}");
}

#[test]
fn lone_knight_is_material_plus_square() {
    // Nd4: square 27
    let p = pos("k7/8/8/8/3N4/8/8/7K w - - 0 1");
    let expected = KNIGHT + positional_bonus(PieceKind::Knight, 27, Side::White);
    assert_eq!(side_eval(&p, Side::White), expected);
    assert_eq!(side_eval(&p, Side::Black), 0);
    assert_eq!(evaluate(&p), expected);
}

#[test]
fn score_flips_with_side_to_move() {
    let white = evaluate(&pos("k7/8/8/8/4P3/8/8/7K w - - 0 1"));
    let black = evaluate(&pos("k7/8/8/8/4P3/8/8/7K b - - 0 1"));
    assert_eq!(white, -black);
    assert!(white > PAWN);
}

#[test]
fn kings_carry_no_value() {
    assert_eq!(piece_value(PieceKind::King), 0);
    for sq in 0..64 {
        assert_eq!(positional_bonus(PieceKind::King, sq, Side::Black), 0);
    }
}
