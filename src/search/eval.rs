use crate::board::{PieceKind, Rules, Side};

pub const PAWN: i32 = 100;
pub const KNIGHT: i32 = 320;
pub const BISHOP: i32 = 330;
pub const ROOK: i32 = 500;
pub const QUEEN: i32 = 900;

// Mate scoring helpers. Mate scores are not ply-adjusted.
pub const MATE_SCORE: i32 = 99_999;
pub const DRAW_SCORE: i32 = 0;

const SCORED: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

// Piece-square tables, written from White's point of view with rank 8 on the
// first row. Black reads them through a vertical mirror.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     35,  35,  35,  35,  35,  35,  35,  35,
     35,  35,  35,  35,  35,  35,  35,  35,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -40, -40, -30, -30, -30, -30, -40, -40,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -40, -40, -30, -30, -30, -30, -40, -40,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,   0,
    -10,   0,   5,   5,   5,   5,   5, -10,
    -10,   0,   0,   0,   0,   5,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => 0,
    }
}

/// Positional bonus for a piece of `side` on square `sq` (a1 = 0).
pub fn positional_bonus(kind: PieceKind, sq: usize, side: Side) -> i32 {
    let idx = match side {
        Side::White => sq ^ 56,
        Side::Black => sq,
    };
    match kind {
        PieceKind::Pawn => PAWN_PST[idx],
        PieceKind::Knight => KNIGHT_PST[idx],
        PieceKind::Bishop => BISHOP_PST[idx],
        PieceKind::Rook => ROOK_PST[idx],
        PieceKind::Queen => QUEEN_PST[idx],
        PieceKind::King => 0,
    }
}

/// Material plus piece-square total for one side.
pub fn side_eval<R: Rules>(pos: &R, side: Side) -> i32 {
    let mut total = 0;
    for &kind in &SCORED {
        let mut bb = pos.pieces(side, kind);
        while bb != 0 {
            let sq = bb.trailing_zeros() as usize;
            bb &= bb - 1;
            total += piece_value(kind) + positional_bonus(kind, sq, side);
        }
    }
    total
}

/// Static evaluation from the side-to-move perspective (negamax-friendly).
pub fn evaluate<R: Rules>(pos: &R) -> i32 {
    let stm = pos.side_to_move();
    side_eval(pos, stm) - side_eval(pos, stm.other())
}

/// Static evaluation from `side`'s perspective, regardless of who is to move.
pub fn evaluate_for<R: Rules>(pos: &R, side: Side) -> i32 {
    side_eval(pos, side) - side_eval(pos, side.other())
}
