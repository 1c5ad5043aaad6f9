#![allow(dead_code)]

use negabot::board::cozy::Position;
use negabot::board::{PieceKind, Rules};
use negabot::search::eval::{evaluate, DRAW_SCORE, MATE_SCORE};

pub fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

/// Colour-mirrored FEN: ranks reversed, case swapped, side flipped.
/// Only handles positions without castling rights or en passant.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let board: Vec<String> = fields[0]
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                .collect()
        })
        .collect();
    let side = if fields[1] == "w" { "b" } else { "w" };
    format!("{} {} - - {} {}", board.join("/"), side, fields[4], fields[5])
}

/// Unpruned negamax with the same horizon policy as the engine.
pub fn reference_negamax(pos: &mut Position, depth: i32) -> i32 {
    if pos.is_checkmate() { return -MATE_SCORE; }
    if pos.is_draw() { return DRAW_SCORE; }
    let legal = pos.legal_moves();
    let in_check = pos.in_check();
    if depth <= 0 {
        let forcing = in_check
            || legal.iter().any(|&m| matches!(pos.captured_kind(m), Some(k) if k != PieceKind::Pawn));
        if !forcing || depth <= -2 { return evaluate(pos); }
    }
    let quiet = depth > 0 || in_check;
    let mut cands: Vec<_> = legal
        .iter()
        .copied()
        .filter(|&m| quiet || pos.is_capture(m) || pos.is_promotion(m))
        .collect();
    if cands.is_empty() { cands = legal; }
    let mut best = i32::MIN;
    for m in cands {
        pos.make_move(m);
        let score = -reference_negamax(pos, depth - 1);
        pos.undo_move();
        best = best.max(score);
    }
    best
}
