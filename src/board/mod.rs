pub mod cozy;

/// Side to move / piece colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The rules-engine collaborator consumed by the search.
///
/// Squares are indexed a1 = 0 .. h8 = 63; `pieces` returns a bitboard in the
/// same layout. `make_move`/`undo_move` follow strict LIFO pairing.
pub trait Rules {
    type Move: Copy + Eq + std::fmt::Debug + std::fmt::Display;

    /// Full legal move list, order unspecified.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn make_move(&mut self, mv: Self::Move);
    fn undo_move(&mut self);

    fn is_checkmate(&self) -> bool;
    /// Stalemate, threefold repetition, fifty-move rule or insufficient material.
    fn is_draw(&self) -> bool;
    fn in_check(&self) -> bool;

    fn hash(&self) -> u64;
    fn side_to_move(&self) -> Side;
    fn pieces(&self, side: Side, kind: PieceKind) -> u64;

    fn is_capture(&self, mv: Self::Move) -> bool;
    /// Kind of the piece removed by `mv`, if any (a pawn for en passant).
    fn captured_kind(&self, mv: Self::Move) -> Option<PieceKind>;
    fn is_promotion(&self, mv: Self::Move) -> bool;
}
