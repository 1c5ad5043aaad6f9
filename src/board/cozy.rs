use cozy_chess::{Board as CozyBoard, BitBoard, Color, File, Move, Piece, Square};

use crate::board::{PieceKind, Rules, Side};
use crate::error::{EngineError, Result};

const LIGHT_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;

/// `cozy_chess::Board` with an undo stack and a hash history for repetition.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<CozyBoard>,
    keys: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(CozyBoard::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| EngineError::Fen(format!("{e:?}")))
    }

    fn from_board(board: CozyBoard) -> Self {
        Self { board, history: Vec::new(), keys: Vec::new() }
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    /// Plies applied since the position was created.
    pub fn ply(&self) -> usize { self.history.len() }

    /// Accepts both standard (e1g1) and king-takes-rook (e1h1) castling.
    pub fn parse_uci(&self, mv_uci: &str) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|&m| self.to_uci(m) == mv_uci || format!("{}", m) == mv_uci)
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<()> {
        match self.parse_uci(mv_uci) {
            Some(m) => { self.make_move(m); Ok(()) }
            None => Err(EngineError::IllegalMove(mv_uci.to_string())),
        }
    }

    /// Standard UCI notation: castling is printed as the king's two-square move.
    pub fn to_uci(&self, mv: Move) -> String {
        if self.is_castle(mv) {
            let file = if (mv.to.file() as usize) > (mv.from.file() as usize) { File::G } else { File::C };
            let to = Square::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        format!("{}", mv)
    }

    pub fn legal_moves_count(&self) -> usize {
        let mut ct = 0usize;
        self.board.generate_moves(|moves| { ct += moves.len(); false });
        ct
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn set_from_fen_and_moves(fen: &str, moves: &[String]) -> Result<Self> {
        let mut pos = Self::from_fen(fen)?;
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    fn is_castle(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move())
    }

    fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| { any = true; true });
        any
    }

    fn is_repetition(&self) -> bool {
        let key = self.board.hash();
        let window = self.board.halfmove_clock() as usize;
        let seen = self.keys.iter().rev().take(window).filter(|&&k| k == key).count();
        seen >= 2
    }

    fn insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 { return true; }
        if !knights.is_empty() { return false; }
        let light = bishops.0 & LIGHT_SQUARES;
        light == 0 || light == bishops.0
    }
}

fn color_of(side: Side) -> Color {
    match side { Side::White => Color::White, Side::Black => Color::Black }
}

fn piece_of(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut v = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { v.extend(ml); false });
        v
    }

    fn make_move(&mut self, mv: Move) {
        self.keys.push(self.board.hash());
        self.history.push(self.board.clone());
        self.board.play(mv);
    }

    fn undo_move(&mut self) {
        if let Some(prev) = self.history.pop() {
            self.board = prev;
            self.keys.pop();
        }
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    fn is_draw(&self) -> bool {
        if self.board.halfmove_clock() >= 100 { return true; }
        if self.insufficient_material() { return true; }
        if self.is_repetition() { return true; }
        !self.in_check() && !self.has_legal_moves()
    }

    fn in_check(&self) -> bool { !self.board.checkers().is_empty() }

    fn hash(&self) -> u64 { self.board.hash() }

    fn side_to_move(&self) -> Side {
        if self.board.side_to_move() == Color::White { Side::White } else { Side::Black }
    }

    fn pieces(&self, side: Side, kind: PieceKind) -> u64 {
        let bb: BitBoard = self.board.colors(color_of(side)) & self.board.pieces(piece_of(kind));
        bb.0
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.captured_kind(mv).is_some()
    }

    fn captured_kind(&self, mv: Move) -> Option<PieceKind> {
        let stm = self.board.side_to_move();
        match self.board.color_on(mv.to) {
            // Own piece on the target square is castling, not a capture.
            Some(c) if c == stm => None,
            Some(_) => self.board.piece_on(mv.to).map(kind_of),
            None => {
                let en_passant = self.board.piece_on(mv.from) == Some(Piece::Pawn)
                    && mv.from.file() != mv.to.file();
                if en_passant { Some(PieceKind::Pawn) } else { None }
            }
        }
    }

    fn is_promotion(&self, mv: Move) -> bool { mv.promotion.is_some() }
}
