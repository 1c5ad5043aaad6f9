use std::ops::{Deref, DerefMut};

use crate::board::{PieceKind, Rules};
use crate::config::EngineConfig;
use crate::search::eval::{evaluate, DRAW_SCORE, MATE_SCORE};
use crate::search::ordering::{order_moves, KillerTable};
use crate::search::time::TimeBudget;
use crate::search::tt::{BestLine, Bound, Entry, Tt};

/// Result of a completed node. An aborted node is `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node<M> {
    pub score: i32,
    pub best: Option<M>,
}

/// Makes a move on construction and undoes it on drop.
struct MoveGuard<'a, R: Rules> {
    pos: &'a mut R,
}

impl<'a, R: Rules> MoveGuard<'a, R> {
    fn new(pos: &'a mut R, mv: R::Move) -> Self {
        pos.make_move(mv);
        Self { pos }
    }
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;
    fn deref(&self) -> &R { self.pos }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R { self.pos }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) { self.pos.undo_move(); }
}

pub struct Searcher<M> {
    config: EngineConfig,
    tt: Tt<M>,
    killers: KillerTable<M>,
    pub(crate) nodes: u64,
}

impl<M: Copy + Eq> Searcher<M> {
    pub fn new(config: EngineConfig) -> Self {
        let tt = if config.use_tt { Tt::with_capacity(config.tt_capacity) } else { Tt::new() };
        Self { config, tt, killers: KillerTable::new(), nodes: 0 }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn tt(&self) -> &Tt<M> { &self.tt }

    /// Resets per-move state: killers, node count, table generation.
    pub fn new_search(&mut self) {
        self.killers.clear();
        self.nodes = 0;
        self.tt.bump_generation();
    }

    /// Forgets everything, including the transposition table.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.nodes = 0;
    }

    pub fn set_tt_capacity_entries(&mut self, entries: usize) {
        self.config.tt_capacity = entries;
        self.tt.set_capacity_entries(entries);
    }

    pub fn set_tt_capacity_mb(&mut self, mb: usize) {
        self.tt.set_capacity_mb(mb);
        self.config.tt_capacity = self.tt.capacity();
    }

    pub fn tt_probe<R: Rules<Move = M>>(&self, pos: &R) -> Option<(i32, i32, Bound)> {
        self.tt.get(pos.hash()).map(|e| (e.depth, e.score, e.bound))
    }

    /// Fail-hard negamax. Returns `None` once the time budget runs out; such
    /// partial results never reach the table.
    pub fn search<R: Rules<Move = M>>(
        &mut self,
        pos: &mut R,
        depth: i32,
        alpha: i32,
        beta: i32,
        ply: usize,
        budget: &TimeBudget,
    ) -> Option<Node<M>> {
        self.node(pos, depth, alpha, beta, ply, budget, false)
    }

    /// Root entry for the driver. A root already drawn by repetition or the
    /// fifty-move rule still has its moves searched, so a real move comes
    /// back; such a root is never stored.
    pub fn search_root<R: Rules<Move = M>>(
        &mut self,
        pos: &mut R,
        depth: i32,
        alpha: i32,
        beta: i32,
        budget: &TimeBudget,
    ) -> Option<Node<M>> {
        self.node(pos, depth, alpha, beta, 0, budget, true)
    }

    #[allow(clippy::too_many_arguments)]
    fn node<R: Rules<Move = M>>(
        &mut self,
        pos: &mut R,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        ply: usize,
        budget: &TimeBudget,
        root: bool,
    ) -> Option<Node<M>> {
        self.nodes += 1;
        if pos.is_checkmate() { return Some(Node { score: -MATE_SCORE, best: None }); }
        let mut store = self.config.use_tt;
        if pos.is_draw() {
            if !root || pos.legal_moves().is_empty() {
                return Some(Node { score: DRAW_SCORE, best: None });
            }
            store = false;
        }

        let legal = pos.legal_moves();
        let in_check = pos.in_check();
        if depth <= 0 {
            let forcing = self.config.use_quiescence
                && (in_check || legal.iter().any(|&m| {
                    matches!(pos.captured_kind(m), Some(k) if k != PieceKind::Pawn)
                }));
            if !forcing || depth <= self.config.quiescence_floor {
                return Some(Node { score: clamp_window(evaluate(&*pos), alpha, beta), best: None });
            }
        }

        let key = pos.hash();
        let mut hints = BestLine::new();
        if self.config.use_tt {
            if let Some(en) = self.tt.get(key) {
                if en.depth >= depth && !en.line.is_empty() {
                    match en.bound {
                        Bound::Exact => return Some(Node { score: en.score, best: en.line.first() }),
                        Bound::Lower => alpha = alpha.max(en.score),
                        Bound::Upper => beta = beta.min(en.score),
                    }
                    if alpha >= beta {
                        return Some(Node { score: en.score, best: en.line.first() });
                    }
                }
                hints = en.line;
            }
        }

        let killers = if self.config.use_killers { self.killers.at(ply) } else { [None, None] };
        let include_quiet = depth > 0 || in_check;
        let order = order_moves(&*pos, &legal, hints.iter(), killers.into_iter().flatten(), include_quiet);
        if order.is_empty() {
            return Some(Node { score: clamp_window(evaluate(&*pos), alpha, beta), best: None });
        }

        let mut best: Option<M> = None;
        let mut line = BestLine::new();
        let mut bound = Bound::Upper;
        for &m in &order {
            if budget.should_abort() { return None; }
            let child = {
                let mut guard = MoveGuard::new(pos, m);
                self.search(&mut *guard, depth - 1, -beta, -alpha, ply + 1, budget)
            };
            let score = -child?.score;
            if score > alpha {
                alpha = score;
                best = Some(m);
                line.push_front(m);
                bound = Bound::Exact;
                if score >= beta {
                    alpha = beta;
                    bound = Bound::Lower;
                    if self.config.use_killers { self.killers.update(ply, m); }
                    break;
                }
            }
        }

        // Nothing raised alpha: fall back to the first ordered candidate
        if best.is_none() {
            best = Some(order[0]);
            line.push_back(order[0]);
        }

        if store {
            self.tt.put(Entry { key, depth, score: alpha, bound, line, gen: 0 });
        }
        Some(Node { score: alpha, best })
    }

    /// Quiescence-only view of a position: the score a depth-0 search returns
    /// with a full window.
    pub fn qsearch_eval<R: Rules<Move = M>>(&mut self, pos: &mut R, budget: &TimeBudget) -> Option<i32> {
        self.search(pos, 0, -MATE_SCORE, MATE_SCORE, 0, budget).map(|n| n.score)
    }
}

fn clamp_window(score: i32, alpha: i32, beta: i32) -> i32 {
    alpha.max(beta.min(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cozy::Position;
    use crate::search::time::ManualClock;

    #[test]
    fn guard_undoes_on_drop() {
        let mut pos = Position::startpos();
        let before = pos.hash();
        let mv = pos.parse_uci("g1f3").unwrap();
        {
            let guard = MoveGuard::new(&mut pos, mv);
            assert_ne!(guard.hash(), before);
        }
        assert_eq!(pos.hash(), before);
    }

    #[test]
    fn abort_leaves_position_and_table_untouched() {
        let mut pos = Position::startpos();
        let before = pos.hash();
        let clock = ManualClock::new(0, 0);
        clock.set_elapsed(1);
        let budget = TimeBudget::fixed(&clock, 0);
        let mut s = Searcher::new(EngineConfig::default());
        assert!(s.search(&mut pos, 3, -MATE_SCORE, MATE_SCORE, 0, &budget).is_none());
        assert_eq!(pos.hash(), before);
        assert_eq!(pos.ply(), 0);
        assert!(s.tt().is_empty());
    }

    #[test]
    fn qsearch_resolves_hanging_queen() {
        // Black bishop c1 can take the queen on f4.
        let mut pos = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
        let clock = ManualClock::new(0, 0);
        let budget = TimeBudget::unlimited(&clock);
        let stand = evaluate(&pos);
        let mut s = Searcher::new(EngineConfig::default());
        let qs = s.qsearch_eval(&mut pos, &budget).unwrap();
        assert!(qs > stand, "quiescence {qs} should beat stand pat {stand}");
    }

    #[test]
    fn quiet_position_qsearch_is_static_eval() {
        let mut pos = Position::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        let clock = ManualClock::new(0, 0);
        let budget = TimeBudget::unlimited(&clock);
        let mut s = Searcher::new(EngineConfig::default());
        // Bare kings are an insufficient-material draw.
        assert_eq!(s.qsearch_eval(&mut pos, &budget), Some(DRAW_SCORE));

        let mut pos = Position::from_fen("k7/8/8/8/8/8/P7/7K w - - 0 1").unwrap();
        assert_eq!(s.qsearch_eval(&mut pos, &budget), Some(evaluate(&pos)));
    }
}
