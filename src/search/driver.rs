use std::fmt;

use log::{debug, info, warn};

use crate::board::Rules;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::search::eval::MATE_SCORE;
use crate::search::negamax::Searcher;
use crate::search::time::{Clock, TimeBudget};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport<M> {
    pub best_move: M,
    pub score: i32,
    /// Deepest fully accepted iteration; 0 means the fallback move was returned.
    pub depth: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Iterative-deepening driver around one `Searcher`.
///
/// The transposition table lives as long as the engine; killers are reset on
/// every `think`.
pub struct Engine<M> {
    searcher: Searcher<M>,
}

impl<M: Copy + Eq + fmt::Display> Engine<M> {
    pub fn new(config: EngineConfig) -> Self {
        Self { searcher: Searcher::new(config) }
    }

    pub fn config(&self) -> &EngineConfig { self.searcher.config() }

    pub fn searcher(&self) -> &Searcher<M> { &self.searcher }

    pub fn searcher_mut(&mut self) -> &mut Searcher<M> { &mut self.searcher }

    pub fn new_game(&mut self) { self.searcher.clear(); }

    /// Picks a move within `remaining / time_divisor + increment`.
    pub fn think<R: Rules<Move = M>>(&mut self, pos: &mut R, clock: &dyn Clock) -> Result<SearchReport<M>> {
        let budget = TimeBudget::from_clock(clock, self.config().time_divisor);
        self.think_with_budget(pos, &budget)
    }

    pub fn think_with_budget<R: Rules<Move = M>>(&mut self, pos: &mut R, budget: &TimeBudget) -> Result<SearchReport<M>> {
        let max_depth = self.config().max_depth;
        self.think_to_depth(pos, budget, max_depth)
    }

    /// Same as `think_with_budget` with the depth ceiling overridden.
    pub fn think_to_depth<R: Rules<Move = M>>(
        &mut self,
        pos: &mut R,
        budget: &TimeBudget,
        max_depth: i32,
    ) -> Result<SearchReport<M>> {
        let legal = pos.legal_moves();
        let fallback = *legal.first().ok_or(EngineError::NoLegalMoves)?;
        self.searcher.new_search();

        let window = self.config().aspiration_window_cp.max(1);
        let widen = self.config().aspiration_widen.max(2);
        let use_aspiration = self.config().use_aspiration;
        let max_depth = max_depth.max(1);

        let mut best: Option<M> = None;
        let mut best_score: i32 = 0;
        let mut completed = 0;
        let mut depth = 1;
        let mut alpha_off = MATE_SCORE;
        let mut beta_off = MATE_SCORE;

        while depth <= max_depth {
            if budget.should_abort() { break; }
            let alpha = best_score.saturating_sub(alpha_off).max(-MATE_SCORE);
            let beta = best_score.saturating_add(beta_off).min(MATE_SCORE);
            let Some(node) = self.searcher.search_root(pos, depth, alpha, beta, budget) else {
                debug!("depth {} aborted after {} ms", depth, budget.elapsed_ms());
                break;
            };
            let Some(mv) = node.best.filter(|m| legal.contains(m)) else {
                // Colliding table entry: nothing to deepen
                break;
            };
            let score = node.score;

            if score.abs() == MATE_SCORE {
                best = Some(mv);
                best_score = score;
                completed = depth;
                debug!("depth {} mate score {} bestmove {}", depth, score, mv);
                break;
            }
            if score <= alpha && alpha > -MATE_SCORE {
                alpha_off = alpha_off.saturating_mul(widen);
                debug!("depth {} fail-low at {}, widening", depth, alpha);
                continue;
            }
            if score >= beta && beta < MATE_SCORE {
                beta_off = beta_off.saturating_mul(widen);
                debug!("depth {} fail-high at {}, widening", depth, beta);
                continue;
            }

            best = Some(mv);
            best_score = score;
            completed = depth;
            debug!("depth {} score {} bestmove {} nodes {}", depth, score, mv, self.searcher.nodes());
            if use_aspiration {
                alpha_off = window;
                beta_off = window;
            }
            depth += 1;
        }

        let best_move = match best {
            Some(mv) => mv,
            None => {
                warn!("no iteration completed, playing first legal move {}", fallback);
                fallback
            }
        };
        let report = SearchReport {
            best_move,
            score: best_score,
            depth: completed,
            nodes: self.searcher.nodes(),
            elapsed_ms: budget.elapsed_ms(),
        };
        info!(
            "bestmove {} score {} depth {} nodes {} time {}ms",
            report.best_move, report.score, report.depth, report.nodes, report.elapsed_ms
        );
        Ok(report)
    }
}
