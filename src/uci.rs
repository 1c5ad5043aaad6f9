use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::{debug, warn};

use crate::board::cozy::Position;
use crate::board::{Rules, Side};
use crate::bots::{Bot, BotKind};
use crate::config::EngineConfig;
use crate::search::time::{GameClock, TimeBudget};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoParams {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movetime: Option<u64>,
    pub depth: Option<i32>,
    pub infinite: bool,
}

/// Budget for `go` / `go infinite` without any clock or depth: the loop is
/// synchronous and cannot read `stop` mid-search.
pub const DEFAULT_MOVETIME_MS: u64 = 1_000;

impl GoParams {
    pub fn parse(args: &str) -> Self {
        let mut p = GoParams::default();
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            let mut num = || tokens.next().and_then(|s| s.parse::<i64>().ok()).map(|v| v.max(0));
            match tok {
                "wtime" => p.wtime = num().map(|v| v as u64),
                "btime" => p.btime = num().map(|v| v as u64),
                "winc" => p.winc = num().map(|v| v as u64),
                "binc" => p.binc = num().map(|v| v as u64),
                "movetime" => p.movetime = num().map(|v| v as u64),
                "depth" => p.depth = num().map(|v| v as i32),
                "infinite" => p.infinite = true,
                _ => {}
            }
        }
        p
    }
}

pub struct UciEngine {
    pos: Position,
    bot: Bot,
}

impl UciEngine {
    pub fn new(kind: BotKind, config: EngineConfig) -> Self {
        Self { pos: Position::startpos(), bot: Bot::with_config(kind, config) }
    }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name Negabot ({})", self.bot.name())?;
        writeln!(out, "id author Negabot Team")?;
        writeln!(out, "option name Hash type spin default 16 min 1 max 4096")?;
        writeln!(out, "uciok")
    }

    fn cmd_ucinewgame(&mut self) {
        self.pos = Position::startpos();
        self.bot.engine_mut().new_game();
    }

    fn cmd_setoption(&mut self, args: &str) {
        // setoption name Hash value <mb>
        let tokens: Vec<&str> = args.split_whitespace().collect();
        if let [_, name, _, value] = tokens.as_slice() {
            if name.eq_ignore_ascii_case("hash") {
                match value.parse::<usize>() {
                    Ok(mb) => self.bot.engine_mut().searcher_mut().set_tt_capacity_mb(mb.max(1)),
                    Err(_) => warn!("bad Hash value: {}", value),
                }
            }
        }
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        let parsed = match tokens.next() {
            Some("startpos") => {
                let moves: Vec<String> = tokens.skip_while(|&t| t != "moves").skip(1).map(str::to_string).collect();
                Position::set_from_start_and_moves(&moves)
            }
            Some("fen") => {
                let fen_fields: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
                let moves: Vec<String> = tokens.map(str::to_string).collect();
                Position::set_from_fen_and_moves(&fen_fields.join(" "), &moves)
            }
            _ => return,
        };
        match parsed {
            Ok(p) => self.pos = p,
            Err(e) => warn!("ignoring position command: {}", e),
        }
    }

    fn cmd_go(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        let go = GoParams::parse(args);
        let (time, inc) = match self.pos.side_to_move() {
            Side::White => (go.wtime, go.winc),
            Side::Black => (go.btime, go.binc),
        };
        let clock = GameClock::start(
            Duration::from_millis(time.unwrap_or(0)),
            Duration::from_millis(inc.unwrap_or(0)),
        );
        let divisor = self.bot.engine().config().time_divisor;
        let budget = match (go.movetime, time) {
            (Some(ms), _) => TimeBudget::fixed(&clock, ms),
            (None, Some(_)) => TimeBudget::from_clock(&clock, divisor),
            (None, None) if go.depth.is_some() => TimeBudget::unlimited(&clock),
            (None, None) => TimeBudget::fixed(&clock, DEFAULT_MOVETIME_MS),
        };
        let max_depth = go.depth.unwrap_or(self.bot.engine().config().max_depth);
        debug!("go {:?} limit {:?}", go, budget.limit_ms());
        match self.bot.engine_mut().think_to_depth(&mut self.pos, &budget, max_depth) {
            Ok(r) => {
                writeln!(out, "info depth {} score cp {} nodes {} time {}", r.depth, r.score, r.nodes, r.elapsed_ms)?;
                writeln!(out, "bestmove {}", self.pos.to_uci(r.best_move))
            }
            Err(e) => {
                warn!("search failed: {}", e);
                writeln!(out, "bestmove 0000")
            }
        }
    }

    /// Handles one command line. Returns false on `quit`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        match line {
            "" => {}
            "uci" => self.cmd_uci(out)?,
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => self.cmd_ucinewgame(),
            "quit" => return Ok(false),
            // Search is synchronous; nothing to stop
            "stop" => {}
            _ => {
                if let Some(rest) = line.strip_prefix("position ") {
                    self.cmd_position(rest);
                } else if let Some(rest) = line.strip_prefix("setoption ") {
                    self.cmd_setoption(rest);
                } else if line == "go" {
                    self.cmd_go("", out)?;
                } else if let Some(rest) = line.strip_prefix("go ") {
                    self.cmd_go(rest, out)?;
                } else {
                    debug!("unknown command: {}", line);
                }
            }
        }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in stdin.lock().lines() {
            if !self.handle_line(&line?, &mut out)? { break; }
        }
        Ok(())
    }
}
