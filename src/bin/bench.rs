use anyhow::{Context, Result};
use clap::Parser;
use negabot::board::cozy::Position;
use negabot::bots::{Bot, BotKind};
use negabot::search::time::{GameClock, TimeBudget};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "negabot-bench", version, about = "Benchmark Negabot search NPS")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Engine preset
    #[arg(long, value_enum, default_value_t = BotKind::Full)]
    bot: BotKind,

    /// Movetime in milliseconds (ignored if depth is set)
    #[arg(long, default_value_t = 1000)]
    movetime: u64,

    /// Fixed search depth (overrides movetime when > 0)
    #[arg(long, default_value_t = 0)]
    depth: i32,

    /// Transposition table size in MB (approximate)
    #[arg(long, default_value_t = 16)]
    hash_mb: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).with_context(|| format!("parsing FEN {}", args.fen))?
    };

    let mut bot = Bot::new(args.bot);
    bot.engine_mut().searcher_mut().set_tt_capacity_mb(args.hash_mb);
    let clock = GameClock::start(Duration::ZERO, Duration::ZERO);

    let t0 = Instant::now();
    let res = if args.depth > 0 {
        let budget = TimeBudget::unlimited(&clock);
        bot.engine_mut().think_to_depth(&mut pos, &budget, args.depth)?
    } else {
        let budget = TimeBudget::fixed(&clock, args.movetime);
        bot.engine_mut().think_with_budget(&mut pos, &budget)?
    };
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "bestmove={} score_cp={} depth={} nodes={} elapsed={:.3}s nps={:.1}",
        pos.to_uci(res.best_move), res.score, res.depth, res.nodes, dt.as_secs_f64(), nps
    );
    Ok(())
}
