use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use negabot::board::cozy::Position;
use negabot::board::{Rules, Side};
use negabot::bots::{Bot, BotKind};
use negabot::search::time::{Clock, GameClock};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "duel", about = "Play a match between two bot presets")]
struct Args {
    /// First bot
    #[arg(long, value_enum, default_value_t = BotKind::Full)]
    a: BotKind,

    /// Second bot (the rival)
    #[arg(long, value_enum, default_value_t = BotKind::Evil)]
    b: BotKind,

    /// Number of games; colours alternate
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Starting clock per side in milliseconds
    #[arg(long, default_value_t = 60_000)]
    time_ms: u64,

    /// Increment per move in milliseconds
    #[arg(long, default_value_t = 0)]
    inc_ms: u64,

    /// Random plies played at the start of each game
    #[arg(long, default_value_t = 4)]
    random_plies: usize,

    /// Max plies before declaring a draw
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Random seed
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Optional: write summary JSON to this path
    #[arg(long)]
    json_out: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome { Win(Side), Draw }

#[derive(Debug, Default, Serialize)]
struct Summary {
    a: String,
    b: String,
    games: usize,
    a_wins: usize,
    b_wins: usize,
    draws: usize,
    plies: usize,
}

fn side_index(side: Side) -> usize {
    match side { Side::White => 0, Side::Black => 1 }
}

fn play_game(bots: &mut [Bot; 2], white: usize, args: &Args, rng: &mut SmallRng) -> Result<(Outcome, usize)> {
    let mut pos = Position::startpos();
    for _ in 0..args.random_plies {
        let moves = pos.legal_moves();
        if moves.is_empty() { break; }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.make_move(mv);
    }
    for bot in bots.iter_mut() { bot.engine_mut().new_game(); }

    let mut remaining = [args.time_ms; 2];
    let mut plies = 0usize;
    while plies < args.max_plies {
        let side = pos.side_to_move();
        if pos.is_checkmate() { return Ok((Outcome::Win(side.other()), plies)); }
        if pos.is_draw() { return Ok((Outcome::Draw, plies)); }

        let si = side_index(side);
        let idx = if si == 0 { white } else { 1 - white };
        let clock = GameClock::start(Duration::from_millis(remaining[si]), Duration::from_millis(args.inc_ms));
        let mv = bots[idx].choose_move(&mut pos, &clock)?;
        let spent = clock.elapsed_ms();
        if spent > remaining[si] {
            log::warn!("{} lost on time", bots[idx].name());
            return Ok((Outcome::Win(side.other()), plies));
        }
        remaining[si] = remaining[si] - spent + args.inc_ms;
        pos.make_move(mv);
        plies += 1;
    }
    Ok((Outcome::Draw, plies))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut bots = [Bot::new(args.a), Bot::new(args.b)];
    let mut summary = Summary { a: args.a.name().to_string(), b: args.b.name().to_string(), ..Summary::default() };

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);
    for g in 0..args.games {
        // Bot `a` is White in even games
        let white = g % 2;
        let (outcome, plies) = play_game(&mut bots, white, &args, &mut rng)?;
        summary.games += 1;
        summary.plies += plies;
        match outcome {
            Outcome::Draw => summary.draws += 1,
            Outcome::Win(side) => {
                let winner = if side == Side::White { white } else { 1 - white };
                if winner == 0 { summary.a_wins += 1; } else { summary.b_wins += 1; }
            }
        }
        pb.set_message(format!("{} {}-{}-{} {}", summary.a, summary.a_wins, summary.draws, summary.b_wins, summary.b));
        pb.inc(1);
    }
    pb.finish();

    println!(
        "{} vs {}: +{} ={} -{} over {} games ({} plies)",
        summary.a, summary.b, summary.a_wins, summary.draws, summary.b_wins, summary.games, summary.plies
    );
    if let Some(path) = &args.json_out {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path))?;
    }
    Ok(())
}
