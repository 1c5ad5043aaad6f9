use anyhow::{Context, Result};
use clap::Parser;
use negabot::bots::BotKind;
use negabot::uci::UciEngine;
use negabot::EngineConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Negabot UCI engine", long_about = None)]
struct Args {
    /// Engine preset
    #[arg(long, value_enum, default_value_t = BotKind::Full)]
    bot: BotKind,

    /// JSON engine config; overrides the preset's switches
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transposition table size in MB (approximate)
    #[arg(long)]
    hash: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => args.bot.config(),
    };
    log::info!("starting {} with {:?}", args.bot.name(), config);

    let mut engine = UciEngine::new(args.bot, config);
    if let Some(mb) = args.hash {
        let line = format!("setoption name Hash value {}", mb);
        engine.handle_line(&line, &mut std::io::sink())?;
    }
    engine.run_loop()?;
    Ok(())
}
