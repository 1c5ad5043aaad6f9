use clap::ValueEnum;
use cozy_chess::Move;
use serde::{Deserialize, Serialize};

use crate::board::cozy::Position;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::search::time::Clock;
use crate::search::{Engine, SearchReport};

/// Named engine presets. Each is the same search with different switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    /// Table only: plain iterative deepening with fixed-depth horizon.
    Baseline,
    /// Adds killer moves.
    Killers,
    /// Adds quiescence at the horizon, no killers.
    Quiescence,
    /// Table plus aspiration windows, fixed-depth horizon.
    Aspiration,
    /// Killers and quiescence, full window every iteration.
    Evil,
    /// Everything on, including aspiration windows.
    Full,
}

impl BotKind {
    pub fn name(self) -> &'static str {
        match self {
            BotKind::Baseline => "baseline",
            BotKind::Killers => "killers",
            BotKind::Quiescence => "quiescence",
            BotKind::Aspiration => "aspiration",
            BotKind::Evil => "evil",
            BotKind::Full => "full",
        }
    }

    pub fn config(self) -> EngineConfig {
        let full = EngineConfig::default();
        match self {
            BotKind::Baseline => EngineConfig {
                use_killers: false,
                use_quiescence: false,
                use_aspiration: false,
                ..full
            },
            BotKind::Killers => EngineConfig { use_quiescence: false, use_aspiration: false, ..full },
            BotKind::Quiescence => EngineConfig { use_killers: false, use_aspiration: false, ..full },
            BotKind::Aspiration => EngineConfig { use_killers: false, use_quiescence: false, ..full },
            BotKind::Evil => EngineConfig { use_aspiration: false, ..full },
            BotKind::Full => full,
        }
    }
}

/// A preset bound to its own engine (and so its own transposition table).
pub struct Bot {
    kind: BotKind,
    engine: Engine<Move>,
}

impl Bot {
    pub fn new(kind: BotKind) -> Self {
        Self::with_config(kind, kind.config())
    }

    pub fn with_config(kind: BotKind, config: EngineConfig) -> Self {
        Self { kind, engine: Engine::new(config) }
    }

    pub fn kind(&self) -> BotKind { self.kind }

    pub fn name(&self) -> &'static str { self.kind.name() }

    pub fn engine(&self) -> &Engine<Move> { &self.engine }

    pub fn engine_mut(&mut self) -> &mut Engine<Move> { &mut self.engine }

    pub fn think(&mut self, pos: &mut Position, clock: &dyn Clock) -> Result<SearchReport<Move>> {
        self.engine.think(pos, clock)
    }

    /// Always a legal move of `pos` unless the position has none.
    pub fn choose_move(&mut self, pos: &mut Position, clock: &dyn Clock) -> Result<Move> {
        self.think(pos, clock).map(|r| r.best_move)
    }
}
