use criterion::{black_box, criterion_group, criterion_main, Criterion};
use negabot::board::cozy::Position;
use negabot::bots::{Bot, BotKind};
use negabot::search::time::{ManualClock, TimeBudget};

fn bench_search(c: &mut Criterion) {
    for kind in [BotKind::Baseline, BotKind::Evil, BotKind::Full] {
        c.bench_function(&format!("think_depth_4_startpos_{}", kind.name()), |ben| {
            ben.iter(|| {
                let mut pos = Position::startpos();
                let mut bot = Bot::new(kind);
                let clock = ManualClock::new(0, 0);
                let budget = TimeBudget::unlimited(&clock);
                let r = bot.engine_mut().think_to_depth(black_box(&mut pos), &budget, 4).expect("legal moves");
                black_box(r.nodes)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
