use criterion::{black_box, criterion_group, criterion_main, Criterion};
use negabot::board::cozy::Position;
use negabot::search::time::{ManualClock, TimeBudget};
use negabot::search::Searcher;
use negabot::EngineConfig;

fn bench_qsearch(c: &mut Criterion) {
    let mut pos = Position::from_fen("3rk3/3r4/3q4/3n4/4P3/2N2N2/3R4/3RK3 w - - 0 1").expect("valid fen");
    c.bench_function("qsearch_d_file_exchange", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(EngineConfig { use_tt: false, ..EngineConfig::default() });
            let clock = ManualClock::new(0, 0);
            let budget = TimeBudget::unlimited(&clock);
            black_box(s.qsearch_eval(black_box(&mut pos), &budget))
        })
    });
}

criterion_group!(benches, bench_qsearch);
criterion_main!(benches);
