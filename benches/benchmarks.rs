criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_one_card,
        generating_full_batch,
        generating_full_batch_parallel,
        auditing_full_batch,
        calling_and_undoing_one_ball,
        ranking_full_board,
        simulating_fifty_trials,
}

use bingo::audit::Auditor;
use bingo::cards::Batch;
use bingo::draw::Sequence;
use bingo::generation::Config;
use bingo::generation::Generator;
use bingo::generation::Sampler;
use bingo::session::Board;
use bingo::session::Session;
use bingo::simulation::Simulator;
use std::sync::Arc;

fn batch() -> Batch {
    Generator::from(Config::default())
        .generate()
        .expect("default batch")
}

fn board() -> Board {
    Board::new(batch(), &Config::default()).expect("audited batch")
}

fn sampling_one_card(c: &mut criterion::Criterion) {
    let sampler = Sampler::new(bingo::SPOTS, bingo::BALLS).expect("sampler");
    let ref mut rng = bingo::seeded(bingo::SEED, 0);
    c.bench_function("sample a 10-of-60 card", |b| b.iter(|| sampler.sample(rng)));
}

fn generating_full_batch(c: &mut criterion::Criterion) {
    c.bench_function("generate 1200 bingos on one lane", |b| b.iter(|| batch()));
}

fn generating_full_batch_parallel(c: &mut criterion::Criterion) {
    let generator = Generator::from(Config::default().parallel());
    c.bench_function("generate 1200 bingos on every core", |b| {
        b.iter(|| generator.generate().expect("parallel batch"))
    });
}

fn auditing_full_batch(c: &mut criterion::Criterion) {
    let batch = batch();
    let auditor = Auditor::from(Config::default());
    c.bench_function("audit 3600 cards", |b| b.iter(|| auditor.audit(&batch)));
}

fn calling_and_undoing_one_ball(c: &mut criterion::Criterion) {
    let ref mut session = Session::from(Arc::new(board()));
    c.bench_function("call and undo one ball over 3600 cards", |b| {
        b.iter(|| {
            session.call(30).expect("fresh ball");
            session.undo().expect("one call")
        })
    });
}

fn ranking_full_board(c: &mut criterion::Criterion) {
    let ref mut session = Session::from(Arc::new(board()));
    let ref mut rng = bingo::seeded(bingo::SEED, 1);
    Sequence::new(rng, bingo::BALLS)
        .prefix(30)
        .iter()
        .for_each(|&ball| drop(session.call(ball)));
    c.bench_function("rank the top 20 of 3600 cards", |b| {
        b.iter(|| session.ranking(bingo::RANKING_TOP))
    });
}

fn simulating_fifty_trials(c: &mut criterion::Criterion) {
    let simulator = Simulator::new(board(), Default::default()).expect("simulator");
    c.bench_function("simulate 50 sessions", |b| b.iter(|| simulator.simulate()));
}
