use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use llg_shapley::{
    Expr, Game, Regime, RegimeReport, compute_reports, latex::render_tables, make_tables,
};
use std::hint::black_box;

/// Additive game: every coalition is worth its size
fn size_valuation(coal: &llg_shapley::Coalition) -> Expr {
    Expr::integer(coal.size() as i64)
}

fn benchmark_shapley_payoffs(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapley_payoff");

    for n_players in [3, 6, 9, 12] {
        let game = Game::new(n_players).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(n_players),
            &game,
            |b, game| b.iter(|| game.payoff(black_box(0), size_valuation, false)),
        );
    }

    group.finish();
}

fn benchmark_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    for regime in Regime::ALL {
        group.bench_with_input(
            BenchmarkId::new("regime_report", format!("{regime:?}")),
            &regime,
            |b, &regime| b.iter(|| RegimeReport::compute(black_box(regime))),
        );
    }

    let reports = compute_reports();
    group.bench_function("render_tables", |b| {
        b.iter(|| render_tables(black_box(&reports)))
    });

    group.finish();
}

fn benchmark_end_to_end(c: &mut Criterion) {
    c.bench_function("make_tables", |b| b.iter(make_tables));
}

criterion_group!(
    benches,
    benchmark_shapley_payoffs,
    benchmark_components,
    benchmark_end_to_end
);
criterion_main!(benches);
