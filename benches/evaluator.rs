use std::hint::black_box;

use blackjack_rs::agents::ThresholdPlayer;
use blackjack_rs::cards::Rank;
use blackjack_rs::evaluator::evaluate;
use blackjack_rs::game::{Round, Silent};
use blackjack_rs::shoe::Shoe;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let hard = [Rank::Ten, Rank::Six, Rank::Five];
    let aces = [Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine, Rank::Two];

    let mut g = c.benchmark_group("evaluate");
    g.bench_with_input(BenchmarkId::new("hard", "10,6,5"), &hard, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("many_aces", "A,A,A,A,9,2"), &aces, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.finish();
}

fn bench_round(c: &mut Criterion) {
    let mut shoe = Shoe::seeded(42);
    let mut player = ThresholdPlayer::default();
    c.bench_function("auto_round", |b| {
        b.iter(|| {
            let mut round = Round::new(&mut shoe);
            black_box(round.play(&mut player, &mut Silent))
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_round);
criterion_main!(benches);
