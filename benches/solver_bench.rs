//! Benchmarks for the minimax solver and the PageRank estimators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use solver_poc_ai::games::tictactoe::Board;
use solver_poc_ai::rank::{iterate_pagerank, sample_pagerank, Corpus};
use solver_poc_ai::search::{search_sequential, search_shuffled};

fn ring_corpus(pages: usize) -> Corpus {
    Corpus::from_links((0..pages).map(|i| {
        let name = format!("{}.html", i);
        let links = vec![
            format!("{}.html", (i + 1) % pages),
            format!("{}.html", (i * 7 + 3) % pages),
        ];
        (name, links)
    }))
}

fn sequential_search_benchmark(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("tictactoe_sequential_empty_board", |b| {
        b.iter(|| search_sequential(black_box(&board)))
    });
}

fn shuffled_search_benchmark(c: &mut Criterion) {
    let board = Board::new();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("tictactoe_shuffled_empty_board", |b| {
        b.iter(|| search_shuffled(black_box(&board), &mut rng))
    });
}

fn iterate_benchmark(c: &mut Criterion) {
    let corpus = ring_corpus(100);
    c.bench_function("pagerank_iterate_100_pages", |b| {
        b.iter(|| iterate_pagerank(black_box(&corpus), 0.85))
    });
}

fn sample_benchmark(c: &mut Criterion) {
    let corpus = ring_corpus(100);
    c.bench_function("pagerank_sample_10000", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            sample_pagerank(black_box(&corpus), 0.85, 10_000, &mut rng)
        })
    });
}

criterion_group!(
    benches,
    sequential_search_benchmark,
    shuffled_search_benchmark,
    iterate_benchmark,
    sample_benchmark
);
criterion_main!(benches);
