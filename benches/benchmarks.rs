//! Criterion benchmarks for SocialGraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use social_graph::engine::QueryEngine;
use social_graph::graph::SocialGraph;

fn person(i: usize) -> String {
    format!("person_{}", i)
}

/// Build a random graph with roughly `connections_per_person` links each.
fn make_graph(person_count: usize, connections_per_person: usize) -> SocialGraph {
    let mut rng = rand::thread_rng();
    let mut graph = SocialGraph::new();
    for i in 0..person_count {
        let _ = graph.add_person(&person(i));
    }
    for i in 0..person_count {
        for _ in 0..connections_per_person {
            let target = rng.gen_range(0..person_count);
            if target != i {
                let _ = graph.add_connection(&person(i), &person(target));
            }
        }
    }
    graph
}

fn bench_add_person(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);
    let mut next = 10_000;

    c.bench_function("add_person_to_10k", |b| {
        b.iter(|| {
            let _ = graph.add_person(&person(next));
            next += 1;
        })
    });
}

fn bench_add_connection(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);

    c.bench_function("add_connection_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = rng.gen_range(0..10_000);
            let t = rng.gen_range(0..10_000);
            let _ = graph.add_connection(&person(a), &person(t));
        })
    });
}

fn bench_shortest_path_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);
    let engine = QueryEngine::new();

    c.bench_function("shortest_path_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let t = rng.gen_range(0..100_000);
            let _ = engine.shortest_path(&graph, "person_0", &person(t));
        })
    });
}

fn bench_suggest_friends_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 5);
    let engine = QueryEngine::new();

    c.bench_function("suggest_friends_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let p = rng.gen_range(0..100_000);
            let _ = engine.suggest_friends(&graph, &person(p));
        })
    });
}

fn bench_mutual_friends_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 5);
    let engine = QueryEngine::new();

    c.bench_function("mutual_friends_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = rng.gen_range(0..100_000);
            let t = rng.gen_range(0..100_000);
            let _ = engine.mutual_friends(&graph, &person(a), &person(t));
        })
    });
}

fn bench_remove_person_10k(c: &mut Criterion) {
    c.bench_function("remove_person_10k", |b| {
        b.iter_batched(
            || make_graph(10_000, 3),
            |mut graph| {
                let _ = graph.remove_person("person_5000");
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_person,
    bench_add_connection,
    bench_shortest_path_100k,
    bench_suggest_friends_100k,
    bench_mutual_friends_100k,
    bench_remove_person_10k,
);
criterion_main!(benches);
