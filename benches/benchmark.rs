// Performance benchmarks for path search and topology parsing
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use topopath::{parse_topology_text, shortest_path_by_cost, shortest_path_by_distance, Link};

fn generate_mesh(n: usize, degree: usize, rng: &mut StdRng) -> (Vec<String>, Vec<Link>) {
    let ids: Vec<String> = (0..n).map(|i| format!("R{}", i)).collect();
    let mut links = Vec::with_capacity(n * degree);
    for i in 0..n {
        for _ in 0..degree {
            let j = rng.random_range(0..n);
            links.push(
                Link::new(ids[i].clone(), ids[j].clone())
                    .with_length(rng.random_range(1.0..500.0))
                    .with_cost(rng.random_range(1..100)),
            );
        }
    }
    (ids, links)
}

fn generate_ospf_dump(rows: usize, rng: &mut StdRng) -> String {
    let mut text = String::from("            OSPF Router with ID (10.0.0.1) (Process ID 1)\n\n");
    text.push_str("Link ID         ADV Router      Age         Seq#       Checksum\n");
    for _ in 0..rows {
        let a = rng.random_range(1..250u8);
        let b = rng.random_range(1..250u8);
        text.push_str(&format!(
            "10.0.{}.1      10.0.{}.1      {} 0x8000{:04x} 0x{:04x}\n",
            a,
            b,
            rng.random_range(1..3600u32),
            rng.random_range(0..0xffffu32),
            rng.random_range(0..0xffffu32),
        ));
    }
    text
}

fn benchmark_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [50, 200, 500].iter() {
        let (ids, links) = generate_mesh(*size, 4, &mut rng);
        let src = ids[0].clone();
        let dst = ids[size - 1].clone();

        group.bench_with_input(BenchmarkId::new("by_distance", size), size, |b, _| {
            b.iter(|| shortest_path_by_distance(black_box(ids.as_slice()), black_box(links.as_slice()), &src, &dst));
        });
        group.bench_with_input(BenchmarkId::new("by_cost", size), size, |b, _| {
            b.iter(|| shortest_path_by_cost(black_box(ids.as_slice()), black_box(links.as_slice()), &src, &dst));
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let mut rng = StdRng::seed_from_u64(2);

    for rows in [100, 1000].iter() {
        let text = generate_ospf_dump(*rows, &mut rng);
        group.bench_with_input(BenchmarkId::new("ospf_dump", rows), rows, |b, _| {
            b.iter(|| parse_topology_text(black_box(text.as_str())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_shortest_path, benchmark_parse);
criterion_main!(benches);
