use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfarer_routing::{
    RouteProblemConfig, plan_route, plan_routes,
    sample::{grid_graph, hosur_region, hosur_scenarios},
};
use wayfarer_search::SearchParams;

fn grid_benchmark(c: &mut Criterion) {
    let params = SearchParams::default();

    for size in [10, 50, 100] {
        let graph = grid_graph(size, size).unwrap();
        let config = RouteProblemConfig::new((0, 0), (size - 1, size - 1));

        c.bench_function(&format!("uniform cost grid {size}x{size}"), |b| {
            b.iter(|| plan_route(black_box(&graph), black_box(&config), &params).unwrap())
        });
    }
}

fn hosur_benchmark(c: &mut Criterion) {
    let graph = hosur_region().unwrap();
    let scenarios = hosur_scenarios();
    let params = SearchParams::default();

    c.bench_function("hosur scenarios sequential", |b| {
        b.iter(|| {
            for config in &scenarios {
                plan_route(black_box(&graph), config, &params).unwrap();
            }
        })
    });

    c.bench_function("hosur scenarios parallel", |b| {
        b.iter(|| plan_routes(black_box(&graph), &scenarios, &params).unwrap())
    });
}

criterion_group!(benches, grid_benchmark, hosur_benchmark);
criterion_main!(benches);
