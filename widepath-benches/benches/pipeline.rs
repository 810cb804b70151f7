//! Per-stage benchmarks for the bottleneck pipeline.
//!
//! Each stage is measured against inputs precomputed by the previous stages,
//! so parsing, spanning forest construction, bottleneck propagation and
//! serialization are timed in isolation.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use widepath_benches::{error::BenchSetupError, params::PipelineBenchParams, setup::StageInputs};
use widepath_core::{WidepathBuilder, encode_table, maximum_spanning_forest};

/// Seed used for all graph generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const SIZES: &[PipelineBenchParams] = &[
    PipelineBenchParams {
        node_count: 100,
        edge_count: 400,
    },
    PipelineBenchParams {
        node_count: 500,
        edge_count: 5_000,
    },
    PipelineBenchParams {
        node_count: 1_000,
        edge_count: 20_000,
    },
];

fn pipeline_stages_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let widepath = WidepathBuilder::new().build()?;
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    for params in SIZES {
        let inputs = StageInputs::prepare(params, SEED)?;
        group.throughput(Throughput::Elements(params.edge_count as u64));

        group.bench_with_input(
            BenchmarkId::new("parse", params),
            &inputs.input,
            |b, input| {
                b.iter(|| widepath.load_graph(black_box(input.as_slice())));
            },
        );
        group.bench_with_input(BenchmarkId::new("mst", params), &inputs.graph, |b, graph| {
            b.iter(|| maximum_spanning_forest(black_box(graph)));
        });
        group.bench_with_input(
            BenchmarkId::new("bottlenecks", params),
            &inputs.forest,
            |b, forest| {
                b.iter(|| black_box(forest).bottlenecks());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("serialize", params),
            &inputs.table,
            |b, table| {
                b.iter(|| encode_table(black_box(table)));
            },
        );
    }

    group.finish();
    Ok(())
}

fn pipeline_stages(c: &mut Criterion) {
    if let Err(err) = pipeline_stages_impl(c) {
        panic!("pipeline benchmark setup failed: {err}");
    }
}

criterion_group!(benches, pipeline_stages);
criterion_main!(benches);
