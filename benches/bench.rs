use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use fftsim::{Complex64, Direction, FftPipeline, ReferenceEngine, SimConfig};
use rand::{distributions::Standard, prelude::*};

const LENGTHS: &[u32] = &[6, 7, 8, 9, 10];

fn generate_signal(samples: usize) -> Vec<Complex64> {
    let mut rng = thread_rng();
    let values: Vec<f64> = (&mut rng).sample_iter(Standard).take(2 * samples).collect();

    values
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect()
}

fn benchmark_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward pipeline");

    for &nfft in LENGTHS {
        let samples = 1 << nfft;
        group.throughput(Throughput::Elements(samples as u64));

        let pipeline = FftPipeline::new(
            ReferenceEngine::new(),
            SimConfig::new(nfft, Direction::Forward),
        );

        group.bench_function(BenchmarkId::new("fftsim reference", samples), |b| {
            b.iter_batched(
                || generate_signal(samples),
                |signal| pipeline.execute(&signal).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse pipeline");

    for &nfft in LENGTHS {
        let samples = 1 << nfft;
        group.throughput(Throughput::Elements(samples as u64));

        let pipeline = FftPipeline::new(
            ReferenceEngine::new(),
            SimConfig::new(nfft, Direction::Inverse),
        );

        group.bench_function(BenchmarkId::new("fftsim reference", samples), |b| {
            b.iter_batched(
                || generate_signal(samples),
                |signal| pipeline.execute(&signal).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_forward, benchmark_inverse);
criterion_main!(benches);
