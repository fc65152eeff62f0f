//! Benchmarks for chunked reading and tokenizing throughput

use chunktok_core::{ChunkAction, ChunkReader, ReaderConfig, Tokenizer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

/// Generate comma separated test text of roughly the given size
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "alpha,beta,gamma,delta,epsilon,zeta,eta,theta\n";
    let repetitions = size_kb * 1024 / base_text.len();

    base_text.repeat(repetitions)
}

fn config(buffer: usize) -> ReaderConfig {
    ReaderConfig::builder()
        .read_buffer_size(buffer)
        .build()
        .unwrap()
}

fn benchmark_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");
    let text = generate_test_text(1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for buffer in [512, 2048, 16 * 1024] {
        let reader = ChunkReader::new(config(buffer));
        group.bench_with_input(BenchmarkId::new("1MB", buffer), &text, |b, text| {
            b.iter(|| {
                reader
                    .process_reader(Cursor::new(text.as_bytes()), text.len() as u64, |chunk, _| {
                        black_box(chunk.len());
                        ChunkAction::consumed()
                    })
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let text = generate_test_text(1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for delimiter in [",", "\n"] {
        let tokenizer = Tokenizer::new(delimiter).unwrap();
        group.bench_with_input(
            BenchmarkId::new("1MB", delimiter.escape_debug().to_string()),
            &text,
            |b, text| {
                b.iter(|| {
                    tokenizer
                        .tokenize_reader(Cursor::new(text.as_bytes()), text.len() as u64, |t| {
                            black_box(t);
                            Ok(())
                        })
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_reader, benchmark_tokenizer);
criterion_main!(benches);
