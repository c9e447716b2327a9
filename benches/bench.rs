use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
    Throughput,
};

use csvsplit::{join, split, split_into, try_split, Record};

fn inputs() -> Vec<(&'static str, String)> {
    let plain = "one,two,three,four,five,six,seven,eight,nine,ten".to_string();
    let quoted = "\"one,1\",\"two \"\"2\"\"\",three,\"four,4\",\"five \"\"5\"\"\""
        .to_string();
    let wide = {
        let mut line = "field,".repeat(199);
        line.push_str("field");
        line
    };
    vec![("plain", plain), ("quoted", quoted), ("wide", wide)]
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for (name, line) in inputs() {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("alloc", name),
            &line,
            |b, line| b.iter(|| split(black_box(line))),
        );
        group.bench_with_input(
            BenchmarkId::new("amortized", name),
            &line,
            |b, line| {
                let mut rec = Record::new();
                b.iter(|| split_into(black_box(line), &mut rec));
            },
        );
    }
    group.finish();
}

fn bench_try_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_split");
    for (name, line) in inputs() {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &line,
            |b, line| b.iter(|| try_split(black_box(line))),
        );
    }
    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    for (name, line) in inputs() {
        let rec = split(&line);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &rec,
            |b, rec| b.iter(|| join(black_box(rec))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_try_split, bench_join);
criterion_main!(benches);
