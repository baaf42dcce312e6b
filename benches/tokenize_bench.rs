use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crisp::tokenize;

fn tokenizer_benchmark(c: &mut Criterion) {
    let line = "(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))";

    c.bench_function("tokenize one line", |b| {
        b.iter(|| tokenize(black_box(line)))
    });

    let long_line = line.repeat(200);
    c.bench_function("tokenize long line", |b| {
        b.iter(|| tokenize(black_box(&long_line)))
    });
}

criterion_group!(benches, tokenizer_benchmark);
criterion_main!(benches);
