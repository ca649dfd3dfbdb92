use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{markdown_to_html, parsing::inline::tokenize_inline};
mod common;

fn bench_markdown_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("markdown_to_html", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(html);
        });
    });

    let line = common::generate_inline_heavy_line(200);
    group.bench_function("tokenize_inline", |b| {
        b.iter(|| {
            let tokens = tokenize_inline(std::hint::black_box(&line)).unwrap();
            std::hint::black_box(tokens);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_markdown_to_html);
criterion_main!(benches);
