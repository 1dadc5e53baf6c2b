//! Benchmarks for document parsing and completion.
//!
//! Completion runs on every keystroke that hits a trigger character, so a
//! call on a parsed model should stay well under a millisecond even for
//! large files.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rest_completion::completion::provide_completions;
use rest_completion::parser::parse_document;

/// Generate a synthetic .http file with the specified number of named requests.
fn generate_http_file(num_requests: usize) -> String {
    let mut content = String::new();

    for i in 0..num_requests {
        let method = match i % 4 {
            0 => "GET",
            1 => "POST",
            2 => "PUT",
            _ => "DELETE",
        };

        content.push_str(&format!(
            "# @name request{}\n\
             {} https://api.example.com/resource/{}\n\
             Authorization: Bearer token-{}\n\
             Content-Type: application/json\n\
             Accept: application/json\n\
             \n\
             {{\"id\": {}}}\n\
             \n\
             ###\n",
            i, method, i, i, i
        ));
    }

    content.push_str("# @ref \nGET https://api.example.com/last\n");
    content
}

/// Line number of the trailing `# @ref ` comment.
fn last_comment_line(content: &str) -> usize {
    content.lines().count() - 2
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000] {
        let content = generate_http_file(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| parse_document(black_box(content)));
        });
    }

    group.finish();
}

fn bench_complete_request_line(c: &mut Criterion) {
    c.bench_function("complete_request_line", |b| {
        b.iter(|| provide_completions(black_box("P"), black_box(0), None));
    });
}

fn bench_complete_header(c: &mut Criterion) {
    let document = parse_document(&generate_http_file(100));

    c.bench_function("complete_header", |b| {
        b.iter(|| provide_completions(black_box("Acc"), black_box(2), Some(&document)));
    });

    c.bench_function("complete_content_type", |b| {
        b.iter(|| {
            provide_completions(
                black_box("Content-Type: application/"),
                black_box(3),
                Some(&document),
            )
        });
    });
}

fn bench_complete_references(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_references");

    for size in [10, 100, 1000] {
        let content = generate_http_file(size);
        let document = parse_document(&content);
        let line = last_comment_line(&content);

        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| provide_completions(black_box("# @ref "), black_box(line), Some(document)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_complete_request_line,
    bench_complete_header,
    bench_complete_references
);

criterion_main!(benches);
