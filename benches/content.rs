use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use termfolio::blog::{all_tags, filter_posts, PostFilter};
use termfolio::content::{frontmatter, MemorySource, PostMeta};
use termfolio::{Language, MarkdownRepository, Repository};

fn synthetic_document(body_lines: usize) -> String {
    let mut doc = String::from(
        "---\n\
         title: \"Benchmarks: a love story\"\n\
         date: 2024-04-01\n\
         tags: [\"rust\", \"perf\", \"tui\"]\n\
         description: Synthetic post for parser benchmarks\n\
         published: true\n\
         ---\n",
    );
    for i in 0..body_lines {
        if i % 10 == 0 {
            doc.push_str(&format!("# Section {}\n\n", i / 10));
        }
        doc.push_str("The quick brown fox jumps over the lazy dog, on a schedule.\n");
    }
    doc
}

fn synthetic_listing(count: usize) -> Vec<PostMeta> {
    (0..count)
        .map(|i| PostMeta {
            slug: format!("post-{i}"),
            title: format!("Post number {i}"),
            date: format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            tags: vec![format!("tag-{}", i % 7), "common".to_string()],
            description: format!("Description for post {i}, mentioning kafka sometimes"),
            published: i % 5 != 0,
        })
        .collect()
}

fn bench_frontmatter_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontmatter_parse");
    for body_lines in [10usize, 200, 2000] {
        let doc = synthetic_document(body_lines);
        group.bench_with_input(BenchmarkId::from_parameter(body_lines), &doc, |b, doc| {
            b.iter(|| frontmatter::parse(black_box(doc)));
        });
    }
    group.finish();
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_posts");
    for count in [100usize, 1000] {
        let posts = synthetic_listing(count);
        let filter = PostFilter {
            active_tag: Some("tag-3".to_string()),
            query: "kafka".to_string(),
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &posts, |b, posts| {
            b.iter(|| filter_posts(black_box(posts), black_box(&filter)));
        });
    }
    group.finish();
}

fn bench_tag_index(c: &mut Criterion) {
    let posts = synthetic_listing(1000);
    c.bench_function("all_tags_1000", |b| b.iter(|| all_tags(black_box(&posts))));
}

fn bench_listing_load(c: &mut Criterion) {
    let rt = Runtime::new().expect("create tokio runtime");

    let documents: Vec<(String, String)> = (0..200)
        .map(|i| (format!("post-{i}"), synthetic_document(50)))
        .collect();
    let entries: Vec<(Language, &str, &str)> = documents
        .iter()
        .map(|(stem, raw)| (Language::En, stem.as_str(), raw.as_str()))
        .collect();
    let repository = MarkdownRepository::new(Arc::new(MemorySource::new(entries)));

    c.bench_function("repository_get_all_200", |b| {
        b.to_async(&rt)
            .iter(|| async { repository.get_all(Language::En).await.unwrap() });
    });
}

criterion_group!(
    benches,
    bench_frontmatter_parse,
    bench_filter_pipeline,
    bench_tag_index,
    bench_listing_load
);
criterion_main!(benches);
