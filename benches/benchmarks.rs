//! Performance benchmarks for Copydesk.
//!
//! This module contains benchmarks for:
//! - Article rendering from SEO settings
//! - El Director's revision pass over articles of growing size
//! - Download file naming and HTML preview
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use copydesk::core::{download_filename, preview_html, SeoSettings};
use copydesk::review::revise_article;
use copydesk::services::fixtures;

// ============================================================================
// Mock Data Fixtures
// ============================================================================

/// Article made of `paragraphs` copies of the fixed body.
fn article_of(paragraphs: usize) -> String {
    let seo = SeoSettings::with_keyword("marketing AI");
    vec![fixtures::render_article(&seo); paragraphs].join("\n\n")
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_render_article(c: &mut Criterion) {
    let mut seo = SeoSettings::with_keyword("ChatGPT marketing");
    seo.secondary_keywords = "AI, SEO, content, automazione, copywriting".to_string();
    seo.set_meta_description("Guida pratica all'uso di ChatGPT nel marketing digitale");

    c.bench_function("render_article", |b| b.iter(|| fixtures::render_article(black_box(&seo))));
}

fn bench_revise_article(c: &mut Criterion) {
    let mut group = c.benchmark_group("revise_article");

    for size in [1, 10, 100] {
        let article = article_of(size);
        group.throughput(Throughput::Bytes(article.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &article, |b, article| {
            b.iter(|| revise_article(black_box(article)));
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let article = article_of(10);

    c.bench_function("download_filename", |b| {
        b.iter(|| download_filename(black_box("  strategie   di marketing\tper PMI ")));
    });

    c.bench_function("preview_html", |b| b.iter(|| preview_html(black_box(&article))));
}

criterion_group!(benches, bench_render_article, bench_revise_article, bench_export);
criterion_main!(benches);
