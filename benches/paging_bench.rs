//! Page generation and pager driver benchmarks

use std::time::Duration;

use article_pager::{ArticlePagingSource, LoadParams, Pager, PagingConfig, SourceConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio_util::sync::CancellationToken;

fn instant_source() -> ArticlePagingSource {
    ArticlePagingSource::new(SourceConfig::default().with_load_delay(Duration::ZERO))
}

fn benchmark_generate_page(c: &mut Criterion) {
    let source = instant_source();
    let mut group = c.benchmark_group("generate_page");

    for load_size in [10usize, 100, 1_000] {
        let bounds = LoadParams::at(1_000, load_size)
            .bounds()
            .expect("valid params");
        group.bench_with_input(BenchmarkId::from_parameter(load_size), &bounds, |b, bounds| {
            b.iter(|| black_box(source.generate_page(bounds).expect("page generates")));
        });
    }

    group.finish();
}

fn benchmark_pager_scroll(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds");
    let cancel = CancellationToken::new();

    c.bench_function("pager_scroll_20_pages", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let config = PagingConfig::new(20)
                    .and_then(|config| config.with_max_size(200))
                    .expect("valid config");
                let mut pager = Pager::new(instant_source(), config);
                pager.refresh(&cancel).await.expect("refresh");
                for _ in 0..20 {
                    pager.append(&cancel).await.expect("append");
                }
                black_box(pager.state().item_count())
            })
        });
    });
}

criterion_group!(benches, benchmark_generate_page, benchmark_pager_scroll);
criterion_main!(benches);
