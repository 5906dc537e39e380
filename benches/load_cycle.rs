// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use local_photos::application::port::AssetSource;
use local_photos::application::{BaseUrl, ImageLoader};
use local_photos::infrastructure::decoder::read_dimensions;
use local_photos::infrastructure::{DecoderProbe, EmbeddedDiscovery};
use std::hint::black_box;
use std::path::PathBuf;

fn load_cycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_cycle");

    let current_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let sample = AssetSource::File(current_dir.join("public/photos/harbour.png"));

    group.bench_function("read_dimensions_png", |b| {
        b.iter(|| {
            let _ = black_box(read_dimensions(&sample));
        });
    });

    let runtime = tokio::runtime::Runtime::new().expect("failed to build runtime");
    let loader = ImageLoader::new(EmbeddedDiscovery::bundled(), DecoderProbe::new())
        .with_base_url(BaseUrl::Fixed("/".into()));

    group.bench_function("bundled_cycle", |b| {
        b.iter(|| black_box(runtime.block_on(loader.run())));
    });

    group.finish();
}

criterion_group!(benches, load_cycle_benchmark);
criterion_main!(benches);
