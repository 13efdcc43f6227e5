use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skelet_image::{Image, ImageSize};
use skelet_imgproc::thinning::{skeletonize_with, ShrinkUpdate, ThinningConfig};

fn create_test_image(width: usize, height: usize) -> Image<u8, 1> {
    let mut rng = StdRng::seed_from_u64(42);
    // blobs of foreground on a background, thresholded from a coarse random field
    let cells: Vec<bool> = (0..(width / 8 + 1) * (height / 8 + 1))
        .map(|_| rng.random_bool(0.5))
        .collect();
    let data = (0..width * height)
        .map(|i| {
            let (y, x) = (i / width, i % width);
            if cells[(y / 8) * (width / 8 + 1) + x / 8] {
                255
            } else {
                0
            }
        })
        .collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn bench_thinning(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thinning");

    for (w, h) in [(64, 64), (128, 128), (256, 256)] {
        let image = create_test_image(w, h);

        for update in [ShrinkUpdate::Sequential, ShrinkUpdate::Snapshot] {
            let config = ThinningConfig {
                update,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", update), format!("{}x{}", w, h)),
                &image,
                |b, image| b.iter(|| skeletonize_with(image, &config).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_thinning);
criterion_main!(benches);
