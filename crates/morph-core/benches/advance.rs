use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use morph_core::{Page, PointCloud};

fn bench_advance(c: &mut Criterion) {
    for page in [Page::Home, Page::Services] {
        let preset = page.preset();
        let mut cloud = PointCloud::with_seed(preset.count, preset.scatter_extent, 42);
        let mut t = 0.0f32;
        let mut i = 0usize;
        c.bench_function(&format!("advance_{}_{}", page, preset.count), |b| {
            b.iter(|| {
                t += 0.016;
                i += 1;
                let section = preset.section(i / 120 % preset.len());
                cloud.advance(black_box(t), &section.shape, black_box(Vec2::new(0.5, -0.25)));
            })
        });
    }
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
