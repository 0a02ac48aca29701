use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use tileseam_image::Image;
use tileseam_imgproc::{
    seam::{pad_tiles_into, padded_size},
    tile::{TileGrid, TileSize},
};

// per pixel lookup into the source, used as a baseline
fn pad_tiles_naive(src: &Image<u8, 4>, dst: &mut Image<u8, 4>, grid: &TileGrid) {
    let tile = grid.tile_size();
    let (cell_w, cell_h) = (tile.width() + 2, tile.height() + 2);
    let width = dst.width();

    for (i, px) in dst.as_slice_mut().chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % width, i / width);
        let (col, row) = (x / cell_w, y / cell_h);
        let rect = grid.tile_rect(col, row);
        let sx = rect.x + (x % cell_w).saturating_sub(1).min(rect.width - 1);
        let sy = rect.y + (y % cell_h).saturating_sub(1).min(rect.height - 1);
        let offset = (sy * src.width() + sx) * 4;
        px.copy_from_slice(&src.as_slice()[offset..offset + 4]);
    }
}

fn bench_seam(c: &mut Criterion) {
    let mut group = c.benchmark_group("Seam");

    for (width, height, tile) in [(256, 256, 16), (1024, 1024, 32), (2048, 1536, 32)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}_t{}", width, height, tile);

        let image = Image::<u8, 4>::new(
            [*width, *height].into(),
            (0..width * height * 4).map(|i| (i % 251) as u8).collect(),
        )
        .unwrap();
        let tile = TileSize::square(*tile).unwrap();
        let grid = TileGrid::new(image.size(), tile);
        let out = Image::<u8, 4>::from_size_val(padded_size(image.size(), tile), 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("naive", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0.clone(), i.1.clone());
                b.iter(|| pad_tiles_naive(black_box(&src), black_box(&mut dst), &grid))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tileseam_par", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0.clone(), i.1.clone());
                b.iter(|| {
                    pad_tiles_into(black_box(&src), black_box(&mut dst), black_box(tile))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_seam);
criterion_main!(benches);
