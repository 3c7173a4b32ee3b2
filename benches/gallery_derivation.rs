// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::application::query::explore_order;
use iced_gallery::domain::gallery::{Album, AlbumId, DriveImage, FolderId, LocalizedText, Photo};
use iced_gallery::ui::gallery::layout::masonry_columns;
use iced_gallery::ui::gallery::{self, Pagination, SortOrder};
use std::hint::black_box;

/// Builds `albums` albums of `per_album` photos with varied ratios and dates.
fn sample_albums(albums: usize, per_album: usize) -> Vec<Album> {
    (0..albums)
        .map(|a| {
            let id = AlbumId::new(format!("album-{a}"));
            let photos = (0..per_album)
                .map(|p| {
                    let (width, height) = match p % 3 {
                        0 => (1200, 800),
                        1 => (800, 1200),
                        _ => (1000, 1000),
                    };
                    Photo::from_drive_image(
                        DriveImage {
                            id: format!("{a}-{p}"),
                            src: format!("https://lh3.googleusercontent.com/{a}-{p}=s3000"),
                            width,
                            height,
                            alt_text: format!("photo {p}"),
                        },
                        id.clone(),
                        format!("Album {a}"),
                    )
                })
                .collect();
            Album {
                id: id.clone(),
                title: format!("Album {a}"),
                description: LocalizedText::default(),
                capture_date: chrono::NaiveDate::from_ymd_opt(2000 + (a % 25) as i32, 1, 1),
                tags: Default::default(),
                cover_image: None,
                folder_id: FolderId::new(format!("folder-{a}")),
                photos,
            }
        })
        .collect()
}

fn explore_shuffle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("explore_shuffle");

    for total in [100, 1_000, 10_000] {
        let albums = sample_albums(total / 50, 50);
        group.bench_with_input(BenchmarkId::from_parameter(total), &albums, |b, albums| {
            let mut rng = fastrand::Rng::with_seed(7);
            b.iter(|| black_box(explore_order(black_box(albums), &mut rng)));
        });
    }

    group.finish();
}

fn masonry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_columns");

    for total in [50, 500, 5_000] {
        let ratios: Vec<f32> = sample_albums(1, total)[0]
            .photos
            .iter()
            .map(Photo::aspect_ratio)
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(total), &ratios, |b, ratios| {
            b.iter(|| black_box(masonry_columns(black_box(ratios), 3)));
        });
    }

    group.finish();
}

fn album_sort_benchmark(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut state = gallery::State::new(sample_albums(200, 5), &mut rng, Pagination::default());
    let _ = state.handle(gallery::Message::SetSortOrder(SortOrder::Oldest));

    c.bench_function("sorted_albums_200", |b| {
        b.iter(|| black_box(state.sorted_albums().len()));
    });
}

criterion_group!(
    benches,
    explore_shuffle_benchmark,
    masonry_benchmark,
    album_sort_benchmark
);
criterion_main!(benches);
