// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size};
use understory_pager::{PageGeometry, PageSource, PagedScroll, PagerEvent, ScrollSurface};

#[derive(Default)]
struct Surface {
    offset: Point,
    content: Size,
}

impl ScrollSurface for Surface {
    fn viewport_size(&self) -> Size {
        Size::new(390.0, 844.0)
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, _animated: bool) {
        self.offset = rect.origin();
    }
}

struct Pages(usize);

impl PageSource for Pages {
    type Page = u32;

    fn page_count(&self) -> usize {
        self.0
    }

    fn page(&mut self, index: usize) -> u32 {
        index as u32
    }
}

/// Offsets of a drag sweeping across every page in small steps.
fn sweep(pages: usize, step: f64) -> Vec<f64> {
    let end = 390.0 * pages as f64;
    let mut x = -40.0;
    let mut out = Vec::new();
    while x < end + 40.0 {
        out.push(x);
        x += step;
    }
    out
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/geometry");
    let geometry = PageGeometry::new(390.0);
    let offsets = sweep(32, 1.5);
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("current_page_index", |b| {
        b.iter(|| {
            for &x in &offsets {
                black_box(geometry.current_page_index(black_box(x)));
            }
        });
    });

    group.bench_function("transition", |b| {
        b.iter(|| {
            for &x in &offsets {
                black_box(geometry.transition(black_box(x)));
            }
        });
    });

    group.finish();
}

fn bench_did_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/did_scroll");

    // Hypothesis: derivation cost is flat per sample, independent of page count.
    for pages in [4usize, 64, 1_024] {
        let offsets = sweep(pages.min(64), 2.0);
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pages), &offsets, |b, offsets| {
            b.iter_batched(
                || {
                    let mut pager = PagedScroll::new(Surface::default());
                    pager.reload(Pages(pages), ());
                    (pager, Vec::<PagerEvent>::with_capacity(offsets.len() * 2))
                },
                |(mut pager, mut events)| {
                    for &x in offsets {
                        pager.surface_mut().set_content_offset(Point::new(x, 0.0));
                        pager.did_scroll(&mut events);
                    }
                    pager.did_end_decelerating(&mut events);
                    black_box(events);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_did_scroll);
criterion_main!(benches);
