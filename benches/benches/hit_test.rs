// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use shajra_family::FamilyMember;
use shajra_layout::compute_layout;
use shajra_view2d::{CanvasTransform, hit_test};

fn bushy(fanout: usize, depth: usize) -> FamilyMember {
    fn build(prefix: &str, fanout: usize, depth: usize) -> FamilyMember {
        let mut m = FamilyMember::new(prefix, format!("Member {prefix}"));
        if depth > 0 {
            for i in 0..fanout {
                m = m.with_child(build(&format!("{prefix}.{i}"), fanout, depth - 1));
            }
        }
        m
    }
    build("0", fanout, depth)
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let tree = bushy(4, 5);
    let layout = compute_layout(&tree).unwrap();
    let transform = CanvasTransform::INITIAL;

    // Last member in pre-order is the worst case for a linear scan.
    let last = layout.iter().last().map(|p| transform.apply(p.point)).unwrap();
    let miss = Point::new(1.0e6, 1.0e6);

    for (label, pt) in [("last", last), ("miss", miss)] {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| black_box(hit_test(&layout, &transform, black_box(pt))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
