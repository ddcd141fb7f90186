// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use shajra_family::{FamilyMember, member_count};
use shajra_layout::compute_layout;
use shajra_view2d::connectors;

/// A complete tree with `fanout` children per member, `depth` generations deep.
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

/// A single line of descent.
fn chain(len: usize) -> FamilyMember {
    let mut m = FamilyMember::new(format!("c{len}"), "Last");
    for i in (0..len).rev() {
        m = FamilyMember::new(format!("c{i}"), format!("Ancestor {i}")).with_child(m);
    }
    m
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute");
    for (label, tree) in [
        ("bushy_3x6", bushy(3, 6)),
        ("bushy_6x4", bushy(6, 4)),
        ("chain_200", chain(200)),
    ] {
        group.throughput(Throughput::Elements(member_count(&tree) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &tree, |b, tree| {
            b.iter(|| black_box(compute_layout(tree).unwrap()));
        });
    }
    group.finish();
}

fn bench_connectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/connectors");
    for (fanout, depth) in [(3usize, 6usize), (6, 4)] {
        let tree = bushy(fanout, depth);
        let layout = compute_layout(&tree).unwrap();
        group.throughput(Throughput::Elements(layout.len() as u64));
        group.bench_function(BenchmarkId::new("bushy", format!("{fanout}x{depth}")), |b| {
            b.iter(|| black_box(connectors(&tree, &layout)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_layout, bench_connectors);
criterion_main!(benches);
