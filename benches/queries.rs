use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::construction::{build_bst_from_sorted_array, deserialize, serialize};
use bintree::{paths, properties, Node};

/// Helper to bench a read-only algorithm over perfect trees of increasing depth.
fn bench_helper<R>(c: &mut Criterion, name: &str, f: impl Fn(Option<&Node<i32>>) -> R) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels) - 1;
        let xs = (0..num_nodes as i32).collect::<Vec<_>>();
        let root = build_bst_from_sorted_array(&xs);

        group.bench_with_input(BenchmarkId::from_parameter(num_nodes), &root, |b, root| {
            b.iter(|| black_box(f(black_box(root.as_deref()))))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "diameter", properties::diameter);
    bench_helper(c, "max-path-sum", paths::max_path_sum);
    bench_helper(c, "serialize", serialize);
    bench_helper(c, "serialize-roundtrip", |root| deserialize(&serialize(root)));
    bench_helper(c, "find-all-paths", paths::find_all_paths);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
