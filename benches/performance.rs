use criterion::{criterion_group, criterion_main, Criterion};
use treepart_core::cluster::{Cluster, FileAndIndex};
use treepart_planner::{balanced_ranges, clustered_ranges};

fn make_clusters(nfiles: u64, clusters_per_file: u64, cluster_size: u64) -> Vec<Cluster> {
    let entries_per_file = clusters_per_file * cluster_size;
    let mut clusters = Vec::with_capacity((nfiles * clusters_per_file) as usize);
    for file_idx in 0..nfiles {
        let offset = file_idx * entries_per_file;
        for c in 0..clusters_per_file {
            let start = offset + c * cluster_size;
            clusters.push(Cluster {
                start,
                end: start + cluster_size,
                offset,
                file: FileAndIndex::new(format!("file-{}.data", file_idx), file_idx as u32),
            });
        }
    }
    clusters
}

fn bench_balanced_planning(c: &mut Criterion) {
    c.bench_function("balanced_ranges_1m_entries", |b| {
        b.iter(|| balanced_ranges(1_000_000, 1_000))
    });
}

fn bench_clustered_planning(c: &mut Criterion) {
    let clusters = make_clusters(100, 100, 1_000);
    c.bench_function("clustered_ranges_10k_clusters", |b| {
        b.iter(|| clustered_ranges(&clusters, 64, "events", None).unwrap())
    });
}

criterion_group!(benches, bench_balanced_planning, bench_clustered_planning);
criterion_main!(benches);
