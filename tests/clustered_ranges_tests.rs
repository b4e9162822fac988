//! Clustered range planning tests

use treepart_core::cluster::Cluster;
use treepart_core::range::TreeRange;
use treepart_io::{MemoryDataSource, TreeLayout};
use treepart_planner::{clustered_ranges, rebase};
use treepart_scan::scan_clusters;

fn to_tuples(ranges: &[TreeRange]) -> Vec<(u64, u64)> {
    ranges.iter().map(|r| (r.start, r.end)).collect()
}

fn scan(source: &MemoryDataSource, files: &[&str]) -> Vec<Cluster> {
    let files: Vec<String> = files.iter().map(|f| f.to_string()).collect();
    scan_clusters(source, "events", &files).unwrap()
}

#[test]
fn test_one_cluster_one_partition() {
    let source = MemoryDataSource::new();
    source.insert_tree("slimmed.data", "events", TreeLayout::single_cluster(10));

    let clusters = scan(&source, &["slimmed.data"]);
    let ranges = clustered_ranges(&clusters, 1, "events", None).unwrap();

    assert_eq!(to_tuples(&ranges), vec![(0, 10)]);
    assert_eq!(ranges[0].filelist, vec!["slimmed.data"]);
    assert_eq!(ranges[0].treename, "events");
}

#[test]
fn test_two_clusters_two_partitions() {
    // Cluster boundaries are respected even when that yields ranges with
    // very different entry counts.
    let source = MemoryDataSource::new();
    source.insert_tree(
        "2clusters.data",
        "events",
        TreeLayout::from_edges(vec![0, 777, 1000]),
    );

    let clusters = scan(&source, &["2clusters.data"]);
    let ranges = clustered_ranges(&clusters, 2, "events", None).unwrap();

    assert_eq!(to_tuples(&ranges), vec![(0, 777), (777, 1000)]);
}

#[test]
fn test_four_clusters_four_partitions() {
    let source = MemoryDataSource::new();
    source.insert_tree(
        "4clusters.data",
        "events",
        TreeLayout::with_cluster_size(1000, 250),
    );

    let clusters = scan(&source, &["4clusters.data"]);
    let ranges = clustered_ranges(&clusters, 4, "events", None).unwrap();

    assert_eq!(
        to_tuples(&ranges),
        vec![(0, 250), (250, 500), (500, 750), (750, 1000)]
    );
}

#[test]
fn test_many_clusters_four_partitions() {
    let source = MemoryDataSource::new();
    source.insert_tree(
        "1000clusters.data",
        "events",
        TreeLayout::with_cluster_size(1000, 1),
    );

    let clusters = scan(&source, &["1000clusters.data"]);
    assert_eq!(clusters.len(), 1000);

    let ranges = clustered_ranges(&clusters, 4, "events", None).unwrap();
    assert_eq!(
        to_tuples(&ranges),
        vec![(0, 250), (250, 500), (500, 750), (750, 1000)]
    );
}

#[test]
fn test_many_clusters_many_partitions() {
    // Partition count equal to the cluster count: one single-entry range
    // per cluster.
    let source = MemoryDataSource::new();
    source.insert_tree(
        "1000clusters.data",
        "events",
        TreeLayout::with_cluster_size(1000, 1),
    );

    let clusters = scan(&source, &["1000clusters.data"]);
    let ranges = clustered_ranges(&clusters, 1000, "events", None).unwrap();

    let expected: Vec<(u64, u64)> = (0..1000).map(|i| (i, i + 1)).collect();
    assert_eq!(to_tuples(&ranges), expected);
}

#[test]
fn test_multi_file_ranges_are_rebased() {
    // Three files of 10000/20000/30000 entries, 10 clusters each. Two
    // partitions split the 30 clusters 15/15; each range's entries are
    // relative to the first file it opens.
    let source = MemoryDataSource::new();
    source.insert_tree("f1.data", "events", TreeLayout::with_cluster_size(10000, 1000));
    source.insert_tree("f2.data", "events", TreeLayout::with_cluster_size(20000, 2000));
    source.insert_tree("f3.data", "events", TreeLayout::with_cluster_size(30000, 3000));

    let clusters = scan(&source, &["f1.data", "f2.data", "f3.data"]);
    assert_eq!(clusters.len(), 30);

    let ranges = clustered_ranges(&clusters, 2, "events", None).unwrap();

    // First range: all of f1 plus the first half of f2, in f1 coordinates.
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[0].end, 20000);
    assert_eq!(ranges[0].filelist, vec!["f1.data", "f2.data"]);

    // Second range: rest of f2 plus all of f3, in f2 coordinates.
    assert_eq!(ranges[1].start, 10000);
    assert_eq!(ranges[1].end, 50000);
    assert_eq!(ranges[1].filelist, vec!["f2.data", "f3.data"]);
}

#[test]
fn test_filelist_has_no_duplicates_within_one_file() {
    let source = MemoryDataSource::new();
    source.insert_tree("a.data", "events", TreeLayout::with_cluster_size(400, 100));

    let clusters = scan(&source, &["a.data"]);
    let ranges = clustered_ranges(&clusters, 1, "events", None).unwrap();

    assert_eq!(ranges[0].filelist, vec!["a.data"]);
}

#[test]
fn test_repeated_file_keeps_both_occurrences_in_order() {
    // A file listed twice is scanned twice with distinct indices; a range
    // spanning both occurrences must open it twice, in list order.
    let source = MemoryDataSource::new();
    source.insert_tree("a.data", "events", TreeLayout::single_cluster(100));
    source.insert_tree("b.data", "events", TreeLayout::single_cluster(100));

    let clusters = scan(&source, &["a.data", "b.data", "a.data"]);
    assert_eq!(clusters.len(), 3);

    let ranges = clustered_ranges(&clusters, 1, "events", None).unwrap();
    assert_eq!(ranges[0].filelist, vec!["a.data", "b.data", "a.data"]);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[0].end, 300);
}

#[test]
fn test_rebase_round_trip_reconstructs_global_coordinates() {
    // Re-expressing every range in global coordinates via its first file's
    // offset must exactly tile [0, total) with no gap or overlap.
    let layouts: [(u64, u64); 4] = [(100, 10), (250, 50), (60, 7), (990, 33)];

    let source = MemoryDataSource::new();
    let mut files = Vec::new();
    let mut offsets = std::collections::HashMap::new();
    let mut offset = 0;
    for (i, (entries, cluster_size)) in layouts.iter().enumerate() {
        let name = format!("part-{}.data", i);
        source.insert_tree(
            &name,
            "events",
            TreeLayout::with_cluster_size(*entries, *cluster_size),
        );
        offsets.insert(name.clone(), offset);
        offset += entries;
        files.push(name);
    }
    let total = offset;

    let clusters = scan_clusters(&source, "events", &files).unwrap();

    for npartitions in [1u32, 2, 3, 5, 8, 13] {
        let ranges = clustered_ranges(&clusters, npartitions, "events", None).unwrap();

        let mut cursor = 0;
        for range in &ranges {
            let first_offset = offsets[&range.filelist[0]];
            let global_start = range.start + first_offset;
            let global_end = range.end + first_offset;

            assert_eq!(global_start, cursor, "gap/overlap at {:?}", range);
            assert!(global_end > global_start, "empty range {:?}", range);
            assert_eq!(rebase(global_start, first_offset), range.start);
            cursor = global_end;
        }
        assert_eq!(cursor, total);
    }
}

#[test]
fn test_friend_info_passes_through_to_every_range() {
    use treepart_core::dataset::FriendInfo;

    let friends = FriendInfo {
        names: vec![("aux".to_string(), Some("a".to_string()))],
        file_names: vec![vec!["aux.data".to_string()]],
    };

    let source = MemoryDataSource::new();
    source.insert_tree("a.data", "events", TreeLayout::with_cluster_size(100, 25));

    let clusters = scan(&source, &["a.data"]);
    let ranges = clustered_ranges(&clusters, 2, "events", Some(&friends)).unwrap();

    assert_eq!(ranges.len(), 2);
    for range in &ranges {
        assert_eq!(range.friends.as_ref(), Some(&friends));
    }
}
