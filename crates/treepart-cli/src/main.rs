//! treepart CLI: plan dataset partitions from a layout catalog.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use treepart_core::config::PlannerConfig;
use treepart_core::range::Range;
use treepart_io::{JsonCatalog, MemoryDataSource};
use treepart_planner::{build_ranges, PlanOutcome};

#[derive(Parser)]
#[command(name = "treepart")]
#[command(about = "treepart: cluster-aware range partitioning for distributed datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a partition plan and print it as JSON
    Plan {
        /// Path to the dataset layout catalog (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Tree to partition (required with --catalog)
        #[arg(short, long)]
        tree: Option<String>,

        /// Total entry count for an unclustered dataset (alternative to --catalog)
        #[arg(long)]
        entries: Option<u64>,

        /// Number of partitions to request (defaults to TREEPART_NPARTITIONS or 2)
        #[arg(short, long)]
        partitions: Option<u32>,
    },

    /// Show a human-readable summary of a partition plan
    Explain {
        /// Path to the dataset layout catalog (JSON)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Tree to partition
        #[arg(short, long)]
        tree: String,

        /// Number of partitions to request (defaults to TREEPART_NPARTITIONS or 2)
        #[arg(short, long)]
        partitions: Option<u32>,
    },

    /// Validate a layout catalog (cluster invariants)
    Validate {
        /// Path to the dataset layout catalog (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            catalog,
            tree,
            entries,
            partitions,
        } => {
            if let Err(e) = plan(catalog, tree, entries, partitions) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Explain {
            catalog,
            tree,
            partitions,
        } => {
            if let Err(e) = explain(&catalog, &tree, partitions) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { catalog } => {
            if let Err(e) = validate(&catalog) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Catalog is valid");
        }
    }
}

fn requested_partitions(flag: Option<u32>) -> u32 {
    flag.unwrap_or_else(|| PlannerConfig::from_env().npartitions)
}

fn plan(
    catalog: Option<PathBuf>,
    tree: Option<String>,
    entries: Option<u64>,
    partitions: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let npartitions = requested_partitions(partitions);
    let outcome = build_outcome(catalog, tree, entries, npartitions)?;

    for warning in &outcome.warnings {
        eprintln!("Warning: {}", warning);
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

fn explain(
    catalog_path: &PathBuf,
    tree: &str,
    partitions: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let npartitions = requested_partitions(partitions);
    let catalog = JsonCatalog::from_path(catalog_path)?;
    let descriptor = catalog.descriptor(tree)?;
    let outcome = build_ranges(&descriptor, npartitions, &catalog)?;

    println!("Partition Plan");
    println!("==============");
    println!();
    println!("Tree: {}", tree);
    println!("Input Files: {}", descriptor.files.as_deref().map_or(0, |f| f.len()));
    println!("Total Entries: {}", descriptor.nentries);
    println!(
        "Partitions: {} requested, {} effective",
        npartitions, outcome.npartitions
    );
    println!("Fingerprint: {}", outcome.fingerprint()?);
    println!();

    if !outcome.warnings.is_empty() {
        println!("Warnings:");
        for warning in &outcome.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    println!("Ranges:");
    for (i, range) in outcome.ranges.iter().enumerate() {
        println!("  {}. {}", i + 1, summarize_range(range));
    }

    Ok(())
}

fn validate(catalog_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let _ = JsonCatalog::from_path(catalog_path)?;
    Ok(())
}

fn build_outcome(
    catalog: Option<PathBuf>,
    tree: Option<String>,
    entries: Option<u64>,
    npartitions: u32,
) -> Result<PlanOutcome, Box<dyn std::error::Error>> {
    match (catalog, entries) {
        (Some(path), None) => {
            let tree = tree.ok_or("--tree is required with --catalog")?;
            let catalog = JsonCatalog::from_path(&path)?;
            let descriptor = catalog.descriptor(&tree)?;
            Ok(build_ranges(&descriptor, npartitions, &catalog)?)
        }
        (None, Some(nentries)) => {
            let descriptor = treepart_core::dataset::DatasetDescriptor::unclustered(nentries);
            // The balanced path never touches the opener.
            let source = MemoryDataSource::new();
            Ok(build_ranges(&descriptor, npartitions, &source)?)
        }
        _ => Err("exactly one of --catalog or --entries must be given".into()),
    }
}

fn summarize_range(range: &Range) -> String {
    match range {
        Range::Balanced(r) => {
            format!("entries [{}, {}) ({} entries)", r.start, r.end, r.len())
        }
        Range::Clustered(r) => format!(
            "entries [{}, {}) ({} entries) over {} file(s): {}",
            r.start,
            r.end,
            r.len(),
            r.filelist.len(),
            r.filelist.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_outcome, summarize_range};
    use treepart_core::range::{EntryRange, Range, TreeRange};

    #[test]
    fn summarize_balanced_range() {
        let range = Range::Balanced(EntryRange::new(0, 10));
        assert_eq!(summarize_range(&range), "entries [0, 10) (10 entries)");
    }

    #[test]
    fn summarize_clustered_range_lists_files() {
        let range = Range::Clustered(TreeRange {
            start: 0,
            end: 500,
            treename: "events".into(),
            filelist: vec!["a.data".into(), "b.data".into()],
            friends: None,
        });
        let text = summarize_range(&range);
        assert!(text.contains("2 file(s)"));
        assert!(text.contains("a.data, b.data"));
    }

    #[test]
    fn entries_mode_builds_balanced_plan() {
        let outcome = build_outcome(None, None, Some(10), 5).unwrap();
        assert_eq!(outcome.npartitions, 5);
        assert_eq!(outcome.ranges.len(), 5);
    }

    #[test]
    fn rejects_catalog_and_entries_together() {
        assert!(build_outcome(Some("x.json".into()), None, Some(10), 2).is_err());
    }
}
