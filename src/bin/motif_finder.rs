use clap::Parser;
use network_motif_finder::{
    classify::{classify, MotifSet},
    enumerate::{edge_count_range, SubgraphEnumerator},
    parser::parse_network_file,
    report::{render_catalog, render_table},
    scan::{scan, scan_parallel, MatchRecord},
    universe::EdgeUniverse,
    utils::num_combinations,
    Network, Result,
};
use std::path::PathBuf;

/// Brute-force network motif finder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network edge list (one "from to" pair per line)
    #[arg(short, long, required_unless_present = "catalog")]
    input: Option<PathBuf>,

    /// Motif size: number of nodes per pattern
    #[arg(short = 'n', long = "size", default_value_t = 3)]
    n: usize,

    /// Match network combinations across all cores (same output as the sequential scan)
    #[arg(long)]
    parallel: bool,

    /// Print counters only, without the matched edge lists
    #[arg(long)]
    hide_locations: bool,

    /// Only print the motif catalogue for the given size
    #[arg(long)]
    catalog: bool,
}

fn run_scan(network: &Network, args: &Args, motifs: &MotifSet) -> Result<Vec<MatchRecord>> {
    let total: usize = edge_count_range(args.n)
        .map(|k| num_combinations(network.num_edges(), k))
        .fold(0, usize::saturating_add);
    println!("Candidate edge combinations to inspect: {}", total);

    let search_start = std::time::Instant::now();
    let records = if args.parallel {
        scan_parallel(network, args.n, motifs)?
    } else {
        scan(network, args.n, motifs)?
    };
    println!("Scan time: {:.3}s", search_start.elapsed().as_secs_f64());

    Ok(records)
}

fn run(args: &Args) -> Result<()> {
    println!("Network Motif Finder (n = {})", args.n);
    println!("==========================================================");
    println!();

    // Parse first so malformed input fails before the expensive enumeration
    let network = match &args.input {
        Some(path) => {
            let network = parse_network_file(path)?;
            println!(
                "Network {:?}: {} edges over {} nodes",
                path,
                network.num_edges(),
                network.num_nodes()
            );
            Some(network)
        }
        None => None,
    };

    println!("Enumerating spanning subgraphs...");
    let start_time = std::time::Instant::now();
    let universe = EdgeUniverse::new(args.n);
    let buckets = SubgraphEnumerator::new(&universe).enumerate();
    for bucket in &buckets {
        println!("  k = {}: {} subgraphs", bucket.k, bucket.len());
    }

    println!("Classifying into motifs...");
    let motifs = classify(&universe, &buckets);
    println!(
        "Found {} motifs in {:.3}s",
        motifs.len(),
        start_time.elapsed().as_secs_f64()
    );
    println!();

    let network = match network {
        Some(network) if !args.catalog => network,
        _ => {
            print!("{}", render_catalog(&motifs));
            return Ok(());
        }
    };

    let records = run_scan(&network, args, &motifs)?;
    println!();
    print!("{}", render_table(&records, !args.hide_locations));

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
