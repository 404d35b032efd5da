use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Network Generator for the motif finder.
///
/// Writes a random directed network as an edge list, one "from to" pair per
/// line, in the format read by `motif-finder`:
///
/// - edges are distinct and never self-loops
/// - a share of edges is reciprocated to produce mutual pairs
/// - directed 3-cycles can be planted first so the output has known structure
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random directed networks for the motif finder"
)]
struct Args {
    /// Number of node labels (0..nodes)
    #[arg(long)]
    nodes: usize,

    /// Number of distinct directed edges to emit
    #[arg(long)]
    edges: usize,

    /// Probability that a random edge u->v is followed by v->u
    #[arg(long, default_value_t = 0.10)]
    reciprocity: f64,

    /// Number of directed 3-cycles to plant on random node triples
    #[arg(long, default_value_t = 0)]
    planted_cycles: usize,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path
    #[arg(long)]
    output: PathBuf,
}

/// Distinct edges in insertion order
#[derive(Default)]
struct EdgeSet {
    order: Vec<(usize, usize)>,
    seen: HashSet<(usize, usize)>,
}

impl EdgeSet {
    fn insert(&mut self, edge: (usize, usize)) -> bool {
        if edge.0 == edge.1 || !self.seen.insert(edge) {
            return false;
        }
        self.order.push(edge);
        true
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Pick three distinct nodes uniformly
fn random_triple<R: Rng>(nodes: usize, rng: &mut R) -> [usize; 3] {
    let a = rng.gen_range(0..nodes);
    let mut b = rng.gen_range(0..nodes - 1);
    if b >= a {
        b += 1;
    }
    loop {
        let c = rng.gen_range(0..nodes);
        if c != a && c != b {
            return [a, b, c];
        }
    }
}

/// Plant up to `count` directed 3-cycles, never exceeding `budget` edges
fn plant_cycles<R: Rng>(edges: &mut EdgeSet, nodes: usize, count: usize, budget: usize, rng: &mut R) {
    for _ in 0..count {
        if edges.len() + 3 > budget {
            break;
        }
        let [a, b, c] = random_triple(nodes, rng);
        edges.insert((a, b));
        edges.insert((b, c));
        edges.insert((c, a));
    }
}

/// Fill with random edges until `budget` distinct edges exist
fn fill_random<R: Rng>(edges: &mut EdgeSet, nodes: usize, reciprocity: f64, budget: usize, rng: &mut R) {
    while edges.len() < budget {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        if !edges.insert((from, to)) {
            continue;
        }
        if edges.len() < budget && rng.gen::<f64>() < reciprocity {
            edges.insert((to, from));
        }
    }
}

/// Write edges as space-separated pairs
fn write_edges<W: Write>(writer: &mut W, edges: &[(usize, usize)]) -> io::Result<()> {
    for (from, to) in edges {
        writeln!(writer, "{} {}", from, to)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.nodes < 2 {
        eprintln!("Error: nodes must be at least 2.");
        std::process::exit(1);
    }
    let max_edges = args.nodes * (args.nodes - 1);
    if args.edges > max_edges {
        eprintln!(
            "Error: {} nodes allow at most {} distinct edges.",
            args.nodes, max_edges
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.reciprocity) {
        eprintln!("Error: reciprocity must be in [0,1].");
        std::process::exit(1);
    }
    if args.planted_cycles > 0 && args.nodes < 3 {
        eprintln!("Warning: fewer than 3 nodes, no cycles can be planted.");
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    let mut edges = EdgeSet::default();
    if args.nodes >= 3 {
        plant_cycles(&mut edges, args.nodes, args.planted_cycles, args.edges, &mut rng);
    }
    let planted = edges.len();
    fill_random(&mut edges, args.nodes, args.reciprocity, args.edges, &mut rng);

    let mut writer = BufWriter::new(File::create(&args.output)?);

    // Stats go to stdout, never into the generated file
    {
        let mutual = edges
            .order
            .iter()
            .filter(|&&(u, v)| u < v && edges.seen.contains(&(v, u)))
            .count();
        println!("Generated network:");
        println!("  nodes = {}", args.nodes);
        println!("  edges = {}", edges.len());
        println!("  reciprocity = {:.3}", args.reciprocity);
        println!("  planted cycle edges = {}", planted);
        println!("  mutual pairs = {}", mutual);
        if let Some(seed) = args.seed {
            println!("  seed = {}", seed);
        }
        println!("  output file: {:?}", args.output);
    }

    write_edges(&mut writer, &edges.order)?;
    writer.flush()?;

    Ok(())
}
