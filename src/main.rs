use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use topopath::{
    parse_topology_text, shortest_path_by_cost, shortest_path_by_distance, BudgetConfig,
    LinkBudget, Topology,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shortest-path planning over optical and IP topologies
#[derive(Parser, Debug)]
#[command(name = "topopath")]
#[command(about = "Shortest-path planning over optical and IP topologies", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse router/LSA dump text and show the extracted topology
    Parse {
        /// Input text file, or `-` for stdin
        input: PathBuf,
    },
    /// Parse dump text and find the least-cost path between two nodes
    Route {
        /// Input text file, or `-` for stdin
        input: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
    /// Plan the shortest fibre route through a JSON topology and estimate its link budget
    Plan {
        /// Topology document (`{"nodes": [...], "links": [...]}`)
        topology: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[command(flatten)]
        budget: BudgetArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct BudgetArgs {
    /// Launch power (dBm)
    #[arg(long, default_value_t = BudgetConfig::default().launch_dbm)]
    launch_dbm: f64,

    /// Fibre loss (dB/km)
    #[arg(long, default_value_t = BudgetConfig::default().loss_db_per_km)]
    loss_db_per_km: f64,

    /// Amplifier gain (dB)
    #[arg(long, default_value_t = BudgetConfig::default().amp_gain_db)]
    amp_gain_db: f64,

    /// Amplifier noise figure (dB)
    #[arg(long, default_value_t = BudgetConfig::default().amp_nf_db)]
    amp_nf_db: f64,

    /// Span length between amplifiers (km)
    #[arg(long, default_value_t = BudgetConfig::default().span_km)]
    span_km: f64,

    /// Minimum acceptable OSNR margin (dB)
    #[arg(long, default_value_t = BudgetConfig::default().osnr_threshold_db)]
    osnr_threshold_db: f64,
}

impl From<BudgetArgs> for BudgetConfig {
    fn from(args: BudgetArgs) -> Self {
        Self {
            launch_dbm: args.launch_dbm,
            loss_db_per_km: args.loss_db_per_km,
            amp_gain_db: args.amp_gain_db,
            amp_nf_db: args.amp_nf_db,
            span_km: args.span_km,
            osnr_threshold_db: args.osnr_threshold_db,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Parse { input } => run_parse(&input, args.json),
        Command::Route { input, from, to } => run_route(&input, &from, &to, args.json),
        Command::Plan {
            topology,
            from,
            to,
            budget,
        } => run_plan(&topology, &from, &to, budget.into(), args.json),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run_parse(input: &Path, json: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let parsed = parse_topology_text(&text);
    info!("Parsed {} nodes and {} links", parsed.nodes.len(), parsed.links.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("Nodes: {}", parsed.nodes.join(", "));
    println!("Links:");
    for link in &parsed.links {
        println!("  {} -> {} (cost: {})", link.a, link.b, link.cost_weight());
    }
    println!("Matched lines: {}", parsed.matched.len());
    if !parsed.skipped.is_empty() {
        println!("Skipped lines:");
        for line in &parsed.skipped {
            println!("  {}", line);
        }
    }
    Ok(())
}

fn run_route(input: &Path, from: &str, to: &str, json: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let parsed = parse_topology_text(&text);
    for id in [from, to] {
        if !parsed.contains_node(id) {
            warn!("Node {} does not appear in the parsed topology", id);
        }
    }

    let route = shortest_path_by_cost(&parsed.nodes, &parsed.links, from, to);
    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "route": route }))?);
        return Ok(());
    }

    match route {
        Some(route) => {
            println!("Shortest path by cost: {}", route.path.join(" -> "));
            println!("Total cost: {}", route.total_cost);
        }
        None => println!("no path from {} to {}", from, to),
    }
    Ok(())
}

fn run_plan(
    topology: &Path,
    from: &str,
    to: &str,
    config: BudgetConfig,
    json: bool,
) -> anyhow::Result<()> {
    config.validate().context("invalid link budget parameters")?;
    let topo = Topology::load(topology)
        .with_context(|| format!("failed to load topology {}", topology.display()))?;
    topo.validate().context("topology failed validation")?;
    info!("Loaded topology: {} nodes, {} links", topo.nodes.len(), topo.links.len());

    let route = shortest_path_by_distance(&topo.nodes, &topo.links, from, to);
    let budget = route.as_ref().map(|r| LinkBudget::estimate(r, &config));

    if json {
        let out = serde_json::json!({ "route": route, "budget": budget });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let (Some(route), Some(budget)) = (route, budget) else {
        println!("no path from {} to {}", from, to);
        return Ok(());
    };

    let hops: Vec<&str> = route
        .path
        .iter()
        .map(|id| topo.node_label(id).unwrap_or(id.as_str()))
        .collect();
    println!("Path: {}", hops.join(" -> "));
    println!("Distance: {:.1} km", budget.distance_km);
    println!("Amplifiers (approx): {}", budget.amplifiers);
    println!("Total fibre loss: {:.2} dB", budget.total_loss_db);
    println!("Estimated OSNR margin: {:.2} dB", budget.osnr_margin_db);
    println!("Regen required: {}", if budget.regen_required { "yes" } else { "no" });
    Ok(())
}
