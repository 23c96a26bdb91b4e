//! Kirkman triple system CLI

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kirkman::{available_constructions, feasible_orders, ConstructionKind, KtsBuilder};

#[derive(Parser, Debug)]
#[command(name = "kirkman")]
#[command(about = "Build Kirkman triple systems (solutions to Kirkman's schoolgirl problem)", long_about = None)]
struct Cli {
    /// Number of points v; must satisfy v = 3 (mod 6)
    #[arg(required_unless_present = "list")]
    order: Option<u32>,

    /// Force a construction instead of selecting one
    #[arg(short, long, value_enum)]
    construction: Option<Method>,

    /// Skip verification of the schedule
    #[arg(long)]
    no_verify: bool,

    /// Print a summary of the system before the schedule
    #[arg(short, long)]
    summary: bool,

    /// List every buildable order up to MAX and exit
    #[arg(long, value_name = "MAX", conflicts_with = "order")]
    list: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// v = 2q + 1
    TwoGroup,
    /// v = 3q
    ThreeGroup,
}

impl From<Method> for ConstructionKind {
    fn from(method: Method) -> Self {
        match method {
            Method::TwoGroup => ConstructionKind::TwoGroup,
            Method::ThreeGroup => ConstructionKind::ThreeGroup,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(max) = cli.list {
        cmd_list(max);
        return Ok(());
    }

    let order = cli.order.context("an order is required")?;
    cmd_solve(order, cli.construction, !cli.no_verify, cli.summary)
}

fn cmd_list(max: u32) {
    for order in feasible_orders(0..=max) {
        let methods: Vec<String> = available_constructions(order)
            .into_iter()
            .map(|(kind, q)| format!("{} (q = {})", kind, q))
            .collect();
        println!("{:>5}  {}", order, methods.join(", "));
    }
}

fn cmd_solve(order: u32, method: Option<Method>, verify: bool, summary: bool) -> Result<()> {
    let mut builder = KtsBuilder::new().order(order).verify(verify);
    if let Some(method) = method {
        builder = builder.construction(method.into());
    }

    let mut kts = builder
        .build()
        .with_context(|| format!("cannot build a Kirkman triple system of order {}", order))?;
    info!("Using {} over GF({})", kts.method_name(), kts.field_size());

    if summary {
        println!("{}", kts);
        println!();
    }

    let solution = kts
        .solve()
        .with_context(|| format!("KTS({}) failed verification", order))?;
    print!("{}", solution);

    Ok(())
}
