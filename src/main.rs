use anyhow::{anyhow, Result};
use bintree::Tree;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds a level-filled binary tree, then searches it and removes values
/// from it, printing its walks along the way.
#[derive(Parser, Debug)]
#[command(name = "bintree-demo", about = "Exercise a level-filled binary tree")]
struct Cli {
    /// Values to insert, in order.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [10, 20, 30, 40, 50])]
    insert: Vec<i64>,
    /// Values to search for once everything is inserted.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [20, 60])]
    search: Vec<i64>,
    /// Values to remove, one at a time.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [20, 10, 100, 30, 40, 50])]
    remove: Vec<i64>,
    /// Log every structural change to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut tree: Tree<i64> = cli.insert.iter().copied().collect();
    info!(len = tree.len(), height = tree.height(), "built tree");

    println!("In-order traversal: {}", render(tree.in_order()));
    println!("Pre-order traversal: {}", render(tree.pre_order()));
    println!("Post-order traversal: {}", render(tree.post_order()));

    for value in &cli.search {
        let found = if tree.search(value) { "Found" } else { "Not found" };
        println!("Searching for value {value}: {found}");
    }

    for value in &cli.remove {
        match tree.remove(value) {
            Some(_) => println!(
                "In-order traversal after removing {value}: {}",
                render(tree.in_order())
            ),
            None => println!("Value {value} is not in the tree, nothing removed"),
        }
    }

    println!("Values left: {}", tree.len());
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Joins a walk into a single space-separated line.
fn render<'a>(values: impl Iterator<Item = &'a i64>) -> String {
    values
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
