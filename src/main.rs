use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use degrees::data_loading::load_data;
use degrees::report::render_path;
use degrees::resolver::{person_id_for_name, Candidate, Disambiguator};
use degrees::{find_path, Dataset, DegreesError, PersonId, Strategy};

/// Degrees of separation between two people through shared movies
#[derive(Parser, Debug)]
#[command(name = "degrees", version)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// First person's name (prompted when omitted)
    #[arg(short, long)]
    source: Option<String>,

    /// Second person's name (prompted when omitted)
    #[arg(short, long)]
    target: Option<String>,

    /// Frontier used by the search
    #[arg(long, value_enum, default_value_t = SearchOrder::Breadth)]
    strategy: SearchOrder,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SearchOrder {
    /// Queue frontier, shortest path
    Breadth,
    /// Stack frontier, some path
    Depth,
}

impl From<SearchOrder> for Strategy {
    fn from(order: SearchOrder) -> Self {
        match order {
            SearchOrder::Breadth => Strategy::Breadth,
            SearchOrder::Depth => Strategy::Depth,
        }
    }
}

/// Asks on stdin which of several same-named people was meant.
struct StdinDisambiguator;

impl Disambiguator for StdinDisambiguator {
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<PersonId> {
        println!("Which '{}'?", name);
        for candidate in candidates {
            println!(
                "ID: {}, Name: {}, Birth: {}",
                candidate.id,
                candidate.name,
                candidate.birth.as_deref().unwrap_or("")
            );
        }
        prompt("Intended Person ID: ").ok()
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve(dataset: &Dataset, name: Option<String>) -> Result<PersonId> {
    let name = match name {
        Some(name) => name,
        None => prompt("Name: ")?,
    };
    person_id_for_name(dataset, &name, &mut StdinDisambiguator)
        .ok_or_else(|| DegreesError::PersonNotFound(name).into())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "degrees=debug" } else { "degrees=info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("loading data from {}", cli.directory.display());
    let (dataset, _) = load_data(&cli.directory)
        .with_context(|| format!("failed to load dataset from {}", cli.directory.display()))?;

    let source = resolve(&dataset, cli.source)?;
    let target = resolve(&dataset, cli.target)?;

    let path = find_path(&dataset, &source, &target, cli.strategy.into());
    for line in render_path(&dataset, &source, path.as_ref())? {
        println!("{}", line);
    }
    Ok(())
}
