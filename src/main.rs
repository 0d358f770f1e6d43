use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use build_context_selection as bcs;

/// Select build contexts from a build index by filter expression.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Build index YAML enumerating every known context
    index: PathBuf,
    /// Context filter such as 'app.Debug+EVK', '.Release' or '+EVK*'
    /// (repeatable; none selects everything)
    #[arg(short = 'c', long = "context", value_name = "FILTER")]
    contexts: Vec<String>,
    /// Read filters from a context set YAML instead of --context
    #[arg(short = 'S', long = "set", value_name = "FILE", conflicts_with = "contexts")]
    set: Option<PathBuf>,
    /// Write the resolved selection out as a context set YAML
    #[arg(long, value_name = "FILE")]
    save_set: Option<PathBuf>,
    /// Print the selection as a JSON array
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("bcsel: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> bcs::errors::Result<()> {
    let index = bcs::index::load_build_index(&args.index)?;
    let selector = bcs::Selector::new(index.contexts());

    let filters = match &args.set {
        Some(path) => {
            let set = bcs::index::load_context_set(path)?;
            let filters = set.contexts();
            if filters.is_empty() {
                tracing::warn!(path = %path.display(), "context set is empty, selecting nothing");
            }
            filters
        }
        None if args.contexts.is_empty() => vec!["*".to_string()],
        None => args.contexts.clone(),
    };

    let selected = selector.select(&filters)?;

    if let Some(path) = &args.save_set {
        bcs::index::write_context_set(path, &selected)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected).unwrap());
    } else {
        for context in &selected {
            println!("{context}");
        }
    }
    Ok(())
}
