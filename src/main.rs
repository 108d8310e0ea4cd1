use clap::{Parser as ClapParser, Subcommand};
use sift_lang::cli::{self, CliError, SearchOptions, SearchOutcome};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - a query language for filtering and ranking JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a JSON document collection with a sift query
    Search {
        /// The query to run
        query: String,

        /// JSON documents (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Compare strings case-sensitively
        #[arg(long)]
        case_sensitive: bool,

        /// Similarity threshold for fuzzy terms, in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,

        /// Per-field score weight as field=multiplier (repeatable)
        #[arg(long = "weight")]
        weights: Vec<String>,
    },

    /// Validate query syntax without searching
    Check {
        /// The query to validate
        query: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            input,
            pretty,
            case_sensitive,
            threshold,
            weights,
        } => run_search(query, input, pretty, case_sensitive, threshold, weights),
        Commands::Check { query } => run(SearchOptions {
            query,
            syntax_only: true,
            ..Default::default()
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = if let Ok(env) = std::env::var("SIFT_LOG") {
        EnvFilter::new(env)
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run_search(
    query: String,
    input: Option<String>,
    pretty: bool,
    case_sensitive: bool,
    threshold: Option<f64>,
    weights: Vec<String>,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    run(SearchOptions {
        query,
        input,
        pretty,
        syntax_only: false,
        case_sensitive,
        fuzzy_threshold: threshold,
        weights,
    })
}

fn run(options: SearchOptions) -> Result<(), CliError> {
    match cli::execute_search(&options)? {
        SearchOutcome::SyntaxValid => println!("Syntax is valid"),
        SearchOutcome::Results(output) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .unwrap();
            println!("{}", json);
        }
    }
    Ok(())
}
