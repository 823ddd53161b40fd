//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wordgraph::cli::{commands, LoadOptions};
use wordgraph::types::{BuildStrategy, GraphError, TraversalMode};

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph — graphs of words one edit apart"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Neighbor search: "pairwise" (default) or "index"
    #[arg(long, default_value = "pairwise", global = true)]
    strategy: String,

    /// Read the word list through a memory map
    #[arg(long, global = true)]
    mmap: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report nodes, edges, components, isolated nodes and degree distribution
    Stats {
        /// Word list, one word per line
        file: PathBuf,
    },
    /// Render the graph as GraphViz text
    Dot {
        /// Word list, one word per line
        file: PathBuf,
        /// Graph title
        #[arg(long)]
        name: Option<String>,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Shortest chain of one-letter edits between two words
    Path {
        /// Word list, one word per line
        file: PathBuf,
        /// Source word
        from: String,
        /// Destination word
        to: String,
    },
    /// Visitation order of a traversal from a node
    Traverse {
        /// Word list, one word per line
        file: PathBuf,
        /// Starting node ID (line number)
        start_id: u64,
        /// Traversal mode: bfs or dfs
        #[arg(long, default_value = "bfs")]
        mode: String,
    },
    /// List connected components, largest first
    Components {
        /// Word list, one word per line
        file: PathBuf,
        /// Maximum components to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// List words without neighbors
    Isolated {
        /// Word list, one word per line
        file: PathBuf,
    },
    /// Show a word's ID, degree and neighbors
    Word {
        /// Word list, one word per line
        file: PathBuf,
        /// The word to look up
        word: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let strategy = match BuildStrategy::from_name(&cli.strategy) {
        Some(s) => s,
        None => {
            eprintln!("Invalid strategy: {}", cli.strategy);
            process::exit(3);
        }
    };
    let mut options = LoadOptions {
        strategy,
        mmap: cli.mmap,
        name: None,
    };

    let result = match cli.command {
        Commands::Stats { file } => commands::cmd_stats(&file, &options, json),
        Commands::Dot { file, name, output } => {
            options.name = name;
            commands::cmd_dot(&file, &options, output.as_deref())
        }
        Commands::Path { file, from, to } => commands::cmd_path(&file, &options, &from, &to, json),
        Commands::Traverse {
            file,
            start_id,
            mode,
        } => {
            let mode = match TraversalMode::from_name(&mode) {
                Some(m) => m,
                None => {
                    eprintln!("Invalid traversal mode: {}", mode);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, &options, start_id, mode, json)
        }
        Commands::Components { file, limit } => {
            commands::cmd_components(&file, &options, limit, json)
        }
        Commands::Isolated { file } => commands::cmd_isolated(&file, &options, json),
        Commands::Word { file, word } => commands::cmd_word(&file, &options, &word, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::InvalidUtf8(_) => 2,
            GraphError::UnknownNode(_) | GraphError::UnknownLabel(_) => 4,
            GraphError::NoPath { .. } => 5,
            _ => 6,
        };
        process::exit(code);
    }
}
