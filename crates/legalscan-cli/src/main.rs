mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "legalscan",
    version,
    about = "Rule-based structure, flow, decision and impact classification of legal text"
)]
struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a legal document (.txt, .md or .json by default)
    Analyze {
        /// Path to the document
        input_file: PathBuf,

        /// JSON configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table or json (default from config)
        #[arg(short, long, value_parser = ["table", "json"])]
        output: Option<String>,

        /// Write the analysis to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// List every extracted element
        #[arg(long)]
        show_elements: bool,
    },
    /// Analyze legal text given on the command line
    AnalyzeText {
        /// The text to analyze
        text: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,

        /// List every extracted element
        #[arg(long)]
        show_elements: bool,
    },
    /// Analyze every supported document in a directory
    Batch {
        /// Directory containing documents
        directory: PathBuf,

        /// JSON configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table or json (default from config)
        #[arg(short, long, value_parser = ["table", "json"])]
        output: Option<String>,

        /// Write one <name>_analysis.json per analyzed document here
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Merge saved analysis or batch JSON files into one report
    Report {
        /// Saved JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,
    },
    /// Inspect the built-in pattern catalog
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
    /// Analyze a built-in sample text
    Demo {
        /// List every extracted element
        #[arg(long)]
        show_elements: bool,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List category patterns and their per-line match policies
    List,
    /// List domain definitions in priority order
    Domains,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "legalscan_core=debug,legalscan=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            config,
            output,
            out,
            show_elements,
        } => commands::analyze::run(input_file, config, output, out, show_elements),
        Commands::AnalyzeText {
            text,
            output,
            show_elements,
        } => commands::analyze::run_text(&text, &output, show_elements),
        Commands::Batch {
            directory,
            config,
            output,
            out_dir,
        } => commands::batch::run(directory, config, output, out_dir),
        Commands::Report { files, output } => commands::report::run(&files, &output),
        Commands::Patterns { action } => match action {
            PatternsAction::List => commands::patterns::list(),
            PatternsAction::Domains => commands::patterns::domains(),
        },
        Commands::Demo { show_elements } => commands::analyze::demo(show_elements),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
