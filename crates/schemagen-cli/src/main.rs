use clap::{Parser, Subcommand};
use colored::Colorize;
use schemagen_cli::commands::{component, module};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "schemagen",
    about = "Generates normalized native-interface schemas from TypeScript spec files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file in addition to the console
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Shortcut for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the schema for a native component spec file
    Component {
        /// Path to the .ts/.tsx spec file
        file: PathBuf,
        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the schema for a native module (TurboModule) spec file
    Module {
        /// Path to the .ts spec file
        file: PathBuf,
        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) =
        schemagen_core::init_from_args(cli.log_level.clone(), cli.log_file.clone(), cli.verbose)
    {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }

    let result = match &cli.command {
        Commands::Component { file, output } => {
            component::execute_component(file, output.as_deref())
        }
        Commands::Module { file, output } => module::execute_module(file, output.as_deref()),
    };

    if let Err(error) = result {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
