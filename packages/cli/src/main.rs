use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blockboard_api::{BoardService, RunOutcome, RunRequest, SaveRequest};
use blockboard_board::BoardRegistry;
use blockboard_script_store::LocalDiskStore;

/// blockboard - drive a simulated hardware board with scripts
#[derive(Parser, Debug)]
#[command(name = "blockboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the script store file
    #[arg(long, default_value = "scripts.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save a script under a name for later replay
    Save {
        /// Name to store the script under
        name: String,
        /// Script file to read
        file: PathBuf,
    },
    /// Run a script from a file, or a stored one with --name
    Run {
        /// Script file to run
        file: Option<PathBuf>,
        /// Stored script name to run instead
        #[arg(long, conflicts_with = "file")]
        name: Option<String>,
    },
    /// List stored scripts
    List,
    /// Dump current board state as JSON
    Board,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store = LocalDiskStore::open(args.store)?;
    let service = BoardService::new(BoardRegistry::seeded(), Box::new(store));

    match args.command {
        Command::Save { name, file } => {
            let script = fs::read_to_string(&file)?;
            let id = service.save_script(&SaveRequest { name, script })?;
            println!("Saved script #{id}.");
        }
        Command::Run { file, name } => {
            let request = match (file, name) {
                (Some(file), None) => RunRequest::inline(fs::read_to_string(&file)?),
                (None, Some(name)) => RunRequest::named(name),
                _ => return Err("give a script file or --name".into()),
            };

            let report = service.run_script(&request)?;
            for line in &report.output {
                println!("{line}");
            }
            if let RunOutcome::Failed { message } = report.outcome {
                eprintln!("Script failed: {message}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List => {
            for row in service.list_scripts()? {
                println!("{:>4}  {}", row.id, row.name);
            }
        }
        Command::Board => {
            println!("{}", serde_json::to_string_pretty(&service.inspect_board())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
