use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finflow::cli::Shell;
use finflow::config::{paths::FinFlowPaths, settings::Settings};
use finflow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finflow",
    version,
    about = "Interactive personal-finance ledger for the terminal",
    long_about = "FinFlow is an interactive personal-finance ledger. Register an \
                  account, record income and expenses by category, set monthly \
                  budgets, and review or export your statistics."
)]
struct Cli {
    /// Override the data directory (default: platform config dir)
    #[arg(long, env = "FINFLOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FinFlowPaths::with_base_dir(dir),
        None => FinFlowPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Reports:         {}", paths.reports_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            let input = BufReader::new(stdin.lock());
            let output = std::io::stdout();

            let mut shell =
                Shell::new(storage, settings, input, output).with_interactive(interactive);
            shell.run()?;
        }
    }

    Ok(())
}
