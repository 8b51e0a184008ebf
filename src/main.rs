use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mocktest::{
    Config, build_info,
    cli::{Cli, Commands, ConfigCommands, OutputFormat},
    core::Board,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Set up logging based on verbosity.
///
/// The TUI owns the terminal, so interactive runs log to a file instead of
/// stderr.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(filter));

    if cli.is_interactive() {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::options().create(true).append(true).open(&path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
    } else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    tracing::info!(version = %build_info::version_string(), "starting");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // No subcommand = launch TUI
    let Some(command) = cli.command else {
        return mocktest::tui::run(Config::load()?);
    };

    match command {
        Commands::Tui => {
            mocktest::tui::run(Config::load()?)?;
        }

        Commands::Boards { format } => print_boards(format)?,

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigCommands::Path => {
                let path = Config::config_path()?;
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn print_boards(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let boards: Vec<_> = Board::ALL.iter().map(|b| b.info()).collect();
            println!("{}", serde_json::to_string_pretty(&boards)?);
        }
        OutputFormat::Table => {
            println!("{:<16} {:<46} Grades", "Board", "Full name");
            println!("{}", "-".repeat(80));
            for board in Board::ALL {
                let info = board.info();
                println!("{:<16} {:<46} {}", info.name, info.full_name, info.grades);
            }
        }
    }
    Ok(())
}
