use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::catalog::{self, Category};
use design_patterns::{logger, PlaygroundConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "playground", about = "Run small examples of classic design patterns")]
struct Cli {
    /// TOML file with default settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log lookups and runs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print headers and listings without ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Skip the "=== Title ===" line before each example
    #[arg(long, global = true)]
    no_headers: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List every pattern
    List {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Run one or more patterns by name
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run every pattern (or every pattern in a category)
    All {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        tracing::error!("{}", e);
        eprintln!("{} {}", "error:".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("  {}", hint.yellow());
        }
        process::exit(1);
    }
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PlaygroundConfig::load(path)?,
        None => PlaygroundConfig::default(),
    };
    tracing::debug!(?config, "effective config");

    if cli.no_color || !config.use_colors() {
        colored::control::set_override(false);
    }
    let headers = config.headers && !cli.no_headers;

    match resolve_command(cli.command, &config) {
        Command::List { category } => list(out, category.or(config.category)),
        Command::Run { names } => {
            // Resolve every name first so a typo fails before any output.
            let patterns = names
                .iter()
                .map(|name| catalog::find(name))
                .collect::<Result<Vec<_>>>()?;
            for pattern in patterns {
                catalog::run_pattern(pattern.as_ref(), out, headers)?;
            }
            Ok(())
        }
        Command::All { category } => {
            let count = catalog::run_all(out, category.or(config.category), headers)?;
            tracing::info!(count, "finished");
            Ok(())
        }
    }
}

/// Without a subcommand, the config decides what to run.
fn resolve_command(command: Option<Command>, config: &PlaygroundConfig) -> Command {
    command.unwrap_or_else(|| {
        if config.patterns.is_empty() {
            Command::All {
                category: config.category,
            }
        } else {
            Command::Run {
                names: config.patterns.clone(),
            }
        }
    })
}

fn list(out: &mut dyn Write, category: Option<Category>) -> Result<()> {
    let patterns = catalog::by_category(category);
    let width = patterns.iter().map(|p| p.name().len()).max().unwrap_or(0);
    for pattern in patterns {
        writeln!(
            out,
            "{}  {:<13}  {}",
            format!("{:<width$}", pattern.name()).green(),
            pattern.category().to_string(),
            pattern.summary(),
        )?;
    }
    Ok(())
}
