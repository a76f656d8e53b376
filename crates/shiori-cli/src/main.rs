use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use shiori_core::domain::{DomainId, DomainRegistry};
use shiori_infrastructure::ConfigService;

mod commands;
mod logging;
mod view;

#[derive(Parser)]
#[command(name = "shiori")]
#[command(about = "Shiori - rule-based knowledge base and dataset Q&A", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Domain to start in (defaults to the configured one)
        #[arg(short, long, value_parser = parse_domain)]
        domain: Option<DomainId>,
        /// Skip the simulated processing delays
        #[arg(long)]
        no_delay: bool,
    },
    /// Ask a single question and print the answer
    Ask {
        #[arg(short, long, value_parser = parse_domain)]
        domain: Option<DomainId>,
        /// Print the answer, match outcome and rendered blocks as JSON
        #[arg(long)]
        json: bool,
        #[arg(long)]
        no_delay: bool,
        /// Question text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// List rule tables in priority order
    Rules {
        #[arg(short, long, value_parser = parse_domain)]
        domain: Option<DomainId>,
    },
    /// Render markup from a file (or stdin) as blocks
    Render {
        file: Option<PathBuf>,
        /// Print blocks with their source lines as JSON
        #[arg(long)]
        json: bool,
    },
    /// List domains, suggestions and the document catalog
    Domains,
}

fn parse_domain(value: &str) -> Result<DomainId, String> {
    DomainId::parse(value).map_err(|_| {
        let known: Vec<String> = DomainId::all().map(|d| d.to_string()).collect();
        format!("unknown domain '{}' (expected one of: {})", value, known.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = ConfigService::new()?;
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.config_path().display()))?;

    let _log_guard = match logging::init(&config.logging.filter) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", format!("Logging disabled: {:#}", e).yellow());
            None
        }
    };

    let registry = Arc::new(DomainRegistry::builtin().context("Failed to build rule registry")?);

    match cli.command {
        Commands::Chat { domain, no_delay } => {
            let domain = domain.unwrap_or(config.session.default_domain);
            commands::chat::run(registry, &config, domain, no_delay).await?
        }
        Commands::Ask {
            domain,
            json,
            no_delay,
            question,
        } => {
            let domain = domain.unwrap_or(config.session.default_domain);
            commands::ask::run(registry, &config, domain, &question.join(" "), json, no_delay)
                .await?
        }
        Commands::Rules { domain } => commands::rules::run(&registry, domain),
        Commands::Render { file, json } => commands::render::run(file.as_deref(), json)?,
        Commands::Domains => commands::domains::run(&registry),
    }

    Ok(())
}
