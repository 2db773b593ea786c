use clap::{Parser, Subcommand};
use compliance_ledger::application::engine::{ComplianceEngine, Outcome};
use compliance_ledger::domain::evaluator::{ComplianceEvaluator, DEFAULT_AMOUNT_LIMIT};
use compliance_ledger::domain::registry::EntityRegistry;
use compliance_ledger::domain::transaction::TransactionRequest;
use compliance_ledger::infrastructure::in_memory::InMemoryLedger;
use compliance_ledger::interfaces::csv::ledger_writer::LedgerWriter;
use compliance_ledger::interfaces::csv::transaction_reader::TransactionReader;
use compliance_ledger::interfaces::{http, simulation};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Entity registry as a JSON array. Defaults to the built-in registry.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Amount above which a transaction is rejected.
    #[arg(long, global = true, default_value_t = DEFAULT_AMOUNT_LIMIT)]
    amount_limit: Decimal,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a CSV of transactions, recording only compliant ones.
    Process {
        /// Input transactions CSV file
        input: PathBuf,
    },
    /// Replay transactions through the simulation path, recording every verdict.
    Simulate {
        /// Transactions CSV file. Uses the demo batch when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pause before each transaction, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Start the HTTP service.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, env = "PORT", default_value_t = 4000)]
        port: u16,

        /// Skip the demo simulation that otherwise runs once the server is listening.
        #[arg(long)]
        no_simulate: bool,

        /// Pause between simulated transactions, in milliseconds.
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let registry = match &cli.registry {
        Some(path) => EntityRegistry::from_path(path).into_diagnostic()?,
        None => EntityRegistry::reference(),
    };
    info!(entities = registry.len(), limit = %cli.amount_limit, "registry loaded");

    let evaluator =
        ComplianceEvaluator::new(Arc::new(registry)).with_amount_limit(cli.amount_limit);
    let engine = ComplianceEngine::new(evaluator, Box::new(InMemoryLedger::new()));

    match cli.command {
        Command::Process { input } => {
            for request in read_requests(&input)? {
                if let Err(e) = process_one(&engine, request).await {
                    eprintln!("Error processing transaction: {}", e);
                }
            }
            write_ledger(&engine).await
        }
        Command::Simulate { input, delay_ms } => {
            let requests = match input {
                Some(path) => read_requests(&path)?,
                None => simulation::reference_transactions(),
            };
            simulation::run(&engine, requests, Duration::from_millis(delay_ms))
                .await
                .into_diagnostic()?;
            write_ledger(&engine).await
        }
        Command::Serve {
            host,
            port,
            no_simulate,
            delay_ms,
        } => {
            let engine = Arc::new(engine);
            let listener = TcpListener::bind((host.as_str(), port))
                .await
                .into_diagnostic()?;

            if !no_simulate {
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    let delay = Duration::from_millis(delay_ms);
                    let requests = simulation::reference_transactions();
                    if let Err(e) = simulation::run(&engine, requests, delay).await {
                        error!(error = %e, "simulation failed");
                    }
                });
            }

            http::serve(listener, engine).await.into_diagnostic()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("compliance_ledger=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads every well-formed row; malformed rows are reported and skipped.
fn read_requests(path: &Path) -> Result<Vec<TransactionRequest>> {
    let file = File::open(path).into_diagnostic()?;
    let reader = TransactionReader::new(file).into_diagnostic()?;
    let mut requests = Vec::new();
    for result in reader.transactions() {
        match result {
            Ok(request) => requests.push(request),
            Err(e) => eprintln!("Error reading transaction: {}", e),
        }
    }
    Ok(requests)
}

async fn process_one(
    engine: &ComplianceEngine,
    request: TransactionRequest,
) -> compliance_ledger::error::Result<()> {
    let sender = request.sender.clone();
    let entity = request.entity_id.clone();
    if let Outcome::Rejected(reason) = engine.process_transaction(request).await? {
        eprintln!(
            "Rejected transaction from {} ({}): {} - {}",
            sender,
            entity,
            reason,
            reason.description()
        );
    }
    Ok(())
}

async fn write_ledger(engine: &ComplianceEngine) -> Result<()> {
    let entries = engine.transactions().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = LedgerWriter::new(stdout.lock());
    writer.write_entries(entries).into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_simulates_by_default() {
        let cli = Cli::try_parse_from(["compliance-ledger", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve {
                no_simulate: false,
                delay_ms: 1000,
                ..
            }
        ));
    }

    #[test]
    fn test_serve_simulation_can_be_disabled() {
        let cli =
            Cli::try_parse_from(["compliance-ledger", "serve", "--no-simulate", "--port", "0"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve {
                no_simulate: true,
                port: 0,
                ..
            }
        ));
    }
}
