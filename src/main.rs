use accounts_ledger::application::coordinator::TransferCoordinator;
use accounts_ledger::domain::ports::{AccountStoreBox, NotifierBox};
use accounts_ledger::error::Result as LedgerResult;
use accounts_ledger::infrastructure::in_memory::InMemoryAccountStore;
use accounts_ledger::infrastructure::notifier::LoggingNotifier;
use accounts_ledger::interfaces::csv::account_writer::AccountWriter;
use accounts_ledger::interfaces::csv::command_reader::{CommandReader, LedgerCommand};
use accounts_ledger::telemetry::{self, LogFormat};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file (`type, from, to, amount`)
    input: PathBuf,

    /// Log output format. Filtering is controlled by RUST_LOG.
    #[arg(long, value_enum, env = "LEDGER_LOG_FORMAT", default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

async fn apply(coordinator: &TransferCoordinator, command: LedgerCommand) -> LedgerResult<()> {
    match command {
        LedgerCommand::Create(account) => coordinator.create_account(account).await,
        LedgerCommand::Transfer(request) => {
            let receipt = coordinator.transfer(request).await?;
            info!(%receipt, "transfer applied");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);

    let account_store: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let notifier: NotifierBox = Box::new(LoggingNotifier::new());
    let coordinator = TransferCoordinator::new(account_store, notifier);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => {
                if let Err(e) = apply(&coordinator, command).await {
                    error!(error = %e, "Error processing command");
                }
            }
            Err(e) => {
                error!(error = %e, "Error reading command");
            }
        }
    }

    let accounts = coordinator.accounts().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
