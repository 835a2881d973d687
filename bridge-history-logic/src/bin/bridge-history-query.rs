use alloy_primitives::Address;
use anyhow::{anyhow, Context, Result};
use blockscout_service_launcher::{database, launcher::ConfigSettings, tracing::init_logs};
use bridge_history_logic::{HistoryDatabase, HistoryLogic, Settings};
use migration::Migrator;
use std::sync::Arc;

const SERVICE_NAME: &str = "bridge_history";

fn usage() -> &'static str {
    "Usage:\n  bridge-history-query claimable <address>\n  bridge-history-query txs <hash>...\n\nEnv:\n  BRIDGE_HISTORY__DATABASE__CONNECT__URL=postgres://...\n  BRIDGE_HISTORY__HISTORY__MAX_HASHES_PER_REQUEST=100   (optional)\n"
}

enum Command {
    Claimable { address: Address },
    Txs { hashes: Vec<String> },
}

fn parse_args() -> Result<Command> {
    let mut args = std::env::args().skip(1);

    let Some(command) = args.next() else {
        return Err(anyhow!("missing command\n\n{}", usage()));
    };

    match command.as_str() {
        "claimable" => {
            let address = args
                .next()
                .ok_or_else(|| anyhow!("claimable requires an address\n\n{}", usage()))?
                .parse::<Address>()
                .context("invalid address")?;
            if let Some(extra) = args.next() {
                return Err(anyhow!("unexpected argument: {extra}\n\n{}", usage()));
            }
            Ok(Command::Claimable { address })
        }
        "txs" => {
            let hashes = args.collect::<Vec<_>>();
            if hashes.is_empty() {
                return Err(anyhow!("txs requires at least one hash\n\n{}", usage()));
            }
            Ok(Command::Txs { hashes })
        }
        "-h" | "--help" => Err(anyhow!("{}", usage())),
        other => Err(anyhow!("unknown command: {other}\n\n{}", usage())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let command = parse_args()?;
    let settings = Settings::build()?;
    init_logs(SERVICE_NAME, &settings.tracing, &settings.jaeger)?;

    let db = Arc::new(database::initialize_postgres::<Migrator>(&settings.database).await?);
    let logic = HistoryLogic::new(HistoryDatabase::new(db), settings.history);

    let output = match command {
        Command::Claimable { address } => {
            serde_json::to_string_pretty(&logic.claimable_txs_by_address(address).await?)?
        }
        Command::Txs { hashes } => {
            serde_json::to_string_pretty(&logic.txs_by_hashes(&hashes).await?)?
        }
    };
    println!("{output}");

    Ok(())
}
