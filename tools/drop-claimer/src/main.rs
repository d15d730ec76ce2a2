use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use drop_claim::{ClaimContext, ClaimOrchestrator, ClaimOutcome, ClientSession};
use drop_claim_types::abi::encode_claim_calldata;
use ethers::signers::LocalWallet;
use tracing::info;

mod cli;
mod convert;
mod ethers_backend;
mod logging;
mod receipts;
mod report;
mod resolver;
mod wallet;


use cli::{CalldataCmd, ClaimCmd, Cli, Command};
use ethers_backend::{EthersCallSubmitter, EthersSignerAdapter};
use receipts::{record_claim, ClaimReceipt};
use report::ConsoleReporter;
use resolver::{AbiSource, FileAbiResolver, HttpAbiResolver};
use wallet::{LocalWalletProvider, RpcEndpoints};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Command::Claim(cmd) => run_claim(cmd).await,
        Command::Calldata(cmd) => print_calldata(&cmd),
    }
}

async fn run_claim(cmd: ClaimCmd) -> Result<ExitCode> {
    let session = ClientSession::new(&cmd.client_id).context("invalid CLIENT_ID")?;
    let wallet: LocalWallet = cmd
        .private_key
        .parse()
        .context("invalid PRIVATE_KEY: expected a 32-byte hex string")?;
    let endpoints = RpcEndpoints {
        override_url: cmd.rpc_url.clone(),
    };

    let resolver = match &cmd.abi_path {
        Some(path) => AbiSource::File(FileAbiResolver::new(path)),
        None => AbiSource::Service(HttpAbiResolver::new(
            reqwest::Client::new(),
            cmd.abi_service_url.clone(),
        )),
    };
    let wallet = LocalWalletProvider::new(
        wallet,
        session.clone(),
        endpoints.clone(),
        cmd.wallet_chain_id,
    );
    let receiver = wallet.address();
    let config = cmd.to_config();

    info!(
        account = %receiver,
        contract = %config.contract,
        chain = %config.chain,
        "claiming"
    );

    let ctx = ClaimContext {
        session,
        wallet,
        resolver,
        signer_adapter: EthersSignerAdapter::new(endpoints),
        submitter: EthersCallSubmitter::new(cmd.confirmations),
    };
    let orchestrator = ClaimOrchestrator::new(ctx, config, ConsoleReporter);

    match orchestrator.claim().await {
        ClaimOutcome::Done {
            tx_hash,
            block_number,
        } => {
            if let Some(path) = &cmd.receipts_path {
                let config = orchestrator.config();
                let receipt = ClaimReceipt {
                    chain: config.chain,
                    contract: config.contract,
                    receiver,
                    tx_hash,
                    block_number,
                };
                record_claim(path, &receipt)?;
                info!(path = %path.display(), "recorded claim");
            }
            Ok(ExitCode::SUCCESS)
        }
        ClaimOutcome::Failed { .. } => Ok(ExitCode::FAILURE),
    }
}

fn print_calldata(cmd: &CalldataCmd) -> Result<ExitCode> {
    let params = cmd.params.to_config().params_for(cmd.receiver);
    println!("to:    {}", cmd.params.contract);
    println!("value: {}", params.native_value());
    println!("data:  0x{}", hex::encode(encode_claim_calldata(&params)));
    Ok(ExitCode::SUCCESS)
}
