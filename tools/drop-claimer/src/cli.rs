use std::{path::PathBuf, str::FromStr, time::Duration};

use alloy_primitives::{Address, Bytes, B256, U256};
use clap::{Args, Parser, Subcommand};
use drop_claim::{ClaimConfig, SwitchFailurePolicy, DEMO_DROP_ADDRESS};
use drop_claim_types::{AllowlistProof, Chain, NATIVE_TOKEN_ADDRESS};

/// Claim a token from an Edition Drop contract.
///
/// The wallet is a local private key; the contract ABI is resolved from the contract metadata
/// service (or a local file), and the call is signed and broadcast with ethers-rs.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Switch to the Drop's chain if needed, then submit one claim and wait for it to be mined.
    Claim(ClaimCmd),
    /// Print the ABI-encoded `claim` calldata for a receiver. No network access.
    Calldata(CalldataCmd),
}

#[derive(Args, Debug)]
pub struct ClaimCmd {
    #[command(flatten)]
    pub params: ParamsArgs,

    /// Client id for the RPC and contract metadata services.
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: String,

    /// Private key of the claiming wallet (hex string, 0x...).
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// JSON-RPC endpoint to use instead of the one derived from the client id.
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Chain the wallet is currently on. Unset means unknown, which always triggers a switch.
    #[arg(long, env = "WALLET_CHAIN_ID")]
    pub wallet_chain_id: Option<u64>,

    /// Base URL of the contract metadata service used to resolve the ABI.
    #[arg(long, env = "ABI_SERVICE_URL", default_value = "https://contract.thirdweb.com")]
    pub abi_service_url: String,

    /// Read the ABI from a JSON file (bare array or build artifact) instead of the service.
    #[arg(long)]
    pub abi_path: Option<PathBuf>,

    /// Blocks to wait for after inclusion.
    #[arg(long, default_value_t = 1)]
    pub confirmations: usize,

    /// Give up waiting for confirmation after this many seconds.
    #[arg(long)]
    pub confirmation_timeout_secs: Option<u64>,

    /// Stop if the wallet fails to switch chain instead of attempting the claim anyway.
    #[arg(long)]
    pub abort_on_switch_failure: bool,

    /// Append confirmed claims to this JSON file (eg, claims.fuji.json).
    #[arg(long)]
    pub receipts_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CalldataCmd {
    #[command(flatten)]
    pub params: ParamsArgs,

    /// Address receiving the claimed tokens.
    #[arg(long)]
    pub receiver: Address,
}

/// Claim target and parameters. Defaults are one free token `0` of the demo Drop on Fuji.
#[derive(Args, Debug, Clone)]
pub struct ParamsArgs {
    #[arg(long, default_value_t = DEMO_DROP_ADDRESS)]
    pub contract: Address,

    #[arg(long, default_value_t = Chain::AVALANCHE_FUJI.id)]
    pub chain_id: u64,

    #[arg(long, default_value_t = U256::ZERO)]
    pub token_id: U256,

    #[arg(long, default_value_t = U256::from(1u64))]
    pub quantity: U256,

    /// Payment currency; the default is the native-asset sentinel.
    #[arg(long, default_value_t = NATIVE_TOKEN_ADDRESS)]
    pub currency: Address,

    /// Price per token in the currency's smallest unit.
    #[arg(long, default_value_t = U256::ZERO)]
    pub price_per_token: U256,

    /// Opaque extra data passed to the contract (hex).
    #[arg(long, default_value = "0x", value_parser = parse_hex_bytes)]
    pub data: Bytes,

    /// Merkle proof leaf for an allowlisted phase; repeat for each element.
    #[arg(long = "proof")]
    pub proof: Vec<B256>,

    /// Per-wallet limit committed to by the allowlist proof.
    #[arg(long, requires = "proof")]
    pub quantity_limit_per_wallet: Option<U256>,
}

/// Hex-decodes the argument. Without this clap would pick `Bytes: From<String>` and send the
/// text itself.
fn parse_hex_bytes(s: &str) -> Result<Bytes, <Bytes as FromStr>::Err> {
    s.parse()
}

impl ParamsArgs {
    pub fn chain(&self) -> Chain {
        Chain::from_id(self.chain_id)
    }

    pub fn to_config(&self) -> ClaimConfig {
        let allowlist_proof = (!self.proof.is_empty()).then(|| AllowlistProof {
            proof: self.proof.clone(),
            quantity_limit_per_wallet: self.quantity_limit_per_wallet.unwrap_or(U256::ZERO),
            price_per_token: self.price_per_token,
            currency: self.currency,
        });
        ClaimConfig {
            contract: self.contract,
            chain: self.chain(),
            token_id: self.token_id,
            quantity: self.quantity,
            currency: self.currency,
            price_per_token: self.price_per_token,
            data: self.data.clone(),
            allowlist_proof,
            ..ClaimConfig::default()
        }
    }
}

impl ClaimCmd {
    pub fn to_config(&self) -> ClaimConfig {
        ClaimConfig {
            switch_failure: if self.abort_on_switch_failure {
                SwitchFailurePolicy::Abort
            } else {
                SwitchFailurePolicy::Continue
            },
            confirmation_timeout: self.confirmation_timeout_secs.map(Duration::from_secs),
            ..self.params.to_config()
        }
    }
}
