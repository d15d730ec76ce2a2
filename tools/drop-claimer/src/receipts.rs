//! Optional JSON log of confirmed claims.

use std::{fs, io::Write, path::Path};

use alloy_primitives::{Address, B256};
use anyhow::{Context, Result};
use drop_claim_types::Chain;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// One confirmed claim, as handed over by the `claim` command.
#[derive(Debug, Clone)]
pub struct ClaimReceipt {
    pub chain: Chain,
    pub contract: Address,
    pub receiver: Address,
    pub tx_hash: B256,
    pub block_number: Option<u64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClaimsLog {
    #[serde(default)]
    network: String,
    #[serde(default)]
    chain_id: u64,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    claims: Vec<LoggedClaim>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoggedClaim {
    contract: String,
    receiver: String,
    tx_hash: String,
    block_number: Option<u64>,
    claimed_at: String,
}

impl ClaimsLog {
    fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err).context(format!("cannot read {}", path.display())),
        };
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&raw).with_context(|| format!("{} is not a claims log", path.display()))
    }

    fn push(&mut self, receipt: &ClaimReceipt, at: String) {
        self.network = receipt.chain.name.to_string();
        self.chain_id = receipt.chain.id;
        self.claims.push(LoggedClaim {
            contract: receipt.contract.to_string(),
            receiver: receipt.receiver.to_string(),
            tx_hash: receipt.tx_hash.to_string(),
            block_number: receipt.block_number,
            claimed_at: at.clone(),
        });
        self.updated_at = at;
    }

    /// Replace `path` in one rename so readers never see a half-written log.
    fn store(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("cannot stage a file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut staged, self).context("cannot encode claims log")?;
        staged.flush()?;
        staged
            .persist(path)
            .with_context(|| format!("cannot replace {}", path.display()))?;
        Ok(())
    }
}

/// Append `receipt` to the log at `path`, creating it on first use.
pub fn record_claim(path: &Path, receipt: &ClaimReceipt) -> Result<()> {
    let at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let mut log = ClaimsLog::load(path)?;
    log.push(receipt, at);
    log.store(path)
}
