use std::path::PathBuf;

use async_trait::async_trait;
use drop_claim::{AbiResolver, CollaboratorError, ContractAbi, ContractRef};
use serde_json::Value;
use tracing::debug;

/// Fetches verified ABIs from the contract metadata service.
pub struct HttpAbiResolver {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAbiResolver {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn abi_url(&self, contract: &ContractRef) -> String {
        format!(
            "{}/abi/{}/{}",
            self.base_url.trim_end_matches('/'),
            contract.chain.id,
            contract.address
        )
    }
}

#[async_trait]
impl AbiResolver for HttpAbiResolver {
    async fn resolve_abi(&self, contract: &ContractRef) -> Result<ContractAbi, CollaboratorError> {
        let url = self.abi_url(contract);
        debug!(%url, "resolving contract ABI");
        let body: Value = self
            .http
            .get(&url)
            .header("x-client-id", contract.session().client_id())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ContractAbi::from_json(body)?)
    }
}

/// Reads the ABI from a local JSON file (bare array, or a Foundry/Hardhat artifact).
pub struct FileAbiResolver {
    path: PathBuf,
}

impl FileAbiResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AbiResolver for FileAbiResolver {
    async fn resolve_abi(&self, _contract: &ContractRef) -> Result<ContractAbi, CollaboratorError> {
        debug!(path = %self.path.display(), "loading contract ABI");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let body: Value = serde_json::from_str(&raw)?;
        Ok(ContractAbi::from_json(body)?)
    }
}

/// The resolver selected on the command line.
pub enum AbiSource {
    Service(HttpAbiResolver),
    File(FileAbiResolver),
}

#[async_trait]
impl AbiResolver for AbiSource {
    async fn resolve_abi(&self, contract: &ContractRef) -> Result<ContractAbi, CollaboratorError> {
        match self {
            AbiSource::Service(resolver) => resolver.resolve_abi(contract).await,
            AbiSource::File(resolver) => resolver.resolve_abi(contract).await,
        }
    }
}
