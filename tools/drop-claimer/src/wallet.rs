use std::sync::RwLock;

use alloy_primitives::Address;
use anyhow::anyhow;
use async_trait::async_trait;
use drop_claim::{AccountHandle, ClientSession, CollaboratorError, WalletProvider};
use drop_claim_types::Chain;
use ethers::{
    providers::{Http, JsonRpcClient, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::U256 as EthU256,
};
use tracing::info;

use crate::convert::from_h160;

/// Where JSON-RPC requests for a chain go.
#[derive(Clone, Debug, Default)]
pub struct RpcEndpoints {
    /// Used for every chain when set; otherwise the session's endpoint for the chain.
    pub override_url: Option<String>,
}

impl RpcEndpoints {
    pub fn url_for(&self, session: &ClientSession, chain: &Chain) -> String {
        self.override_url
            .clone()
            .unwrap_or_else(|| session.rpc_url(chain))
    }

}

/// Opens a JSON-RPC provider for a chain.
pub trait RpcConnector: Send + Sync {
    type Transport: JsonRpcClient + Clone + 'static;

    fn connect(
        &self,
        session: &ClientSession,
        chain: &Chain,
    ) -> Result<Provider<Self::Transport>, CollaboratorError>;
}

impl RpcConnector for RpcEndpoints {
    type Transport = Http;

    fn connect(
        &self,
        session: &ClientSession,
        chain: &Chain,
    ) -> Result<Provider<Http>, CollaboratorError> {
        let url = self.url_for(session, chain);
        Ok(Provider::<Http>::try_from(url.as_str())?)
    }
}

/// A connected local-key account.
#[derive(Clone, Debug)]
pub struct LocalAccount(pub LocalWallet);

impl AccountHandle for LocalAccount {
    fn address(&self) -> Address {
        from_h160(self.0.address())
    }
}

/// Wallet backed by a single private key. "Switching chain" means pointing at the target
/// chain's RPC endpoint and checking it really serves that chain.
pub struct LocalWalletProvider<C = RpcEndpoints> {
    account: LocalAccount,
    session: ClientSession,
    endpoints: C,
    chain_id: RwLock<Option<u64>>,
}

impl<C: RpcConnector> LocalWalletProvider<C> {
    pub fn new(
        wallet: LocalWallet,
        session: ClientSession,
        endpoints: C,
        chain_id: Option<u64>,
    ) -> Self {
        Self {
            account: LocalAccount(wallet),
            session,
            endpoints,
            chain_id: RwLock::new(chain_id),
        }
    }

    pub fn address(&self) -> Address {
        self.account.address()
    }
}

#[async_trait]
impl<C: RpcConnector> WalletProvider for LocalWalletProvider<C> {
    type Account = LocalAccount;

    fn active_account(&self) -> Option<LocalAccount> {
        Some(self.account.clone())
    }

    fn active_chain_id(&self) -> Option<u64> {
        self.chain_id.read().ok().and_then(|id| *id)
    }

    async fn switch_chain(&self, chain: &Chain) -> Result<(), CollaboratorError> {
        let provider = self.endpoints.connect(&self.session, chain)?;
        let served = provider.get_chainid().await?;
        if served != EthU256::from(chain.id) {
            return Err(anyhow!("RPC endpoint serves chain {served}, expected {chain}").into());
        }

        let mut active = self
            .chain_id
            .write()
            .map_err(|_| anyhow!("wallet chain state poisoned"))?;
        *active = Some(chain.id);
        info!(%chain, "wallet switched chain");
        Ok(())
    }
}
