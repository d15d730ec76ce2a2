//! Signing and submission through ethers-rs.

use std::sync::Arc;

use alloy_primitives::Address;
use anyhow::anyhow;
use async_trait::async_trait;
use drop_claim::{
    CallSubmitter, ClientSession, CollaboratorError, Confirmation, ContractAbi, ContractBinding,
    PendingClaim, SignerAdapter, TxHash,
};
use drop_claim_types::{Chain, ContractCall};
use ethers::{
    abi::{Abi, Token},
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, JsonRpcClient, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{H256, U64},
};

use crate::{
    convert::{call_tokens, from_h256, to_eth_u256, to_h160},
    wallet::{LocalAccount, RpcConnector, RpcEndpoints},
};

pub type EthersClient<P = Http> = SignerMiddleware<Provider<P>, LocalWallet>;

/// Wraps the connected local key as an ethers signer middleware for the target chain.
pub struct EthersSignerAdapter<C = RpcEndpoints> {
    endpoints: C,
}

impl<C: RpcConnector> EthersSignerAdapter<C> {
    pub fn new(endpoints: C) -> Self {
        Self { endpoints }
    }
}

#[async_trait]
impl<C: RpcConnector> SignerAdapter<LocalAccount> for EthersSignerAdapter<C> {
    type Signer = Arc<EthersClient<C::Transport>>;

    async fn signer(
        &self,
        session: &ClientSession,
        chain: &Chain,
        account: &LocalAccount,
    ) -> Result<Arc<EthersClient<C::Transport>>, CollaboratorError> {
        let provider = self.endpoints.connect(session, chain)?;
        let wallet = account.0.clone().with_chain_id(chain.id);
        Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
    }
}

pub struct EthersCallSubmitter {
    confirmations: usize,
}

impl EthersCallSubmitter {
    pub fn new(confirmations: usize) -> Self {
        Self { confirmations }
    }
}

impl<P: JsonRpcClient + Clone + 'static> CallSubmitter<Arc<EthersClient<P>>> for EthersCallSubmitter {
    type Binding = EthersBinding<P>;

    fn bind(
        &self,
        address: Address,
        abi: &ContractAbi,
        signer: Arc<EthersClient<P>>,
    ) -> Result<EthersBinding<P>, CollaboratorError> {
        let abi: Abi = serde_json::from_value(abi.as_json().clone())?;
        let provider = signer.provider().clone();
        Ok(EthersBinding {
            contract: Contract::new(to_h160(address), abi, signer),
            provider,
            confirmations: self.confirmations,
        })
    }
}

pub struct EthersBinding<P: JsonRpcClient = Http> {
    contract: Contract<EthersClient<P>>,
    provider: Provider<P>,
    confirmations: usize,
}

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> ContractBinding for EthersBinding<P> {
    type Pending = EthersPending<P>;

    async fn invoke(&self, call: ContractCall) -> Result<EthersPending<P>, CollaboratorError> {
        let args = Token::Tuple(call_tokens(&call.args));
        let method = self
            .contract
            .method::<_, ()>(call.function, args)?
            .value(to_eth_u256(call.value));
        let tx_hash = method.send().await?.tx_hash();
        Ok(EthersPending::new(
            tx_hash,
            self.provider.clone(),
            self.confirmations,
        ))
    }
}

/// A sent claim, awaited by polling its receipt.
pub struct EthersPending<P: JsonRpcClient = Http> {
    tx_hash: H256,
    provider: Provider<P>,
    confirmations: usize,
}

impl<P: JsonRpcClient> EthersPending<P> {
    pub fn new(tx_hash: H256, provider: Provider<P>, confirmations: usize) -> Self {
        Self {
            tx_hash,
            provider,
            confirmations,
        }
    }
}

#[async_trait]
impl<P: JsonRpcClient + 'static> PendingClaim for EthersPending<P> {
    fn tx_hash(&self) -> TxHash {
        from_h256(self.tx_hash)
    }

    async fn wait(self) -> Result<Confirmation, CollaboratorError> {
        let receipt = PendingTransaction::new(self.tx_hash, &self.provider)
            .confirmations(self.confirmations)
            .await?
            .ok_or_else(|| anyhow!("transaction {:?} dropped before inclusion", self.tx_hash))?;
        if receipt.status == Some(U64::zero()) {
            return Err(anyhow!("transaction {:?} reverted", self.tx_hash).into());
        }
        Ok(Confirmation {
            tx_hash: from_h256(receipt.transaction_hash),
            block_number: receipt.block_number.map(|block| block.as_u64()),
        })
    }
}
