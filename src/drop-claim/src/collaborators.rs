//! Collaborator abstractions, implemented by real backends in the tooling and by fakes in tests.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use drop_claim_types::{Chain, ContractCall};

use crate::{abi::ContractAbi, session::ClientSession, session::ContractRef};

/// Error type returned by collaborators; any backend error boxes into it with `?`.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type TxHash = B256;

/// An identity owned by the wallet. Only its address is visible to the orchestrator.
pub trait AccountHandle: Send + Sync {
    fn address(&self) -> Address;
}

/// Wallet connection: who is connected, on which chain, and a way to change chain.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    type Account: AccountHandle + Clone;

    fn active_account(&self) -> Option<Self::Account>;

    /// `None` when the wallet has not reported a chain yet.
    fn active_chain_id(&self) -> Option<u64>;

    /// May be rejected by the user or fail in the wallet.
    async fn switch_chain(&self, chain: &Chain) -> Result<(), CollaboratorError>;
}

#[async_trait]
pub trait AbiResolver: Send + Sync {
    /// Fails if the contract is unknown to the resolver's registry or the registry is unreachable.
    async fn resolve_abi(&self, contract: &ContractRef) -> Result<ContractAbi, CollaboratorError>;
}

/// Bridges a wallet identity into a signing handle the call submitter understands.
#[async_trait]
pub trait SignerAdapter<A: AccountHandle>: Send + Sync {
    type Signer: Send;

    async fn signer(
        &self,
        session: &ClientSession,
        chain: &Chain,
        account: &A,
    ) -> Result<Self::Signer, CollaboratorError>;
}

/// Builds callable contract bindings from (address, interface, signer).
pub trait CallSubmitter<S>: Send + Sync {
    type Binding: ContractBinding;

    fn bind(
        &self,
        address: Address,
        abi: &ContractAbi,
        signer: S,
    ) -> Result<Self::Binding, CollaboratorError>;
}

#[async_trait]
pub trait ContractBinding: Send + Sync {
    type Pending: PendingClaim;

    /// Submits `call`; resolves once the transaction is broadcast, not mined.
    async fn invoke(&self, call: ContractCall) -> Result<Self::Pending, CollaboratorError>;
}

/// A broadcast transaction awaiting inclusion.
#[async_trait]
pub trait PendingClaim: Send {
    fn tx_hash(&self) -> TxHash;

    async fn wait(self) -> Result<Confirmation, CollaboratorError>;
}

/// Inclusion details of a confirmed claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}
