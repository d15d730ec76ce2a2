//! Orchestration of a single Edition Drop `claim`.
//!
//! The orchestrator owns no chain logic of its own. It sequences calls into injected
//! collaborators:
//! - a wallet provider (active account, active chain, chain switching),
//! - an ABI resolver (contract interface by address + chain),
//! - a signer adapter (wallet identity -> signing handle for the call library),
//! - a call submitter (contract binding, submission, confirmation).
//!
//! Failures are caught at the top of [`ClaimOrchestrator::claim`], logged, and handed to the
//! [`ClaimReporter`]; the caller always gets a [`ClaimOutcome`].

pub mod abi;
pub mod busy;
pub mod collaborators;
pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod report;
pub mod session;
pub mod state;

pub use abi::ContractAbi;
pub use busy::BusyIndicator;
pub use collaborators::{
    AbiResolver, AccountHandle, CallSubmitter, CollaboratorError, Confirmation, ContractBinding,
    PendingClaim, SignerAdapter, TxHash, WalletProvider,
};
pub use config::{ClaimConfig, SwitchFailurePolicy, DEMO_DROP_ADDRESS};
pub use errors::{AbiError, ClaimError, SessionError};
pub use orchestrator::{ClaimContext, ClaimOrchestrator, ClaimOutcome};
pub use report::{ClaimReporter, NoopReporter};
pub use session::{ClientSession, ContractRef};
pub use state::ClaimStage;

pub use drop_claim_types as types;

#[cfg(test)]
mod mock;
