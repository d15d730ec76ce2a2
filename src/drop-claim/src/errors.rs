use std::time::Duration;

use thiserror::Error;

use crate::collaborators::{CollaboratorError, TxHash};

/// Errors ending a claim attempt.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("no active account connected")]
    NoActiveAccount,

    #[error("failed to switch wallet to chain {chain_id}: {source}")]
    SwitchChain {
        chain_id: u64,
        #[source]
        source: CollaboratorError,
    },

    #[error("failed to resolve contract ABI: {0}")]
    AbiResolution(#[source] CollaboratorError),

    #[error("failed to create signer: {0}")]
    Signer(#[source] CollaboratorError),

    #[error("failed to bind contract: {0}")]
    Binding(#[source] CollaboratorError),

    #[error("claim submission failed: {0}")]
    Submission(#[source] CollaboratorError),

    #[error("transaction {tx_hash} failed to confirm: {source}")]
    Confirmation {
        tx_hash: TxHash,
        #[source]
        source: CollaboratorError,
    },

    #[error("transaction {tx_hash} not confirmed within {after:?}")]
    ConfirmationTimeout { tx_hash: TxHash, after: Duration },

    #[error("claim settled without a transaction hash")]
    MissingHash,
}

/// Errors building a client session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("client id must not be empty")]
    EmptyClientId,
}

/// Errors interpreting a resolved contract interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("contract ABI must be a JSON array of entries")]
    NotAnArray,
    #[error("ABI entry {0} is not an object")]
    MalformedEntry(usize),
}
