//! Shared types for Edition Drop claims.
//!
//! Used by the claim orchestrator (parameter assembly) and by the tooling that binds the
//! positional arguments to a concrete contract-call library.

pub mod abi;
pub mod chain;
pub mod params;

pub use chain::Chain;
pub use params::{
    AllowlistProof, ClaimArg, ClaimParams, ContractCall, CLAIM_ARITY, CLAIM_FUNCTION,
    NATIVE_TOKEN_ADDRESS,
};
