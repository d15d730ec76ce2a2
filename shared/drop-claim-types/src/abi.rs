//! Solidity ABI surface of the Edition Drop `claim` entry point.
//!
//! The orchestrator resolves the live ABI at claim time; this copy is only used for offline
//! calldata encoding and for checking that the positional arguments line up.

use alloy_sol_types::{sol, SolCall};

use crate::params::ClaimParams;

sol! {
    interface IDropERC1155 {
        struct AllowlistProof {
            bytes32[] proof;
            uint256 quantityLimitPerWallet;
            uint256 pricePerToken;
            address currency;
        }

        function claim(
            address receiver,
            uint256 tokenId,
            uint256 quantity,
            address currency,
            uint256 pricePerToken,
            AllowlistProof allowlistProof,
            bytes data
        ) external payable;
    }
}

/// Canonical signature of `claim`, with the allowlist proof flattened to a tuple.
pub const CLAIM_SIGNATURE: &str = IDropERC1155::claimCall::SIGNATURE;

/// 4-byte selector of `claim`.
pub const CLAIM_SELECTOR: [u8; 4] = IDropERC1155::claimCall::SELECTOR;

impl From<&ClaimParams> for IDropERC1155::claimCall {
    fn from(params: &ClaimParams) -> Self {
        let proof = &params.allowlist_proof;
        Self {
            receiver: params.receiver,
            tokenId: params.token_id,
            quantity: params.quantity,
            currency: params.currency,
            pricePerToken: params.price_per_token,
            allowlistProof: IDropERC1155::AllowlistProof {
                proof: proof.proof.clone(),
                quantityLimitPerWallet: proof.quantity_limit_per_wallet,
                pricePerToken: proof.price_per_token,
                currency: proof.currency,
            },
            data: params.data.clone(),
        }
    }
}

/// ABI-encode a `claim` call (selector + arguments).
pub fn encode_claim_calldata(params: &ClaimParams) -> Vec<u8> {
    IDropERC1155::claimCall::from(params).abi_encode()
}
