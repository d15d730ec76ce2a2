use std::time::Duration;

use alloy_primitives::{address, Address, Bytes, U256};
use drop_claim_types::{AllowlistProof, Chain, ClaimParams, NATIVE_TOKEN_ADDRESS};

/// The Edition Drop deployed for the demo on Avalanche Fuji.
pub const DEMO_DROP_ADDRESS: Address = address!("6829f1b35a8b8F00334e6eb9737057C584C73aD5");

/// What to do when the wallet refuses or fails to switch chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchFailurePolicy {
    /// Log and carry on; the submission step then fails on its own if the chain is wrong.
    #[default]
    Continue,
    /// End the attempt with [`crate::ClaimError::SwitchChain`].
    Abort,
}

/// Claim target and parameters.
///
/// Defaults reproduce the demo: one free token `0` of the Fuji Drop, paid in the native asset,
/// under an open allowlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimConfig {
    pub contract: Address,
    pub chain: Chain,
    pub token_id: U256,
    pub quantity: U256,
    pub currency: Address,
    pub price_per_token: U256,
    pub data: Bytes,
    /// `None` sends the open proof priced and denominated like the claim itself.
    pub allowlist_proof: Option<AllowlistProof>,
    pub switch_failure: SwitchFailurePolicy,
    /// `None` waits as long as the call library does.
    pub confirmation_timeout: Option<Duration>,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            contract: DEMO_DROP_ADDRESS,
            chain: Chain::AVALANCHE_FUJI,
            token_id: U256::ZERO,
            quantity: U256::from(1u64),
            currency: NATIVE_TOKEN_ADDRESS,
            price_per_token: U256::ZERO,
            data: Bytes::new(),
            allowlist_proof: None,
            switch_failure: SwitchFailurePolicy::default(),
            confirmation_timeout: None,
        }
    }
}

impl ClaimConfig {
    pub fn params_for(&self, receiver: Address) -> ClaimParams {
        let allowlist_proof = self
            .allowlist_proof
            .clone()
            .unwrap_or_else(|| AllowlistProof::open(self.price_per_token, self.currency));
        ClaimParams {
            receiver,
            token_id: self.token_id,
            quantity: self.quantity,
            currency: self.currency,
            price_per_token: self.price_per_token,
            allowlist_proof,
            data: self.data.clone(),
        }
    }
}
