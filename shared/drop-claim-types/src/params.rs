use alloy_primitives::{address, Address, Bytes, B256, U256};

/// Reserved address standing in for the chain's native currency.
pub const NATIVE_TOKEN_ADDRESS: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// Name of the Drop entry point invoked by a claim.
pub const CLAIM_FUNCTION: &str = "claim";

/// Number of positional arguments `claim` takes.
pub const CLAIM_ARITY: usize = 7;

/// Allowlist proof passed as the sixth `claim` argument.
///
/// A single zero leaf with a zero per-wallet limit matches an open (public) claim condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowlistProof {
    pub proof: Vec<B256>,
    pub quantity_limit_per_wallet: U256,
    pub price_per_token: U256,
    pub currency: Address,
}

impl AllowlistProof {
    /// Proof accepted by a public claim phase at the given price.
    pub fn open(price_per_token: U256, currency: Address) -> Self {
        Self {
            proof: vec![B256::ZERO],
            quantity_limit_per_wallet: U256::ZERO,
            price_per_token,
            currency,
        }
    }
}

/// Parameters of a single claim. Built once per attempt and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimParams {
    pub receiver: Address,
    pub token_id: U256,
    pub quantity: U256,
    pub currency: Address,
    pub price_per_token: U256,
    pub allowlist_proof: AllowlistProof,
    pub data: Bytes,
}

/// One positional argument of `claim`, tagged with its role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimArg {
    Receiver(Address),
    TokenId(U256),
    Quantity(U256),
    Currency(Address),
    PricePerToken(U256),
    AllowlistProof(AllowlistProof),
    Data(Bytes),
}

impl ClaimArg {
    /// Solidity parameter name, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ClaimArg::Receiver(_) => "receiver",
            ClaimArg::TokenId(_) => "tokenId",
            ClaimArg::Quantity(_) => "quantity",
            ClaimArg::Currency(_) => "currency",
            ClaimArg::PricePerToken(_) => "pricePerToken",
            ClaimArg::AllowlistProof(_) => "allowlistProof",
            ClaimArg::Data(_) => "data",
        }
    }
}

impl ClaimParams {
    /// Positional arguments in the order the Drop contract declares them.
    pub fn call_args(&self) -> [ClaimArg; CLAIM_ARITY] {
        [
            ClaimArg::Receiver(self.receiver),
            ClaimArg::TokenId(self.token_id),
            ClaimArg::Quantity(self.quantity),
            ClaimArg::Currency(self.currency),
            ClaimArg::PricePerToken(self.price_per_token),
            ClaimArg::AllowlistProof(self.allowlist_proof.clone()),
            ClaimArg::Data(self.data.clone()),
        ]
    }

    /// Native value the call must carry: `price * quantity` when paying in the native asset.
    pub fn native_value(&self) -> U256 {
        if self.currency == NATIVE_TOKEN_ADDRESS {
            self.price_per_token.saturating_mul(self.quantity)
        } else {
            U256::ZERO
        }
    }

    pub fn contract_call(&self) -> ContractCall {
        ContractCall {
            function: CLAIM_FUNCTION,
            args: self.call_args(),
            value: self.native_value(),
        }
    }
}

/// A fully assembled call to a named entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    pub function: &'static str,
    pub args: [ClaimArg; CLAIM_ARITY],
    pub value: U256,
}
