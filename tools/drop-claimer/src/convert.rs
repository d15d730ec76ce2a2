//! Conversions between the alloy value types used by the orchestrator and ethers-rs types.

use alloy_primitives::{Address, B256, U256};
use drop_claim_types::{AllowlistProof, ClaimArg};
use ethers::{
    abi::Token,
    types::{H160, H256, U256 as EthU256},
};

pub fn to_h160(address: Address) -> H160 {
    H160::from_slice(address.as_slice())
}

pub fn from_h160(address: H160) -> Address {
    Address::from(address.0)
}

pub fn to_eth_u256(value: U256) -> EthU256 {
    EthU256::from_big_endian(&value.to_be_bytes::<32>())
}

pub fn from_h256(hash: H256) -> B256 {
    B256::from(hash.0)
}

fn allowlist_token(proof: &AllowlistProof) -> Token {
    Token::Tuple(vec![
        Token::Array(
            proof
                .proof
                .iter()
                .map(|leaf| Token::FixedBytes(leaf.to_vec()))
                .collect(),
        ),
        Token::Uint(to_eth_u256(proof.quantity_limit_per_wallet)),
        Token::Uint(to_eth_u256(proof.price_per_token)),
        Token::Address(to_h160(proof.currency)),
    ])
}

pub fn arg_token(arg: &ClaimArg) -> Token {
    match arg {
        ClaimArg::Receiver(address) | ClaimArg::Currency(address) => {
            Token::Address(to_h160(*address))
        }
        ClaimArg::TokenId(value) | ClaimArg::Quantity(value) | ClaimArg::PricePerToken(value) => {
            Token::Uint(to_eth_u256(*value))
        }
        ClaimArg::AllowlistProof(proof) => allowlist_token(proof),
        ClaimArg::Data(data) => Token::Bytes(data.to_vec()),
    }
}

/// Positional arguments as ethers tokens, in call order.
pub fn call_tokens(args: &[ClaimArg]) -> Vec<Token> {
    args.iter().map(arg_token).collect()
}
