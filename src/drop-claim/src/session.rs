use std::sync::Arc;

use alloy_primitives::Address;
use drop_claim_types::Chain;

use crate::errors::SessionError;

/// Process-wide client session, built once at startup from the configured client id.
///
/// Cheap to clone; every collaborator receives the same session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSession {
    client_id: Arc<str>,
}

impl ClientSession {
    pub fn new(client_id: impl AsRef<str>) -> Result<Self, SessionError> {
        let client_id = client_id.as_ref().trim();
        if client_id.is_empty() {
            return Err(SessionError::EmptyClientId);
        }
        Ok(Self {
            client_id: client_id.into(),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Default JSON-RPC endpoint for `chain`, authenticated by the client id.
    pub fn rpc_url(&self, chain: &Chain) -> String {
        format!("https://{}.rpc.thirdweb.com/{}", chain.id, self.client_id)
    }
}

/// A contract on a given chain, as seen through a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractRef {
    pub address: Address,
    pub chain: Chain,
    session: ClientSession,
}

impl ContractRef {
    pub fn new(address: Address, chain: Chain, session: &ClientSession) -> Self {
        Self {
            address,
            chain,
            session: session.clone(),
        }
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }
}
