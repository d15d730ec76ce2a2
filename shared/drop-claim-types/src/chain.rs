use core::fmt;

/// An EVM network, identified by its EIP-155 chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
}

impl Chain {
    /// Avalanche Fuji C-Chain testnet, home of the demo Edition Drop.
    pub const AVALANCHE_FUJI: Chain = Chain::new(43113, "avalanche-fuji");

    pub const fn new(id: u64, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Look up a chain by id, falling back to an unnamed entry.
    pub fn from_id(id: u64) -> Self {
        match id {
            43113 => Self::AVALANCHE_FUJI,
            43114 => Self::new(id, "avalanche"),
            1 => Self::new(id, "ethereum"),
            11155111 => Self::new(id, "sepolia"),
            8453 => Self::new(id, "base"),
            84532 => Self::new(id, "base-sepolia"),
            _ => Self::new(id, "unknown"),
        }
    }

    pub fn matches(&self, chain_id: Option<u64>) -> bool {
        chain_id == Some(self.id)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::AVALANCHE_FUJI
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
