//! Immutable client configuration, built once at startup and handed to the components that need
//! it.

use std::{
    path::Path,
    str::FromStr,
    time::Duration,
};

use anyhow::Context;
use gif_portal_interface::idl::Idl;
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::signature::Keypair;

/// Named Solana clusters the portal can be pointed at.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub const fn url(&self) -> &'static str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub cluster: Cluster,
    pub rpc_url: String,
    /// The portal program.
    pub program_id: Address,
    /// The program-owned account that stores the list, shared by every client session.
    pub base_account: Address,
    pub commitment: CommitmentConfig,
    /// Upper bound on every remote call: wallet connection, fetch, and both writes.
    pub timeout: Duration,
}

impl PortalConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(cluster: Cluster, program_id: Address, base_account: Address) -> Self {
        Self {
            cluster,
            rpc_url: cluster.url().to_string(),
            program_id,
            base_account,
            commitment: CommitmentConfig::processed(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }
}

/// Reads a keypair stored as a JSON array of 64 bytes, the format `solana-keygen` writes.
pub fn load_keypair(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("Keypair file {} isn't a JSON byte array", path.display()))?;
    Keypair::try_from(bytes.as_slice())
        .map_err(|e| anyhow::anyhow!("Keypair file {} is invalid: {e}", path.display()))
}

/// Reads and validates the program's interface-definition document.
pub fn load_idl(path: &Path) -> anyhow::Result<Idl> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read interface definition {}", path.display()))?;
    let idl = Idl::from_str(&contents)?;
    idl.validate()
        .with_context(|| format!("Interface definition {} is incomplete", path.display()))?;
    Ok(idl)
}

pub fn parse_address(value: &str) -> anyhow::Result<Address> {
    Address::from_str(value).map_err(|_| anyhow::anyhow!("`{value}` isn't a valid address"))
}
