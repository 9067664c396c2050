use std::{
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use gif_portal_client::config::{
    load_idl,
    load_keypair,
    parse_address,
    Cluster,
    PortalConfig,
};
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

#[derive(Debug, Parser)]
#[command(version, about = "Submit GIF links to the on-chain portal and browse the list")]
pub struct Args {
    /// Cluster whose public RPC endpoint to use.
    #[arg(long, env = "GIF_PORTAL_CLUSTER", default_value_t = Cluster::Devnet)]
    pub cluster: Cluster,

    /// RPC endpoint, overriding the cluster's default.
    #[arg(long, env = "GIF_PORTAL_RPC_URL")]
    pub rpc_url: Option<String>,

    /// The program's interface-definition document (JSON).
    #[arg(long, env = "GIF_PORTAL_IDL")]
    pub idl: PathBuf,

    /// Program address, overriding the one in the interface definition.
    #[arg(long, env = "GIF_PORTAL_PROGRAM_ID")]
    pub program_id: Option<String>,

    /// Keypair file of the base account that stores the list.
    #[arg(long, env = "GIF_PORTAL_BASE_KEYPAIR")]
    pub base_keypair: PathBuf,

    /// Wallet keypair file. Defaults to the Solana CLI's keypair.
    #[arg(long, env = "GIF_PORTAL_WALLET")]
    pub wallet: Option<PathBuf>,

    /// Let the wallet connect on startup without an explicit `connect`.
    #[arg(long)]
    pub trusted: bool,

    /// Seconds to wait on any single remote call.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Args {
    /// Builds the client configuration, returning it with the base account's keypair.
    pub fn load_config(&self) -> anyhow::Result<(PortalConfig, Keypair)> {
        let idl = load_idl(&self.idl)?;
        let program_id = match &self.program_id {
            Some(program_id) => parse_address(program_id)?,
            None => idl.program_id()?,
        };
        let base_keypair = load_keypair(&self.base_keypair)?;

        let mut config = PortalConfig::new(self.cluster, program_id, base_keypair.pubkey())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(rpc_url) = &self.rpc_url {
            config = config.with_rpc_url(rpc_url);
        }

        Ok((config, base_keypair))
    }
}
