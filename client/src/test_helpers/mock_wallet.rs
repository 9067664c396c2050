use std::time::Duration;

use async_trait::async_trait;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    wallet::{
        Identity,
        WalletCapability,
    },
    PortalError,
};

/// A scriptable wallet. Trusted, supported and approving unless told otherwise.
pub struct MockWallet {
    keypair: Keypair,
    supported: bool,
    trusted: bool,
    declines: bool,
    connect_delay: Option<Duration>,
}

impl Default for MockWallet {
    fn default() -> Self {
        Self {
            keypair: Keypair::new(),
            supported: true,
            trusted: true,
            declines: false,
            connect_delay: None,
        }
    }
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wallet the portal doesn't know how to talk to.
    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    /// Refuses silent connections but approves explicit ones.
    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }

    /// Refuses every connection.
    pub fn declining(mut self) -> Self {
        self.declines = true;
        self
    }

    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = Some(delay);
        self
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.keypair.pubkey())
    }
}

#[async_trait]
impl WalletCapability for MockWallet {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<Identity, PortalError> {
        if let Some(delay) = self.connect_delay {
            tokio::time::sleep(delay).await;
        }
        if self.declines || (only_if_trusted && !self.trusted) {
            return Err(PortalError::UserDeclined("User rejected the request".to_string()));
        }
        Ok(self.identity())
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, PortalError> {
        Ok(self.keypair.sign_message(message))
    }
}
