//! Wallet session adapter. Wraps whatever wallet capability the environment provides and
//! publishes the authenticated [`Session`] to anyone subscribed.

use std::{
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use solana_sdk::signature::Signature;
use tokio::sync::watch;

use crate::{
    logs::{
        log_info,
        log_success,
        log_warning,
    },
    Operation,
    PortalError,
};

mod keypair_wallet;
mod session;

pub use keypair_wallet::{
    default_wallet_path,
    probe_wallet,
    KeypairWallet,
};
pub use session::{
    Identity,
    Session,
    SessionSigner,
};

/// A wallet discovered in the environment.
#[async_trait]
pub trait WalletCapability: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this is a kind of wallet the portal knows how to talk to.
    fn is_supported(&self) -> bool;

    /// With `only_if_trusted`, connects without prompting and fails if the wallet hasn't
    /// approved this client before.
    async fn connect(&self, only_if_trusted: bool) -> Result<Identity, PortalError>;

    fn sign_message(&self, message: &[u8]) -> Result<Signature, PortalError>;
}

#[derive(Clone)]
pub struct WalletSessionAdapter {
    capability: Option<Arc<dyn WalletCapability>>,
    timeout: Duration,
    session: Arc<watch::Sender<Option<Session>>>,
}

impl WalletSessionAdapter {
    pub fn new(capability: Option<Arc<dyn WalletCapability>>, timeout: Duration) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            capability,
            timeout,
            session: Arc::new(session),
        }
    }

    pub fn has_capability(&self) -> bool {
        self.capability.is_some()
    }

    /// Receives every published session change. The current value is marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Tries to connect without prompting the user. Every failure mode, including a missing or
    /// unsupported wallet, is logged and reported as no session.
    pub async fn try_auto_connect(&self) -> Option<Session> {
        let Some(wallet) = &self.capability else {
            log_info("Wallet", "Wallet object not found");
            return None;
        };
        if !wallet.is_supported() {
            log_warning("Wallet", format!("`{}` isn't a supported wallet", wallet.name()));
            return None;
        }

        match self.connect(wallet, true).await {
            Ok(session) => Some(session),
            Err(e) => {
                log_info("Wallet", format!("Silent connection refused: {e}"));
                None
            }
        }
    }

    /// Asks the wallet for an explicit connection. Unlike [`Self::try_auto_connect`], a missing
    /// wallet is an error here since the user asked to connect.
    pub async fn connect_interactive(&self) -> Result<Session, PortalError> {
        let wallet = self.capability.as_ref().ok_or(PortalError::WalletNotFound)?;
        if !wallet.is_supported() {
            return Err(PortalError::UnsupportedWallet(wallet.name().to_string()));
        }
        self.connect(wallet, false).await
    }

    /// Forgets the current session.
    pub fn disconnect(&self) {
        if self.session.send_replace(None).is_some() {
            log_info("Wallet", "Disconnected");
        }
    }

    /// Called when the wallet reports that its active account changed.
    pub fn account_changed(&self, identity: Option<Identity>) {
        let session = match (identity, &self.capability) {
            (Some(identity), Some(wallet)) => Some(Session::new(identity, wallet.clone())),
            _ => None,
        };
        log_info(
            "Wallet",
            match &session {
                Some(session) => format!("Account changed to {}", session.identity()),
                None => "Account removed".to_string(),
            },
        );
        self.session.send_replace(session);
    }

    async fn connect(
        &self,
        wallet: &Arc<dyn WalletCapability>,
        only_if_trusted: bool,
    ) -> Result<Session, PortalError> {
        let identity = tokio::time::timeout(self.timeout, wallet.connect(only_if_trusted))
            .await
            .map_err(|_| PortalError::Timeout {
                operation: Operation::Connect,
                after: self.timeout,
            })??;

        log_success("Connected with public key", identity);
        let session = Session::new(identity, wallet.clone());
        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }
}
