use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        Arc,
    },
};

use async_trait::async_trait;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    config::load_keypair,
    logs::{
        log_info,
        log_warning,
    },
    wallet::{
        Identity,
        WalletCapability,
    },
    PortalError,
};

/// A wallet backed by a local keypair file.
///
/// Silent connection only succeeds once the wallet trusts this client, either because it was
/// marked trusted up front or because the user approved an interactive connection earlier in the
/// process.
pub struct KeypairWallet {
    keypair: Keypair,
    trusted: AtomicBool,
}

impl KeypairWallet {
    pub const NAME: &'static str = "keypair-file";

    pub fn new(keypair: Keypair, trusted: bool) -> Self {
        Self {
            keypair,
            trusted: AtomicBool::new(trusted),
        }
    }

    pub fn from_file(path: &Path, trusted: bool) -> anyhow::Result<Self> {
        Ok(Self::new(load_keypair(path)?, trusted))
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WalletCapability for KeypairWallet {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_supported(&self) -> bool {
        true
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<Identity, PortalError> {
        if only_if_trusted && !self.is_trusted() {
            return Err(PortalError::UserDeclined(
                "Wallet hasn't approved this client yet".to_string(),
            ));
        }
        self.trusted.store(true, Ordering::Relaxed);
        Ok(Identity::new(self.keypair.pubkey()))
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, PortalError> {
        self.keypair
            .try_sign_message(message)
            .map_err(|e| PortalError::Signing(e.to_string()))
    }
}

/// `$HOME/.config/solana/id.json`, where the Solana CLI keeps its default keypair.
pub fn default_wallet_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("solana").join("id.json"))
}

/// Looks for a usable wallet in the environment. Anything that goes wrong here means there is no
/// wallet, not that the client failed.
pub fn probe_wallet(path: Option<&Path>, trusted: bool) -> Option<Arc<dyn WalletCapability>> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_wallet_path) else {
        log_info("Wallet", "No wallet path given and $HOME isn't set");
        return None;
    };

    if !path.exists() {
        log_info("Wallet", format!("No wallet found at {}", path.display()));
        return None;
    }

    match KeypairWallet::from_file(&path, trusted) {
        Ok(wallet) => Some(Arc::new(wallet)),
        Err(e) => {
            log_warning("Wallet", format!("Ignoring unusable wallet: {e:#}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_connect_needs_trust() {
        let wallet = KeypairWallet::new(Keypair::new(), false);
        assert!(matches!(
            wallet.connect(true).await,
            Err(PortalError::UserDeclined(_))
        ));

        // An interactive approval makes later silent connections succeed.
        let identity = wallet.connect(false).await.unwrap();
        assert!(wallet.is_trusted());
        assert_eq!(wallet.connect(true).await.unwrap(), identity);
    }

    #[test]
    fn signs_with_its_keypair() {
        let keypair = Keypair::new();
        let pubkey = keypair.pubkey();
        let wallet = KeypairWallet::new(keypair, true);
        let signature = wallet.sign_message(b"gif").unwrap();
        assert!(signature.verify(pubkey.as_ref(), b"gif"));
    }

    #[test]
    fn probe_missing_file_is_absence() {
        assert!(probe_wallet(Some(Path::new("/nonexistent/gif-portal/id.json")), true).is_none());
    }

    #[test]
    fn probe_garbage_file_is_absence() -> anyhow::Result<()> {
        let path = std::env::temp_dir()
            .join(format!("gif-portal-garbage-{}.json", std::process::id()));
        std::fs::write(&path, "not a keypair")?;
        let probed = probe_wallet(Some(&path), true);
        std::fs::remove_file(&path)?;
        assert!(probed.is_none());
        Ok(())
    }
}
