use std::{
    fmt,
    sync::Arc,
};

use solana_address::Address;
use solana_sdk::{
    signature::Signature,
    signer::{
        Signer,
        SignerError,
    },
};

use crate::wallet::WalletCapability;

/// The authenticated wallet's public address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Identity(Address);

impl Identity {
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for Identity {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identity together with the wallet that vouched for it. Remote writes are signed through the
/// session's wallet.
#[derive(Clone)]
pub struct Session {
    identity: Identity,
    wallet: Arc<dyn WalletCapability>,
}

impl Session {
    pub fn new(identity: Identity, wallet: Arc<dyn WalletCapability>) -> Self {
        Self { identity, wallet }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn wallet(&self) -> &Arc<dyn WalletCapability> {
        &self.wallet
    }

    pub fn signer(&self) -> SessionSigner<'_> {
        SessionSigner(self)
    }
}

/// Sessions are the same session when they carry the same identity.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Session {}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("wallet", &self.wallet.name())
            .finish()
    }
}

/// Adapts a [`Session`] to the SDK's [`Signer`] so it can sign transactions alongside keypairs.
pub struct SessionSigner<'a>(&'a Session);

impl Signer for SessionSigner<'_> {
    fn try_pubkey(&self) -> Result<Address, SignerError> {
        Ok(self.0.identity.address())
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.0
            .wallet
            .sign_message(message)
            .map_err(|e| SignerError::Custom(e.to_string()))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
