use crate::{
    remote::ListEntry,
    wallet::{
        Identity,
        Session,
    },
    PortalError,
};

/// Where the controller is in the account lifecycle. Each connected variant carries the session
/// it was reached with, and only [`SyncState::Ready`] carries a list.
#[derive(Clone, Debug, Default, Eq, PartialEq, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SyncState {
    #[default]
    Disconnected,
    Connecting,
    /// Connected, but the base account hasn't been read yet or the last read failed.
    Unsynced(Session),
    /// Connected, and the base account doesn't exist.
    Uninitialized(Session),
    /// Connected, with the list as of the last successful read.
    Ready {
        session: Session,
        entries: Vec<ListEntry>,
    },
}

impl SyncState {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Disconnected | Self::Connecting => None,
            Self::Unsynced(session) | Self::Uninitialized(session) => Some(session),
            Self::Ready { session, .. } => Some(session),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session().map(Session::identity)
    }

    pub fn entries(&self) -> Option<&[ListEntry]> {
        match self {
            Self::Ready { entries, .. } => Some(entries),
            _ => None,
        }
    }
}

/// Commands the presentation layer sends to the controller. They are handled one at a time, in
/// the order received.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    ConnectSilently,
    ConnectInteractive,
    /// Mirrors the input field's contents.
    EditInput(String),
    Submit(String),
    InitializeAccount,
    /// Re-reads the base account, e.g. after a failed fetch.
    Refresh,
    Disconnect,
}

/// Everything the presentation layer needs to render.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub state: SyncState,
    pub last_error: Option<PortalError>,
    pub input: String,
    /// Link whose submission is in flight.
    pub pending: Option<String>,
    /// Number of remote operations issued so far.
    pub op_seq: u64,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use solana_address::Address;
    use solana_sdk::signature::Keypair;

    use super::*;
    use crate::wallet::KeypairWallet;

    #[test]
    fn names_and_accessors() {
        let session = Session::new(
            Identity::new(Address::new_unique()),
            Arc::new(KeypairWallet::new(Keypair::new(), true)),
        );
        let entries = vec![ListEntry::new("a", Address::new_unique())];

        assert_eq!(SyncState::Disconnected.name(), "disconnected");
        assert_eq!(SyncState::Uninitialized(session.clone()).name(), "uninitialized");
        assert_eq!(SyncState::Connecting.identity(), None);

        let ready = SyncState::Ready {
            session: session.clone(),
            entries: entries.clone(),
        };
        assert_eq!(ready.name(), "ready");
        assert_eq!(ready.identity(), Some(session.identity()));
        assert_eq!(ready.entries(), Some(entries.as_slice()));
        assert_eq!(SyncState::Unsynced(session).entries(), None);
    }
}
