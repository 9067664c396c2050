use std::time::Duration;

/// A remote operation the controller can issue.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum Operation {
    #[strum(serialize = "Wallet connection")]
    Connect,
    #[strum(serialize = "Fetching the GIF list")]
    Fetch,
    #[strum(serialize = "Submitting a GIF link")]
    Append,
    #[strum(serialize = "Creating the base account")]
    Create,
}

/// Broad classes of failure. A missing wallet during a silent connect, or a missing base account,
/// is a state rather than an error and never gets a kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum ErrorKind {
    /// An explicit connect found no wallet, or one the portal can't use.
    WalletUnavailable,
    UserDeclined,
    TransientRemoteFailure,
    InvariantViolation,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PortalError {
    #[error("No wallet was found in the environment")]
    WalletNotFound,
    #[error("Wallet `{0}` isn't supported")]
    UnsupportedWallet(String),
    #[error("Wallet connection declined: {0}")]
    UserDeclined(String),
    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout { operation: Operation, after: Duration },
    #[error("Couldn't fetch the GIF list: {0}")]
    Fetch(String),
    #[error("Couldn't submit the GIF link: {0}")]
    Submission(String),
    #[error("Couldn't create the base account: {0}")]
    Creation(String),
    #[error("Wallet couldn't sign: {0}")]
    Signing(String),
    #[error("{operation} isn't allowed while {state}")]
    InvalidState {
        operation: Operation,
        state: &'static str,
    },
}

impl PortalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WalletNotFound | Self::UnsupportedWallet(_) => ErrorKind::WalletUnavailable,
            Self::UserDeclined(_) => ErrorKind::UserDeclined,
            Self::Timeout { .. }
            | Self::Fetch(_)
            | Self::Submission(_)
            | Self::Creation(_)
            | Self::Signing(_) => ErrorKind::TransientRemoteFailure,
            Self::InvalidState { .. } => ErrorKind::InvariantViolation,
        }
    }

    /// Whether the user can reasonably try the same operation again.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::TransientRemoteFailure
    }
}
