//! The account sync controller: decides between initializing and fetching the base account,
//! owns the local copy of the list, and resolves submissions.

use std::{
    future::Future,
    time::Duration,
};

use solana_address::Address;
use tokio::sync::{
    mpsc,
    watch,
};

use crate::{
    config::PortalConfig,
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
    },
    print_kv,
    remote::{
        FetchOutcome,
        ListClient,
    },
    wallet::{
        Session,
        WalletSessionAdapter,
    },
    Operation,
    PortalError,
};

mod state;

pub use state::{
    Command,
    Snapshot,
    SyncState,
};

pub struct SyncController<R> {
    account: Address,
    timeout: Duration,
    wallet: WalletSessionAdapter,
    remote: R,
    state: SyncState,
    last_error: Option<PortalError>,
    input: String,
    pending: Option<String>,
    op_seq: u64,
    snapshots: watch::Sender<Snapshot>,
}

impl<R: ListClient> SyncController<R> {
    pub fn new(config: &PortalConfig, wallet: WalletSessionAdapter, remote: R) -> Self {
        let (snapshots, _) = watch::channel(Snapshot::default());
        Self {
            account: config.base_account,
            timeout: config.timeout,
            wallet,
            remote,
            state: SyncState::Disconnected,
            last_error: None,
            input: String::new(),
            pending: None,
            op_seq: 0,
            snapshots,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            last_error: self.last_error.clone(),
            input: self.input.clone(),
            pending: self.pending.clone(),
            op_seq: self.op_seq,
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn last_error(&self) -> Option<&PortalError> {
        self.last_error.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn wallet(&self) -> &WalletSessionAdapter {
        &self.wallet
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Tries a silent connection, then handles commands and wallet account changes until the
    /// command channel closes. Commands that arrive while an operation is in flight wait in the
    /// channel until it settles.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> anyhow::Result<()> {
        let mut sessions = self.wallet.subscribe();
        self.handle(Command::ConnectSilently).await;

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command).await,
                    None => break,
                },
                changed = sessions.changed() => {
                    changed?;
                    sessions.borrow_and_update();
                    self.handle_session_change().await;
                }
            }
        }

        Ok(())
    }

    pub async fn handle(&mut self, command: Command) {
        if !matches!(command, Command::EditInput(_)) {
            self.last_error = None;
        }

        match command {
            Command::ConnectSilently => self.connect_silently().await,
            Command::ConnectInteractive => self.connect_interactive().await,
            Command::EditInput(text) => {
                self.input = text;
                self.publish();
            }
            Command::Submit(text) => self.submit(text).await,
            Command::InitializeAccount => self.initialize_account().await,
            Command::Refresh => self.refresh().await,
            Command::Disconnect => self.disconnect(),
        }
    }

    /// Reconciles the state with the wallet's current session. A different identity than the one
    /// the state was reached with starts over from [`SyncState::Connecting`].
    pub async fn handle_session_change(&mut self) {
        match (self.wallet.current(), self.state.identity()) {
            (None, None) => {}
            (None, Some(_)) => self.enter_disconnected(),
            (Some(next), Some(prev)) if next.identity() == prev => {}
            (Some(next), _) => {
                log_info("Identity", format!("Now {}", next.identity()));
                self.set_state(SyncState::Connecting);
                self.sync(next).await;
            }
        }
    }

    async fn connect_silently(&mut self) {
        if !matches!(self.state, SyncState::Disconnected) {
            log_info("Wallet", "Already connected");
            return;
        }

        self.set_state(SyncState::Connecting);
        self.next_op();
        match self.wallet.try_auto_connect().await {
            Some(session) => self.sync(session).await,
            None => self.set_state(SyncState::Disconnected),
        }
    }

    async fn connect_interactive(&mut self) {
        if !matches!(self.state, SyncState::Disconnected) {
            return self.reject(Operation::Connect);
        }

        self.set_state(SyncState::Connecting);
        self.next_op();
        match self.wallet.connect_interactive().await {
            Ok(session) => self.sync(session).await,
            Err(e) => {
                self.state = SyncState::Disconnected;
                self.report(e);
            }
        }
    }

    /// Enters [`SyncState::Unsynced`] for a new session or after a write, then fetches. A failed
    /// fetch leaves the state unsynced.
    async fn sync(&mut self, session: Session) {
        self.set_state(SyncState::Unsynced(session.clone()));
        self.fetch(session).await;
    }

    /// Reads the base account once and moves to whichever state the result implies. The cache is
    /// replaced wholesale on success; on failure the current state is kept.
    async fn fetch(&mut self, session: Session) {
        let seq = self.next_op();

        let result = bounded(
            self.timeout,
            Operation::Fetch,
            self.remote.fetch_entries(&self.account),
        )
        .await;

        if !self.is_current(&session) {
            return self.discard_stale(seq, Operation::Fetch);
        }

        match result {
            Ok(FetchOutcome::NotFound) => {
                log_info("Base account", "Not initialized");
                self.set_state(SyncState::Uninitialized(session));
            }
            Ok(FetchOutcome::Found(entries)) => {
                print_kv!("GIF list size", entries.len());
                self.set_state(SyncState::Ready { session, entries });
            }
            Err(e) => self.report(e),
        }
    }

    async fn submit(&mut self, text: String) {
        if text.trim().is_empty() {
            log_warning("Submit", "No GIF link given");
            return;
        }
        let SyncState::Ready { session, .. } = &self.state else {
            return self.reject(Operation::Append);
        };
        let session = session.clone();

        // The input is cleared before the outcome is known and isn't restored on failure.
        self.input.clear();
        self.pending = Some(text.clone());
        self.publish();
        let seq = self.next_op();

        let result = bounded(
            self.timeout,
            Operation::Append,
            self.remote.append_entry(&self.account, &session, &text),
        )
        .await;
        self.pending = None;

        if !self.is_current(&session) {
            return self.discard_stale(seq, Operation::Append);
        }

        match result {
            Ok(signature) => {
                log_success("GIF link submitted", signature);
                self.sync(session).await;
            }
            Err(e) => self.report(e),
        }
    }

    async fn initialize_account(&mut self) {
        let SyncState::Uninitialized(session) = &self.state else {
            return self.reject(Operation::Create);
        };
        let session = session.clone();
        let seq = self.next_op();

        let result = bounded(
            self.timeout,
            Operation::Create,
            self.remote.create_account(&self.account, &session),
        )
        .await;

        if !self.is_current(&session) {
            return self.discard_stale(seq, Operation::Create);
        }

        match result {
            Ok(signature) => {
                log_success("Created base account", signature);
                self.sync(session).await;
            }
            Err(e) => self.report(e),
        }
    }

    async fn refresh(&mut self) {
        match self.state.session() {
            Some(session) => {
                let session = session.clone();
                self.fetch(session).await;
            }
            None => self.reject(Operation::Fetch),
        }
    }

    fn disconnect(&mut self) {
        self.wallet.disconnect();
        self.enter_disconnected();
    }

    fn enter_disconnected(&mut self) {
        self.input.clear();
        self.pending = None;
        self.set_state(SyncState::Disconnected);
    }

    fn is_current(&self, session: &Session) -> bool {
        self.wallet.current().as_ref() == Some(session)
    }

    fn discard_stale(&mut self, seq: u64, operation: Operation) {
        log_warning(
            "Stale result",
            format!("Discarding operation #{seq} ({operation}): the wallet's identity changed"),
        );
        self.publish();
    }

    fn reject(&mut self, operation: Operation) {
        let error = PortalError::InvalidState {
            operation,
            state: self.state.name(),
        };
        self.report(error);
    }

    fn report(&mut self, error: PortalError) {
        log_error(error.kind(), &error);
        self.last_error = Some(error);
        self.publish();
    }

    fn next_op(&mut self) -> u64 {
        self.op_seq += 1;
        self.op_seq
    }

    fn set_state(&mut self, state: SyncState) {
        self.state = state;
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}

async fn bounded<T>(
    timeout: Duration,
    operation: Operation,
    call: impl Future<Output = Result<T, PortalError>>,
) -> Result<T, PortalError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(PortalError::Timeout {
            operation,
            after: timeout,
        }),
    }
}
