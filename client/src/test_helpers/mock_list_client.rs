use std::{
    collections::VecDeque,
    sync::{
        Arc,
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use solana_address::Address;
use solana_sdk::signature::Signature;

use crate::{
    remote::{
        FetchOutcome,
        ListClient,
        ListEntry,
    },
    wallet::Session,
    PortalError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemoteCall {
    Fetch,
    Append(String),
    Create,
}

#[derive(Default)]
struct MockState {
    /// `None` while the base account doesn't exist.
    entries: Option<Vec<ListEntry>>,
    calls: Vec<RemoteCall>,
    fetch_failures: VecDeque<PortalError>,
    append_failures: VecDeque<PortalError>,
    create_failures: VecDeque<PortalError>,
    delay: Option<Duration>,
}

/// An in-memory base account that records every call made against it. Clones share the same
/// account, so a test can keep a handle after moving one into the controller.
#[derive(Clone, Default)]
pub struct MockListClient {
    state: Arc<Mutex<MockState>>,
}

impl MockListClient {
    /// A client whose base account hasn't been created.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ListEntry>) -> Self {
        let client = Self::default();
        client.replace_entries(entries);
        client
    }

    /// Overwrites the account's list, as another client writing to it would.
    pub fn replace_entries(&self, entries: Vec<ListEntry>) {
        self.lock().entries = Some(entries);
    }

    pub fn entries(&self) -> Option<Vec<ListEntry>> {
        self.lock().entries.clone()
    }

    pub fn fail_next_fetch(&self, error: PortalError) {
        self.lock().fetch_failures.push_back(error);
    }

    pub fn fail_next_append(&self, error: PortalError) {
        self.lock().append_failures.push_back(error);
    }

    pub fn fail_next_create(&self, error: PortalError) {
        self.lock().create_failures.push_back(error);
    }

    /// Makes every call take `delay` before answering.
    pub fn set_delay(&self, delay: Option<Duration>) {
        self.lock().delay = delay;
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, call: &RemoteCall) -> usize {
        self.lock().calls.iter().filter(|c| *c == call).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: RemoteCall) -> Option<Duration> {
        let mut state = self.lock();
        state.calls.push(call);
        state.delay
    }
}

#[async_trait]
impl ListClient for MockListClient {
    async fn fetch_entries(&self, _account: &Address) -> Result<FetchOutcome, PortalError> {
        if let Some(delay) = self.record(RemoteCall::Fetch) {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(error) = state.fetch_failures.pop_front() {
            return Err(error);
        }
        Ok(match &state.entries {
            Some(entries) => FetchOutcome::Found(entries.clone()),
            None => FetchOutcome::NotFound,
        })
    }

    async fn append_entry(
        &self,
        _account: &Address,
        session: &Session,
        text: &str,
    ) -> Result<Signature, PortalError> {
        if let Some(delay) = self.record(RemoteCall::Append(text.to_string())) {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(error) = state.append_failures.pop_front() {
            return Err(error);
        }
        match state.entries.as_mut() {
            Some(entries) => {
                entries.push(ListEntry::new(text, session.identity().address()));
                Ok(Signature::default())
            }
            None => Err(PortalError::Submission(
                "AccountNotInitialized: the base account doesn't exist".to_string(),
            )),
        }
    }

    async fn create_account(
        &self,
        account: &Address,
        _session: &Session,
    ) -> Result<Signature, PortalError> {
        if let Some(delay) = self.record(RemoteCall::Create) {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(error) = state.create_failures.pop_front() {
            return Err(error);
        }
        if state.entries.is_some() {
            return Err(PortalError::Creation(format!("Account {account} already in use")));
        }
        state.entries = Some(Vec::new());
        Ok(Signature::default())
    }
}
