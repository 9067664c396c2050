//! Calls against the portal program: read the list, append to it, and create the account that
//! holds it.

use anyhow::Context;
use async_trait::async_trait;
use gif_portal_interface::state::{
    BaseAccount,
    ItemStruct,
};
use solana_address::Address;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    config::PortalConfig,
    context::portal::PortalContext,
    transactions::{
        send_transaction,
        SyncSigner,
    },
    wallet::Session,
    PortalError,
};

/// A submitted link and who submitted it, as recorded on chain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListEntry {
    pub link: String,
    pub submitter: Address,
}

impl ListEntry {
    pub fn new(link: impl Into<String>, submitter: Address) -> Self {
        Self {
            link: link.into(),
            submitter,
        }
    }
}

impl From<ItemStruct> for ListEntry {
    fn from(item: ItemStruct) -> Self {
        let submitter = item.user();
        Self {
            link: item.gif_link,
            submitter,
        }
    }
}

/// Result of reading the base account. A missing account is a valid answer, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchOutcome {
    NotFound,
    Found(Vec<ListEntry>),
}

#[async_trait]
pub trait ListClient: Send + Sync {
    /// Reads the list. Failures to reach or decode the account are errors and never reported
    /// as [`FetchOutcome::NotFound`].
    async fn fetch_entries(&self, account: &Address) -> Result<FetchOutcome, PortalError>;

    /// Records `text` against the session's identity. Callers re-fetch to see the result.
    async fn append_entry(
        &self,
        account: &Address,
        session: &Session,
        text: &str,
    ) -> Result<Signature, PortalError>;

    /// Creates the account. Not idempotent: fails remotely if the account already exists.
    async fn create_account(
        &self,
        account: &Address,
        session: &Session,
    ) -> Result<Signature, PortalError>;
}

/// [`ListClient`] backed by a Solana RPC node.
pub struct RpcListClient {
    rpc: RpcClient,
    context: PortalContext,
    /// Signs `startStuffOff`, which creates the account at this keypair's address.
    base_keypair: Keypair,
}

impl RpcListClient {
    pub fn new(config: &PortalConfig, base_keypair: Keypair) -> anyhow::Result<Self> {
        if base_keypair.pubkey() != config.base_account {
            anyhow::bail!(
                "Base account keypair {} doesn't match the configured base account {}",
                base_keypair.pubkey(),
                config.base_account
            );
        }

        Ok(Self {
            rpc: RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment),
            context: PortalContext::from_config(config),
            base_keypair,
        })
    }

    pub fn context(&self) -> &PortalContext {
        &self.context
    }

    async fn read_base_account(&self, account: &Address) -> anyhow::Result<Option<BaseAccount>> {
        let response = self
            .rpc
            .get_account_with_commitment(account, self.rpc.commitment())
            .await
            .context("Couldn't get the base account")?;

        let Some(account) = response.value else {
            return Ok(None);
        };
        if account.owner != self.context.program_id {
            anyhow::bail!(
                "Account is owned by {}, not the portal program {}",
                account.owner,
                self.context.program_id
            );
        }

        let base_account = BaseAccount::try_from_account_data(&account.data)
            .context("Couldn't decode the base account")?;
        Ok(Some(base_account))
    }
}

#[async_trait]
impl ListClient for RpcListClient {
    async fn fetch_entries(&self, account: &Address) -> Result<FetchOutcome, PortalError> {
        match self.read_base_account(account).await {
            Ok(None) => Ok(FetchOutcome::NotFound),
            Ok(Some(base_account)) => Ok(FetchOutcome::Found(
                base_account
                    .gif_list
                    .into_iter()
                    .map(ListEntry::from)
                    .collect(),
            )),
            Err(e) => Err(PortalError::Fetch(format!("{e:#}"))),
        }
    }

    async fn append_entry(
        &self,
        account: &Address,
        session: &Session,
        text: &str,
    ) -> Result<Signature, PortalError> {
        if *account != self.context.base_account {
            return Err(PortalError::Submission(format!(
                "{account} isn't the configured base account"
            )));
        }

        let user = session.identity().address();
        let add_gif = self.context.add_gif(&user, text);
        let user_signer = session.signer();
        send_transaction(&self.rpc, &user_signer, &[], &[add_gif])
            .await
            .map_err(|e| PortalError::Submission(format!("{e:#}")))
    }

    async fn create_account(
        &self,
        account: &Address,
        session: &Session,
    ) -> Result<Signature, PortalError> {
        if *account != self.base_keypair.pubkey() {
            return Err(PortalError::Creation(format!(
                "No keypair available to create {account}"
            )));
        }

        let user = session.identity().address();
        let start_stuff_off = self.context.start_stuff_off(&user);
        let user_signer = session.signer();
        let base_signer: &SyncSigner<'_> = &self.base_keypair;
        send_transaction(
            &self.rpc,
            &user_signer,
            &[base_signer],
            &[start_stuff_off],
        )
        .await
        .map_err(|e| PortalError::Creation(format!("{e:#}")))
    }
}
