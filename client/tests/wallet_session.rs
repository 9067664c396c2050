use std::{
    sync::Arc,
    time::Duration,
};

use gif_portal_client::{
    test_helpers::MockWallet,
    wallet::{
        Identity,
        WalletCapability,
        WalletSessionAdapter,
    },
    Operation,
    PortalError,
};
use solana_address::Address;

const TIMEOUT: Duration = Duration::from_secs(5);

fn adapter(wallet: Option<MockWallet>) -> WalletSessionAdapter {
    WalletSessionAdapter::new(
        wallet.map(|w| Arc::new(w) as Arc<dyn WalletCapability>),
        TIMEOUT,
    )
}

#[tokio::test]
async fn auto_connect_only_yields_identity_or_absence() {
    let environments = [
        None,
        Some(MockWallet::new().unsupported()),
        Some(MockWallet::new().untrusted()),
        Some(MockWallet::new().declining()),
    ];

    for wallet in environments {
        let adapter = adapter(wallet);
        assert!(adapter.try_auto_connect().await.is_none());
        assert!(adapter.current().is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn auto_connect_timeout_is_absence() {
    let adapter = adapter(Some(
        MockWallet::new().with_connect_delay(TIMEOUT * 10),
    ));
    assert!(adapter.try_auto_connect().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn interactive_connect_timeout_is_an_error() {
    let adapter = adapter(Some(
        MockWallet::new().with_connect_delay(TIMEOUT * 10),
    ));
    assert_eq!(
        adapter.connect_interactive().await.unwrap_err(),
        PortalError::Timeout {
            operation: Operation::Connect,
            after: TIMEOUT,
        }
    );
}

#[tokio::test]
async fn interactive_connect_failures_are_errors() {
    assert_eq!(
        adapter(None).connect_interactive().await.unwrap_err(),
        PortalError::WalletNotFound
    );
    assert_eq!(
        adapter(Some(MockWallet::new().unsupported()))
            .connect_interactive()
            .await
            .unwrap_err(),
        PortalError::UnsupportedWallet("mock".to_string())
    );
    assert!(matches!(
        adapter(Some(MockWallet::new().declining()))
            .connect_interactive()
            .await,
        Err(PortalError::UserDeclined(_))
    ));
}

#[tokio::test]
async fn interactive_connect_works_for_untrusted_wallets() {
    let wallet = MockWallet::new().untrusted();
    let identity = wallet.identity();
    let adapter = adapter(Some(wallet));

    assert!(adapter.try_auto_connect().await.is_none());
    let session = adapter.connect_interactive().await.unwrap();
    assert_eq!(session.identity(), identity);
}

#[tokio::test]
async fn connection_is_pushed_to_subscribers() {
    let wallet = MockWallet::new();
    let identity = wallet.identity();
    let adapter = adapter(Some(wallet));
    let mut sessions = adapter.subscribe();

    let session = adapter.try_auto_connect().await.unwrap();
    assert_eq!(session.identity(), identity);
    assert!(sessions.has_changed().unwrap());
    assert_eq!(
        sessions.borrow_and_update().as_ref().map(|s| s.identity()),
        Some(identity)
    );

    adapter.disconnect();
    assert!(sessions.has_changed().unwrap());
    assert!(sessions.borrow_and_update().is_none());
    assert!(adapter.current().is_none());
}

#[tokio::test]
async fn account_changes_are_republished() {
    let adapter = adapter(Some(MockWallet::new()));
    adapter.try_auto_connect().await.unwrap();

    let switched = Identity::new(Address::new_unique());
    adapter.account_changed(Some(switched));
    assert_eq!(adapter.current().map(|s| s.identity()), Some(switched));

    adapter.account_changed(None);
    assert!(adapter.current().is_none());
}

#[tokio::test]
async fn account_changes_without_a_wallet_are_ignored() {
    let adapter = adapter(None);
    adapter.account_changed(Some(Identity::new(Address::new_unique())));
    assert!(adapter.current().is_none());
}
