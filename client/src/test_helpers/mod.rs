//! In-memory stand-ins for the wallet and the portal program, used to drive the controller in
//! tests without a validator.

mod mock_list_client;
mod mock_wallet;

pub use mock_list_client::{
    MockListClient,
    RemoteCall,
};
pub use mock_wallet::MockWallet;
