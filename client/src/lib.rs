//! Client-side pieces of the GIF portal: the wallet session adapter, the remote list client that
//! talks to the portal program over RPC, and the sync controller that ties them together.

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod logs;
pub mod remote;
pub mod test_helpers;
pub mod transactions;
pub mod wallet;

pub use error::{
    ErrorKind,
    Operation,
    PortalError,
};
pub use logs::LogColor;
