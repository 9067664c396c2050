pub mod base_account;

pub use base_account::{
    BaseAccount,
    ItemStruct,
};
