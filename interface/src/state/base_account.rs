//! The program-owned account holding the GIF list.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::{
    discriminator::{
        account_discriminator,
        Discriminator,
        DISCRIMINATOR_LEN,
    },
    error::{
        InterfaceError,
        InterfaceResult,
    },
};

/// A single submitted link and the address of the user that submitted it.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct ItemStruct {
    pub gif_link: String,
    pub user_address: [u8; 32],
}

impl ItemStruct {
    pub fn new(gif_link: impl Into<String>, user: &Address) -> Self {
        Self {
            gif_link: gif_link.into(),
            user_address: user.to_bytes(),
        }
    }

    pub fn user(&self) -> Address {
        Address::new_from_array(self.user_address)
    }
}

/// Account data layout after the discriminator. The program allocates a fixed amount of space up
/// front, so the serialized struct is followed by zero padding.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<ItemStruct>,
}

impl BaseAccount {
    pub const NAME: &'static str = "BaseAccount";

    pub fn discriminator() -> Discriminator {
        account_discriminator(Self::NAME)
    }

    /// Decodes raw account data, checking the discriminator and ignoring trailing padding.
    pub fn try_from_account_data(data: &[u8]) -> InterfaceResult<Self> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(InterfaceError::InsufficientByteLength);
        }
        let (discriminator, mut rest) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != Self::discriminator() {
            return Err(InterfaceError::InvalidAccountDiscriminant);
        }
        // `deserialize` advances the slice and, unlike `try_from_slice`, accepts leftover bytes.
        Self::deserialize(&mut rest).map_err(|_| InterfaceError::InvalidAccountData)
    }

    /// Serializes the account the way the program lays it out, padded with zeros to `space`
    /// bytes when `space` is larger than the encoded length.
    pub fn to_account_data(&self, space: usize) -> Vec<u8> {
        let mut data = Self::discriminator().to_vec();
        self.serialize(&mut data).expect("Should serialize into a Vec");
        if data.len() < space {
            data.resize(space, 0);
        }
        data
    }

    pub fn push(&mut self, item: ItemStruct) {
        self.gif_list.push(item);
        self.total_gifs += 1;
    }
}
