use borsh::BorshSerialize;
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    discriminator::DISCRIMINATOR_LEN,
    instructions::PortalInstruction,
};

/// Appends a GIF link to the base account's list, recorded against the signing user.
///
/// ### Accounts
///   0. `[WRITE]` Base account
///   1. `[WRITE, SIGNER]` User
///
/// ### Data
///   discriminator, then the link as a borsh string (`u32` little-endian length + UTF-8 bytes).
pub struct AddGif<'a> {
    pub base_account: Address,
    pub user: Address,
    pub gif_link: &'a str,
}

impl AddGif<'_> {
    pub fn pack(&self) -> Vec<u8> {
        let mut data =
            Vec::with_capacity(DISCRIMINATOR_LEN + size_of::<u32>() + self.gif_link.len());
        data.extend_from_slice(&PortalInstruction::AddGif.discriminator());
        self.gif_link
            .serialize(&mut data)
            .expect("Should serialize into a Vec");
        data
    }

    pub fn create_instruction(&self, program_id: &Address) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: vec![
                AccountMeta::new(self.base_account, false),
                AccountMeta::new(self.user, true),
            ],
            data: self.pack(),
        }
    }
}
