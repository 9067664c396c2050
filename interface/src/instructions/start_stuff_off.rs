use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    instructions::PortalInstruction,
    SYSTEM_PROGRAM_ID,
};

/// Creates and initializes the base account that stores the GIF list. The base account's
/// keypair must sign, so this can only succeed once per address.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` Base account
///   1. `[WRITE, SIGNER]` User (pays for the account)
///   2. `[READ]` System program
pub struct StartStuffOff {
    pub base_account: Address,
    pub user: Address,
}

impl StartStuffOff {
    pub fn pack(&self) -> Vec<u8> {
        PortalInstruction::StartStuffOff.discriminator().to_vec()
    }

    pub fn create_instruction(&self, program_id: &Address) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: vec![
                AccountMeta::new(self.base_account, true),
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: self.pack(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_and_data() {
        let program_id = Address::new_unique();
        let base_account = Address::new_unique();
        let user = Address::new_unique();
        let ixn = StartStuffOff { base_account, user }.create_instruction(&program_id);

        assert_eq!(ixn.program_id, program_id);
        assert_eq!(ixn.data, PortalInstruction::StartStuffOff.discriminator());
        assert_eq!(ixn.accounts.len(), 3);
        assert!(ixn.accounts[0].is_signer && ixn.accounts[0].is_writable);
        assert!(ixn.accounts[1].is_signer && ixn.accounts[1].is_writable);
        assert_eq!(ixn.accounts[2].pubkey, SYSTEM_PROGRAM_ID);
        assert!(!ixn.accounts[2].is_writable);
    }
}
