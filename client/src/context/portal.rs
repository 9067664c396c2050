//! Portal-level context holding the program and base account addresses, and helpers for building
//! the program's instructions.

use gif_portal_interface::instructions::{
    AddGif,
    StartStuffOff,
};
use solana_address::Address;
use solana_instruction::Instruction;

use crate::config::PortalConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PortalContext {
    pub program_id: Address,
    pub base_account: Address,
}

impl PortalContext {
    pub const fn new(program_id: Address, base_account: Address) -> Self {
        Self {
            program_id,
            base_account,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.program_id, config.base_account)
    }

    /// Builds the one-time `startStuffOff` instruction, paid for by `user`.
    pub fn start_stuff_off(&self, user: &Address) -> Instruction {
        StartStuffOff {
            base_account: self.base_account,
            user: *user,
        }
        .create_instruction(&self.program_id)
    }

    /// Builds an `addGif` instruction recording `gif_link` against `user`.
    pub fn add_gif(&self, user: &Address, gif_link: &str) -> Instruction {
        AddGif {
            base_account: self.base_account,
            user: *user,
            gif_link,
        }
        .create_instruction(&self.program_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_target_the_base_account() {
        let ctx = PortalContext::new(Address::new_unique(), Address::new_unique());
        let user = Address::new_unique();

        for ixn in [ctx.start_stuff_off(&user), ctx.add_gif(&user, "https://gif")] {
            assert_eq!(ixn.program_id, ctx.program_id);
            assert_eq!(ixn.accounts[0].pubkey, ctx.base_account);
            assert_eq!(ixn.accounts[1].pubkey, user);
        }
    }
}
