//! Interface for the GIF portal program: instruction builders, account state decoding, and the
//! interface-definition document that names the program's callable operations.

pub mod discriminator;
pub mod error;
pub mod idl;
pub mod instructions;
pub mod state;

use solana_address::Address;

/// The system program, whose address is 32 zero bytes.
pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0; 32]);
