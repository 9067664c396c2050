//! The interface-definition document published alongside the program. It names the callable
//! operations and account layouts; the client checks that everything it relies on is declared
//! before talking to the program.

use std::str::FromStr;

use serde::Deserialize;
use solana_address::Address;

use crate::{
    error::{
        InterfaceError,
        InterfaceResult,
    },
    instructions::PortalInstruction,
    state::BaseAccount,
};

/// Field of [`BaseAccount`] that holds the list, as named in the document.
pub const GIF_LIST_FIELD: &str = "gifList";
/// Argument of `addGif`, as named in the document.
pub const GIF_LINK_ARG: &str = "gifLink";

#[derive(Clone, Debug, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default)]
    pub metadata: Option<IdlMetadata>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<IdlAccountItem>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: String,
    pub is_mut: bool,
    pub is_signer: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IdlTypeDefTy,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlTypeDefTy {
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<IdlField>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IdlMetadata {
    pub address: String,
}

impl FromStr for Idl {
    type Err = InterfaceError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(json).map_err(|_| InterfaceError::MalformedIdl)
    }
}

impl Idl {
    pub fn instruction(&self, ixn: PortalInstruction) -> Option<&IdlInstruction> {
        let name = ixn.to_string();
        self.instructions.iter().find(|i| i.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&IdlTypeDef> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// The program address recorded in the document's metadata.
    pub fn program_id(&self) -> InterfaceResult<Address> {
        let metadata = self
            .metadata
            .as_ref()
            .ok_or(InterfaceError::MissingProgramAddress)?;
        Address::from_str(&metadata.address).map_err(|_| InterfaceError::InvalidProgramAddress)
    }

    /// Checks that the document declares `startStuffOff`, `addGif(gifLink)` and a `BaseAccount`
    /// with a `gifList` field.
    pub fn validate(&self) -> InterfaceResult<()> {
        self.instruction(PortalInstruction::StartStuffOff)
            .ok_or(InterfaceError::MissingInstruction)?;

        let add_gif = self
            .instruction(PortalInstruction::AddGif)
            .ok_or(InterfaceError::MissingInstruction)?;
        if !add_gif.args.iter().any(|arg| arg.name == GIF_LINK_ARG) {
            return Err(InterfaceError::MissingInstructionArgument);
        }

        let base_account = self
            .account(BaseAccount::NAME)
            .ok_or(InterfaceError::MissingAccountType)?;
        if !base_account.ty.fields.iter().any(|f| f.name == GIF_LIST_FIELD) {
            return Err(InterfaceError::MissingAccountField);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_idl_json(address: &str) -> String {
        format!(
            r#"{{
  "version": "0.1.0",
  "name": "gif_portal",
  "instructions": [
    {{
      "name": "startStuffOff",
      "accounts": [
        {{ "name": "baseAccount", "isMut": true, "isSigner": true }},
        {{ "name": "user", "isMut": true, "isSigner": true }},
        {{ "name": "systemProgram", "isMut": false, "isSigner": false }}
      ],
      "args": []
    }},
    {{
      "name": "addGif",
      "accounts": [
        {{ "name": "baseAccount", "isMut": true, "isSigner": false }},
        {{ "name": "user", "isMut": true, "isSigner": true }}
      ],
      "args": [{{ "name": "gifLink", "type": "string" }}]
    }}
  ],
  "accounts": [
    {{
      "name": "BaseAccount",
      "type": {{
        "kind": "struct",
        "fields": [
          {{ "name": "totalGifs", "type": "u64" }},
          {{ "name": "gifList", "type": {{ "vec": {{ "defined": "ItemStruct" }} }} }}
        ]
      }}
    }}
  ],
  "metadata": {{ "address": "{address}" }}
}}"#
        )
    }

    #[test]
    fn parses_and_validates() {
        let program_id = Address::new_unique();
        let idl: Idl = sample_idl_json(&program_id.to_string()).parse().unwrap();

        assert_eq!(idl.name, "gif_portal");
        assert!(idl.validate().is_ok());
        assert_eq!(idl.program_id(), Ok(program_id));

        let start = idl.instruction(PortalInstruction::StartStuffOff).unwrap();
        assert!(start.accounts[0].is_signer);
        assert!(!start.accounts[2].is_mut);
    }

    #[test]
    fn missing_add_gif() {
        let json = sample_idl_json(&Address::new_unique().to_string())
            .replace("\"addGif\"", "\"removeGif\"");
        let idl: Idl = json.parse().unwrap();
        assert_eq!(idl.validate(), Err(InterfaceError::MissingInstruction));
    }

    #[test]
    fn missing_gif_list_field() {
        let json = sample_idl_json(&Address::new_unique().to_string())
            .replace("\"gifList\"", "\"items\"");
        let idl: Idl = json.parse().unwrap();
        assert_eq!(idl.validate(), Err(InterfaceError::MissingAccountField));
    }

    #[test]
    fn bad_program_address() {
        let idl: Idl = sample_idl_json("not-base58!").parse().unwrap();
        assert_eq!(idl.program_id(), Err(InterfaceError::InvalidProgramAddress));
    }

    #[test]
    fn malformed_document() {
        assert_eq!(
            "{ not json".parse::<Idl>().unwrap_err(),
            InterfaceError::MalformedIdl
        );
    }
}
