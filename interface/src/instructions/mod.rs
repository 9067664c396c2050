use crate::discriminator::{
    instruction_discriminator,
    Discriminator,
};

pub mod add_gif;
pub mod start_stuff_off;

pub use add_gif::AddGif;
pub use start_stuff_off::StartStuffOff;

/// The program's callable operations, displayed with the names used in the interface definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum PortalInstruction {
    StartStuffOff,
    AddGif,
}

impl PortalInstruction {
    /// The on-chain handler name the discriminator is derived from.
    pub const fn handler_name(&self) -> &'static str {
        match self {
            Self::StartStuffOff => "start_stuff_off",
            Self::AddGif => "add_gif",
        }
    }

    pub fn discriminator(&self) -> Discriminator {
        instruction_discriminator(self.handler_name())
    }

    pub fn from_discriminator(data: &[u8]) -> Option<Self> {
        use strum::IntoEnumIterator;

        let tag = data.get(..crate::discriminator::DISCRIMINATOR_LEN)?;
        Self::iter().find(|ixn| ixn.discriminator() == tag)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::PortalInstruction;

    #[test]
    fn idl_names() {
        assert_eq!(PortalInstruction::StartStuffOff.to_string(), "startStuffOff");
        assert_eq!(PortalInstruction::AddGif.to_string(), "addGif");
    }

    #[test]
    fn discriminators_round_trip_exhaustive() {
        for variant in PortalInstruction::iter() {
            let data = variant.discriminator();
            assert_eq!(PortalInstruction::from_discriminator(&data), Some(variant));
        }
        assert_eq!(PortalInstruction::from_discriminator(&[0; 4]), None);
    }
}
