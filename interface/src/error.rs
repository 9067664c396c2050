#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum InterfaceError {
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    InvalidAccountData,
    MalformedIdl,
    MissingInstruction,
    MissingInstructionArgument,
    MissingAccountType,
    MissingAccountField,
    MissingProgramAddress,
    InvalidProgramAddress,
}

impl From<InterfaceError> for &'static str {
    fn from(value: InterfaceError) -> Self {
        match value {
            InterfaceError::InsufficientByteLength => "Not enough bytes passed",
            InterfaceError::InvalidAccountDiscriminant => "Invalid account discriminant",
            InterfaceError::InvalidAccountData => "Account data couldn't be deserialized",
            InterfaceError::MalformedIdl => "Interface definition isn't valid JSON",
            InterfaceError::MissingInstruction => "Interface definition is missing an instruction",
            InterfaceError::MissingInstructionArgument => {
                "Interface definition is missing an instruction argument"
            }
            InterfaceError::MissingAccountType => "Interface definition is missing an account type",
            InterfaceError::MissingAccountField => {
                "Interface definition is missing an account field"
            }
            InterfaceError::MissingProgramAddress => "Interface definition has no program address",
            InterfaceError::InvalidProgramAddress => "Program address isn't valid base58",
        }
    }
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = self.clone().into();
        write!(f, "{msg}")
    }
}

impl std::error::Error for InterfaceError {}

pub type InterfaceResult<T> = Result<T, InterfaceError>;
