use pinocchio::program_error::ProgramError;

/// Leading byte of every account owned by the program.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized,
    Organizer,
    Event,
}

impl TryFrom<u8> for AccountKind {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountKind::Uninitialized),
            1 => Ok(AccountKind::Organizer),
            2 => Ok(AccountKind::Event),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}
