use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{
    helpers::constant::MAX_NAME_LEN,
    state::{AccountKind, BoundedStr, Transmutable},
};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Organizer {
    kind: u8,
    is_active: u8,
    pub name: BoundedStr<MAX_NAME_LEN>,
    /// Address of the organizer account itself.
    pub organizer_id: Pubkey,
    pub payer: Pubkey,
}

// Safety: repr(C), only u8/byte-array fields.
unsafe impl Transmutable for Organizer {}

impl Organizer {
    pub const fn size() -> usize {
        core::mem::size_of::<Organizer>()
    }

    /// A newly registered, active organizer.
    pub fn new(name: BoundedStr<MAX_NAME_LEN>, organizer_id: Pubkey, payer: Pubkey) -> Self {
        Self {
            kind: AccountKind::Organizer as u8,
            is_active: 1,
            name,
            organizer_id,
            payer,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    /// No instruction clears the flag yet; used to build inactive fixtures.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active as u8;
    }

    /// Reads initialized organizer data, rejecting any other account kind.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, ProgramError> {
        let organizer = Self::load(bytes)?;
        match AccountKind::try_from(organizer.kind)? {
            AccountKind::Organizer => Ok(organizer),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}
