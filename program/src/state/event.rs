use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{
    helpers::constant::{MAX_NAME_LEN, MAX_VENUE_LEN},
    state::{AccountKind, BoundedStr, Transmutable},
};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Event {
    kind: u8,
    is_active: u8,
    pub name: BoundedStr<MAX_NAME_LEN>,
    pub venue: BoundedStr<MAX_VENUE_LEN>,
    // Integers stored as LE bytes to keep alignment 1.
    date: [u8; 8],
    total_tickets: [u8; 4],
    available_tickets: [u8; 4],
    base_price: [u8; 8],
    /// Address of the event account itself.
    pub event_id: Pubkey,
    pub organizer_id: Pubkey,
    pub payer: Pubkey,
}

// Safety: repr(C), only u8/byte-array fields.
unsafe impl Transmutable for Event {}

impl Event {
    pub const fn size() -> usize {
        core::mem::size_of::<Event>()
    }

    /// A freshly listed event: undated, active, every ticket available.
    pub fn new(
        name: BoundedStr<MAX_NAME_LEN>,
        venue: BoundedStr<MAX_VENUE_LEN>,
        total_tickets: u32,
        base_price: u64,
        event_id: Pubkey,
        organizer_id: Pubkey,
        payer: Pubkey,
    ) -> Self {
        Self {
            kind: AccountKind::Event as u8,
            is_active: 1,
            name,
            venue,
            date: 0i64.to_le_bytes(),
            total_tickets: total_tickets.to_le_bytes(),
            available_tickets: total_tickets.to_le_bytes(),
            base_price: base_price.to_le_bytes(),
            event_id,
            organizer_id,
            payer,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    pub fn date(&self) -> i64 {
        i64::from_le_bytes(self.date)
    }

    pub fn total_tickets(&self) -> u32 {
        u32::from_le_bytes(self.total_tickets)
    }

    pub fn available_tickets(&self) -> u32 {
        u32::from_le_bytes(self.available_tickets)
    }

    pub fn base_price(&self) -> u64 {
        u64::from_le_bytes(self.base_price)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, ProgramError> {
        let event = Self::load(bytes)?;
        match AccountKind::try_from(event.kind)? {
            AccountKind::Event => Ok(event),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}
