use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{
    error::GoodlifeError,
    helpers::*,
    state::{BoundedStr, Event, Organizer, Transmutable},
};

/// Instruction arguments describing the event to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventAttribute<'a> {
    pub name: &'a str,
    pub venue: &'a str,
    pub total_tickets: u32,
    pub base_price: u64,
}

impl<'a> EventAttribute<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        let mut reader = PayloadReader::new(payload);
        Ok(Self {
            name: reader.read_str()?,
            venue: reader.read_str()?,
            total_tickets: reader.read_u32()?,
            base_price: reader.read_u64()?,
        })
    }

    /// Required fields first, then storage limits.
    pub fn validate(
        &self,
    ) -> Result<(BoundedStr<MAX_NAME_LEN>, BoundedStr<MAX_VENUE_LEN>), GoodlifeError> {
        if self.name.is_empty() {
            return Err(GoodlifeError::InvalidName);
        }
        if self.venue.is_empty() {
            return Err(GoodlifeError::InvalidVenue);
        }
        if self.total_tickets == 0 {
            return Err(GoodlifeError::InvalidTotalTickets);
        }
        let name = BoundedStr::try_from_str(self.name).ok_or(GoodlifeError::NameTooLong)?;
        let venue = BoundedStr::try_from_str(self.venue).ok_or(GoodlifeError::VenueTooLong)?;
        Ok((name, venue))
    }
}

pub fn process_create_event(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [event_info, organizer_info, payer_info, system_program_info, _rest @ ..] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let props = EventAttribute::parse(payload)?;

    expect_signer(event_info)?;
    expect_writable(event_info)?;
    expect_writable(organizer_info)?;
    expect_signer(payer_info)?;
    expect_writable(payer_info)?;
    expect_system_program(system_program_info)?;
    expect_uninitialized(event_info)?;
    expect_program_owned(organizer_info)?;

    {
        let data = organizer_info.try_borrow_data()?;
        let organizer = Organizer::from_bytes(&data)?;
        if !organizer.is_active() {
            return Err(GoodlifeError::OrganizerNotActive.into());
        }
    }

    let (name, venue) = props.validate()?;

    create_program_account(payer_info, event_info, EVENT_SPACE)?;

    let mut data = event_info.try_borrow_mut_data()?;
    let event = Event::load_mut(&mut data)?;
    *event = Event::new(
        name,
        venue,
        props.total_tickets,
        props.base_price,
        *event_info.key(),
        *organizer_info.key(),
        *payer_info.key(),
    );

    log!(
        "create_event: tickets={} base_price={}",
        props.total_tickets,
        props.base_price
    );
    Ok(())
}
