use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{
    error::GoodlifeError,
    helpers::*,
    state::{BoundedStr, Organizer, Transmutable},
};

/// Instruction arguments: a length-prefixed name.
pub struct CreateOrganizerArgs<'a> {
    pub name: &'a str,
}

impl<'a> CreateOrganizerArgs<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        let mut reader = PayloadReader::new(payload);
        Ok(Self {
            name: reader.read_str()?,
        })
    }
}

pub fn process_create_organizer(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [organizer_info, payer_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let args = CreateOrganizerArgs::parse(payload)?;

    expect_signer(organizer_info)?;
    expect_writable(organizer_info)?;
    expect_signer(payer_info)?;
    expect_writable(payer_info)?;
    expect_system_program(system_program_info)?;
    expect_uninitialized(organizer_info)?;

    let name = BoundedStr::try_from_str(args.name).ok_or(GoodlifeError::NameTooLong)?;

    create_program_account(payer_info, organizer_info, ORGANIZER_SPACE)?;

    let mut data = organizer_info.try_borrow_mut_data()?;
    let organizer = Organizer::load_mut(&mut data)?;
    *organizer = Organizer::new(name, *organizer_info.key(), *payer_info.key());

    log!("create_organizer: {}", args.name);
    Ok(())
}
