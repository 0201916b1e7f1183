use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod create_event;
pub mod create_organizer;
pub mod initialize;
#[cfg(feature = "std")]
pub mod wire;

pub use create_event::*;
pub use create_organizer::*;
pub use initialize::*;

/// Leading byte of the instruction data.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum GoodlifeInstruction {
    /// Logs a greeting naming the program id.
    Initialize,

    #[account(0, writable, signer, name = "organizer", desc = "New organizer account")]
    #[account(1, writable, signer, name = "payer", desc = "Funds the organizer account")]
    #[account(2, name = "system_program", desc = "System program")]
    CreateOrganizer,

    #[account(0, writable, signer, name = "event", desc = "New event account")]
    #[account(1, writable, name = "organizer", desc = "Active organizer hosting the event")]
    #[account(2, writable, signer, name = "payer", desc = "Funds the event account")]
    #[account(3, name = "system_program", desc = "System program")]
    CreateEvent,
}

impl TryFrom<&u8> for GoodlifeInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(GoodlifeInstruction::Initialize),
            1 => Ok(GoodlifeInstruction::CreateOrganizer),
            2 => Ok(GoodlifeInstruction::CreateEvent),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
