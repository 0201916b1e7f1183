use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, GoodlifeInstruction};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (tag, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match GoodlifeInstruction::try_from(tag)? {
        GoodlifeInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(program_id, accounts)
        }
        GoodlifeInstruction::CreateOrganizer => {
            msg!("Instruction: CreateOrganizer");
            instruction::create_organizer::process_create_organizer(accounts, payload)
        }
        GoodlifeInstruction::CreateEvent => {
            msg!("Instruction: CreateEvent");
            instruction::create_event::process_create_event(accounts, payload)
        }
    }
}
