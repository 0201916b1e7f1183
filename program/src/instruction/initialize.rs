use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

/// Takes no accounts and no arguments; any provided are ignored.
pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    // Two log lines: the base58 id goes through the pubkey syscall, no heap.
    msg!("Greetings from:");
    pinocchio::pubkey::log(program_id);
    Ok(())
}
