use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};

use crate::ID;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

#[inline]
pub fn expect_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline]
pub fn expect_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

#[inline]
pub fn expect_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// A fresh account: no data and still owned by the system program.
#[inline]
pub fn expect_uninitialized(account: &AccountInfo) -> ProgramResult {
    if !account.data_is_empty() || !account.is_owned_by(&pinocchio_system::ID) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    Ok(())
}

#[inline]
pub fn expect_program_owned(account: &AccountInfo) -> ProgramResult {
    if !account.is_owned_by(&ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    Ok(())
}

/// Allocates `space` bytes for `new_account`, funded rent-exempt by `payer`
/// and assigned to this program. Both accounts must sign the transaction.
pub fn create_program_account(
    payer: &AccountInfo,
    new_account: &AccountInfo,
    space: usize,
) -> ProgramResult {
    let lamports = Rent::get()?.minimum_balance(space);

    pinocchio_system::instructions::CreateAccount {
        from: payer,
        to: new_account,
        lamports,
        space: space as u64,
        owner: &ID,
    }
    .invoke()
}
