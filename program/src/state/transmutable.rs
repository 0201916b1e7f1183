use pinocchio::program_error::ProgramError;

/// Zero-copy view of account bytes as `&Self`.
///
/// # Safety
/// Implementors must be `#[repr(C)]`, have alignment 1, be exactly `LEN`
/// bytes, and accept any bit pattern (store enums and integers as raw bytes).
pub unsafe trait Transmutable: Sized {
    const LEN: usize = core::mem::size_of::<Self>();

    #[inline(always)]
    fn load(bytes: &[u8]) -> Result<&Self, ProgramError> {
        if bytes.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // Safety: length checked, alignment 1, every bit pattern valid.
        Ok(unsafe { &*(bytes.as_ptr() as *const Self) })
    }

    #[inline(always)]
    fn load_mut(bytes: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if bytes.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // Safety: as above, and `bytes` is uniquely borrowed.
        Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut Self) })
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        // Safety: `Self` is plain bytes of length `LEN`.
        unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) }
    }
}
