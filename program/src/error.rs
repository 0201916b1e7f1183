use pinocchio::program_error::ProgramError;

/// Program-specific failures, surfaced to clients as `ProgramError::Custom`.
///
/// Codes start at 6000 so existing clients decoding the event-management
/// errors keep working.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GoodlifeError {
    OrganizerNotActive = 6000,
    InvalidName,
    /// Reserved: no instruction accepts a date yet.
    InvalidDate,
    InvalidVenue,
    InvalidTotalTickets,
    NameTooLong,
    VenueTooLong,
}

impl GoodlifeError {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl From<GoodlifeError> for ProgramError {
    #[inline(always)]
    fn from(e: GoodlifeError) -> Self {
        ProgramError::Custom(e.code())
    }
}

impl From<GoodlifeError> for &'static str {
    fn from(value: GoodlifeError) -> Self {
        match value {
            GoodlifeError::OrganizerNotActive => "The organizer is not active",
            GoodlifeError::InvalidName => "Name is required",
            GoodlifeError::InvalidDate => "Enter a valid date",
            GoodlifeError::InvalidVenue => "Venue is required",
            GoodlifeError::InvalidTotalTickets => "Total tickets must be greater than zero",
            GoodlifeError::NameTooLong => "Name exceeds the maximum length",
            GoodlifeError::VenueTooLong => "Venue exceeds the maximum length",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for GoodlifeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{msg} ({})", self.code())
    }
}
