use pinocchio::program_error::ProgramError;

/// Fixed-capacity UTF-8 text stored inline in account data: one length byte
/// followed by `N` bytes, unused tail zeroed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedStr<const N: usize> {
    len: u8,
    bytes: [u8; N],
}

impl<const N: usize> BoundedStr<N> {
    const CAPACITY_FITS_LEN_BYTE: () = assert!(N <= u8::MAX as usize);

    pub const fn empty() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_FITS_LEN_BYTE;
        Self { len: 0, bytes: [0; N] }
    }

    /// `None` when `value` is longer than `N` bytes.
    pub fn try_from_str(value: &str) -> Option<Self> {
        let src = value.as_bytes();
        if src.len() > N {
            return None;
        }
        let mut out = Self::empty();
        out.bytes[..src.len()].copy_from_slice(src);
        out.len = src.len() as u8;
        Some(out)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> Result<&str, ProgramError> {
        let bytes = self
            .bytes
            .get(..self.len())
            .ok_or(ProgramError::InvalidAccountData)?;
        core::str::from_utf8(bytes).map_err(|_| ProgramError::InvalidAccountData)
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::empty()
    }
}
