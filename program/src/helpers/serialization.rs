use pinocchio::program_error::ProgramError;

/// Cursor over instruction payload bytes laid out the way `bincode` 1.x
/// encodes with its default options: fixed-width little-endian integers and
/// `u64` length prefixes for strings.
///
/// Decoding borrows from the payload, so no heap is needed on-chain.
pub struct PayloadReader<'a> {
    data: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        if self.data.len() < len {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ProgramError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    pub fn read_u32(&mut self) -> Result<u32, ProgramError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, ProgramError> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Length-prefixed UTF-8 string.
    pub fn read_str(&mut self) -> Result<&'a str, ProgramError> {
        let len = self.read_u64()?;
        let len = usize::try_from(len).map_err(|_| ProgramError::InvalidInstructionData)?;
        let bytes = self.read_bytes(len)?;
        core::str::from_utf8(bytes).map_err(|_| ProgramError::InvalidInstructionData)
    }
}
