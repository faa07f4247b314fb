use super::{Error, ErrorKind};

/// A view over the unconsumed tail of an input buffer, together with the offset of that tail
/// from the start of the buffer.
///
/// Reads never mutate a cursor; they hand back the decoded bytes along with a new cursor
/// positioned past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCursor<'a> {
    remaining: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            remaining: buffer,
            offset: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn read_fixed(self, width: usize) -> Result<(&'a [u8], Self), Error> {
        if self.remaining.len() < width {
            return Err(ErrorKind::TruncatedInput {
                offset: self.offset,
                expected: width,
                available: self.remaining.len(),
            }
            .into());
        }
        let (bytes, remaining) = self.remaining.split_at(width);
        Ok((
            bytes,
            Self {
                remaining,
                offset: self.offset + width,
            },
        ))
    }

    pub fn read_array<const N: usize>(self) -> Result<([u8; N], Self), Error> {
        let (bytes, next) = self.read_fixed(N)?;
        let mut array = [0; N];
        array.copy_from_slice(bytes);
        Ok((array, next))
    }
}
