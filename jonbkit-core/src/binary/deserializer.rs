use super::{ByteCursor, Error, ResultContextExt};

/// Owns the single active [`ByteCursor`] during a decode and swaps in the advanced cursor
/// after every read.
#[derive(Debug, Clone, Copy)]
pub struct Deserializer<'a> {
    stream_len: usize,
    cursor: ByteCursor<'a>,
}

impl<'a> Deserializer<'a> {
    pub fn from_buffer(buffer: &'a [u8]) -> Self {
        Self::from(ByteCursor::new(buffer))
    }

    pub fn stream_len(&self) -> usize {
        self.stream_len
    }

    pub fn stream_position(&self) -> usize {
        self.cursor.offset()
    }

    pub fn into_cursor(self) -> ByteCursor<'a> {
        self.cursor
    }

    pub fn read_bytes(&mut self, width: usize) -> Result<&'a [u8], Error> {
        let (bytes, next) = self.cursor.read_fixed(width)?;
        self.cursor = next;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let (array, next) = self.cursor.read_array::<N>()?;
        self.cursor = next;
        Ok(array)
    }

    /// Deserializes `count` consecutive values of `T`. `what` names a single element in error
    /// context frames.
    pub fn deserialize_many<T>(&mut self, count: usize, what: &str) -> Result<Vec<T>, Error>
    where
        T: super::Deserialize,
    {
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(
                self.deserialize()
                    .with_context(|| format!("cannot deserialize {what} {i} (of {count})"))?,
            );
        }
        Ok(values)
    }
}

impl<'a> From<ByteCursor<'a>> for Deserializer<'a> {
    fn from(cursor: ByteCursor<'a>) -> Self {
        Self {
            stream_len: cursor.offset() + cursor.remaining().len(),
            cursor,
        }
    }
}
