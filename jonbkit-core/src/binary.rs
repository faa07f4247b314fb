mod cursor;
mod deserializer;
mod error;

pub use cursor::*;
pub use deserializer::*;
pub use error::*;

pub trait Deserialize: Sized {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error>;
}

/// Types that always occupy the same number of bytes in a binary stream.
pub trait FixedSize {
    const SIZE: usize;
}

macro_rules! deserialize_primitive_le {
    ($T:ty) => {
        impl Deserialize for $T {
            fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
                let mut buf = [0; std::mem::size_of::<$T>()];
                let bytes = deserializer.read_bytes(std::mem::size_of::<$T>())?;
                buf.copy_from_slice(bytes);
                Ok(<$T>::from_le_bytes(buf))
            }
        }

        impl FixedSize for $T {
            const SIZE: usize = std::mem::size_of::<$T>();
        }
    };
}

deserialize_primitive_le!(u8);
deserialize_primitive_le!(u16);
deserialize_primitive_le!(u32);
deserialize_primitive_le!(u64);

deserialize_primitive_le!(i8);
deserialize_primitive_le!(i16);
deserialize_primitive_le!(i32);
deserialize_primitive_le!(i64);

deserialize_primitive_le!(f32);
deserialize_primitive_le!(f64);

impl<T, const N: usize> Deserialize for [T; N]
where
    T: Deserialize + Copy + Default,
{
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, Error> {
        let mut array = [T::default(); N];
        for (i, element) in array.iter_mut().enumerate() {
            *element = deserializer
                .deserialize()
                .with_context(|| format!("cannot deserialize array element {i} (of {N})"))?;
        }
        Ok(array)
    }
}

impl<T, const N: usize> FixedSize for [T; N]
where
    T: FixedSize,
{
    const SIZE: usize = T::SIZE * N;
}

impl<'a> Deserializer<'a> {
    pub fn deserialize<T>(&mut self) -> Result<T, Error>
    where
        T: Deserialize,
    {
        T::deserialize(self)
    }
}

pub fn deserialize<T>(buffer: &[u8]) -> Result<T, Error>
where
    T: Deserialize,
{
    T::deserialize(&mut Deserializer::from_buffer(buffer))
}

/// Deserializes a `T` from the front of `buffer`, returning the cursor over whatever bytes
/// follow it.
pub fn deserialize_prefix<T>(buffer: &[u8]) -> Result<(T, ByteCursor<'_>), Error>
where
    T: Deserialize,
{
    let mut deserializer = Deserializer::from_buffer(buffer);
    let value = T::deserialize(&mut deserializer)?;
    Ok((value, deserializer.into_cursor()))
}
