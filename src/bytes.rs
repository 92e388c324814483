//! Little-endian primitive reads at an explicit offset.
//!
//! Every read is bounds-checked: a read whose `offset + width` runs past the
//! end of the buffer returns [`Seg2Error::OutOfBounds`]. Nothing here keeps a
//! cursor; callers advance their own offsets.

use crate::{Result, Seg2Error};

/// Borrow `N` bytes at `offset` as a fixed-size array.
fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(Seg2Error::OutOfBounds {
            offset,
            width: N,
            len: data.len(),
        })
}

/// Borrow the byte range `from..to`.
pub fn slice(data: &[u8], from: usize, to: usize) -> Result<&[u8]> {
    data.get(from..to).ok_or(Seg2Error::OutOfBounds {
        offset: from,
        width: to.saturating_sub(from),
        len: data.len(),
    })
}

pub fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    take::<1>(data, offset).map(|b| b[0])
}

pub fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    take(data, offset).map(u16::from_le_bytes)
}

pub fn read_i16(data: &[u8], offset: usize) -> Result<i16> {
    take(data, offset).map(i16::from_le_bytes)
}

pub fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    take(data, offset).map(u32::from_le_bytes)
}

pub fn read_i32(data: &[u8], offset: usize) -> Result<i32> {
    take(data, offset).map(i32::from_le_bytes)
}

pub fn read_f32(data: &[u8], offset: usize) -> Result<f32> {
    take(data, offset).map(f32::from_le_bytes)
}

pub fn read_f64(data: &[u8], offset: usize) -> Result<f64> {
    take(data, offset).map(f64::from_le_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_integers() {
        let data = [0x55, 0x3A, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x80];
        assert_eq!(read_u16(&data, 0).unwrap(), 0x3A55);
        assert_eq!(read_i16(&data, 2).unwrap(), -1);
        assert_eq!(read_u16(&data, 2).unwrap(), 0xFFFF);
        assert_eq!(read_u32(&data, 4).unwrap(), 0x8000_0001);
        assert_eq!(read_i32(&data, 4).unwrap(), i32::MIN + 1);
        assert_eq!(read_u8(&data, 7).unwrap(), 0x80);
    }

    #[test]
    fn test_ieee_floats() {
        let mut data = 1.5f32.to_le_bytes().to_vec();
        data.extend_from_slice(&(-0.25f64).to_le_bytes());
        assert_eq!(read_f32(&data, 0).unwrap(), 1.5);
        assert_eq!(read_f64(&data, 4).unwrap(), -0.25);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0u8; 6];
        assert_eq!(
            read_u32(&data, 4),
            Err(Seg2Error::OutOfBounds {
                offset: 4,
                width: 4,
                len: 6
            })
        );
        assert!(read_f64(&data, 0).is_err());
        assert!(read_u8(&data, 6).is_err());
        assert!(read_u16(&data, usize::MAX).is_err());
    }

    #[test]
    fn test_slice_bounds() {
        let data = [1u8, 2, 3, 4];
        assert_eq!(slice(&data, 1, 3).unwrap(), &[2u8, 3]);
        assert_eq!(slice(&data, 4, 4).unwrap(), &[] as &[u8]);
        assert!(slice(&data, 3, 5).is_err());
        assert!(slice(&data, 3, 2).is_err());
    }
}
