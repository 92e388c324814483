//! Error types for SEG2 decoding.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Seg2Error {
    #[error("invalid SEG2 file: file descriptor signature {found:#06X} (expected 0x3A55)")]
    InvalidFileMagic { found: u16 },

    #[error(
        "invalid trace descriptor for channel {channel} at offset {offset}: signature {found:#06X} (expected 0x4422)"
    )]
    InvalidTraceDescriptorMagic {
        channel: usize,
        offset: usize,
        found: u16,
    },

    #[error("read of {width} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("unsupported data format code: {0:#04X}")]
    UnsupportedDataFormat(u8),

    #[error("trace descriptor for channel {channel} declares header size {size}, smaller than the fixed block")]
    TraceHeaderTooSmall { channel: usize, size: u16 },

    #[error("channel {channel} out of range: file has {count} channels")]
    ChannelOutOfRange { channel: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, Seg2Error>;
