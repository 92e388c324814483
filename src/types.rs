//! Shared types: [`DataFormat`].

use std::fmt;

use crate::{Result, Seg2Error};

/// Sample encoding declared by a trace descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// 16-bit signed integer (code 1).
    Int16,
    /// 32-bit signed integer (code 2).
    Int32,
    /// 32-bit IEEE float (code 4).
    Float32,
    /// 64-bit IEEE double (code 5).
    Float64,
}

impl DataFormat {
    /// Convert a raw data format code to a `DataFormat`.
    ///
    /// Code 3 (20-bit packed integers) is valid SEG2 but not supported.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0x01 => Ok(Self::Int16),
            0x02 => Ok(Self::Int32),
            0x04 => Ok(Self::Float32),
            0x05 => Ok(Self::Float64),
            _ => Err(Seg2Error::UnsupportedDataFormat(code)),
        }
    }

    pub fn to_code(self) -> u8 {
        match self {
            Self::Int16 => 0x01,
            Self::Int32 => 0x02,
            Self::Float32 => 0x04,
            Self::Float64 => 0x05,
        }
    }

    /// Bytes occupied by one sample.
    pub fn sample_width(self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int16 => write!(f, "INT16"),
            Self::Int32 => write!(f, "INT32"),
            Self::Float32 => write!(f, "FLOAT32"),
            Self::Float64 => write!(f, "FLOAT64"),
        }
    }
}
