//! Pure Rust SEG2 decoder and CSV exporter.
//!
//! Zero `unsafe`. Parses the SEG2 file descriptor, trace-pointer sub-block
//! and trace descriptor blocks from an in-memory buffer, decodes INT16/32
//! and FLOAT32/64 sample payloads, and renders the channels as commented
//! CSV. Every read is bounds-checked.
//!
//! # Decoding a file
//!
//! ```
//! use seg2_rs::{decode, Samples};
//!
//! // A one-channel file: descriptor, pointer table, trace block, 2 samples
//! let mut data = vec![0x55, 0x3A, 1, 0, 4, 0, 1, 0];
//! data.extend_from_slice(&[0; 24]);
//! data.extend_from_slice(&36u32.to_le_bytes());
//! data.extend_from_slice(&[0x22, 0x44, 32, 0, 4, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0]);
//! data.extend_from_slice(&[0; 16]);
//! data.extend_from_slice(&[7, 0, 0xF9, 0xFF]);
//!
//! let file = decode(&data).unwrap();
//! assert_eq!(file.channel_count(), 1);
//! assert_eq!(file.samples(0), Some(&Samples::Int(vec![7, -7])));
//! assert_eq!(file.acquisition.frequency, 0.0);
//! ```
//!
//! # Rendering CSV
//!
//! ```
//! use seg2_rs::{decode, render, RenderOptions};
//!
//! let mut data = vec![0x55, 0x3A, 1, 0, 0, 0, 0, 0];
//! data.extend_from_slice(&[0; 24]);
//!
//! let file = decode(&data).unwrap();
//! let csv = render(&file, &RenderOptions::new().with_time_column(false));
//! assert!(csv.starts_with("# SEG2 Data Export\n"));
//! ```
//!
//! # Lazy per-channel access
//!
//! ```
//! use seg2_rs::{Seg2Error, Seg2Reader};
//!
//! let mut data = vec![0x55, 0x3A, 1, 0, 0, 0, 0, 0];
//! data.extend_from_slice(&[0; 24]);
//!
//! let reader = Seg2Reader::new(&data).unwrap();
//! assert_eq!(reader.channel_count(), 0);
//! assert!(matches!(
//!     reader.trace(0),
//!     Err(Seg2Error::ChannelOutOfRange { channel: 0, count: 0 })
//! ));
//! ```

pub mod batch;
pub mod bytes;
pub mod csv;
pub mod decode;
pub mod error;
pub mod layout;
pub mod reader;
pub mod record;
pub mod types;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod testutil;

pub use batch::{
    BatchReport, ConvertedFile, FailedFile, convert, convert_batch, csv_file_name,
    csv_output_path,
};
pub use csv::{RenderOptions, render};
pub use decode::{FileHeader, TraceDescriptor};
pub use error::{Result, Seg2Error};
pub use reader::Seg2Reader;
pub use record::{AcquisitionParams, DecodedFile, Samples, Trace};
pub use types::DataFormat;

pub use decode::decode;
