//! Decode SEG2 files from raw bytes.
//!
//! The main entry point is [`decode()`], which parses the file descriptor,
//! every trace descriptor and every sample payload into a [`DecodedFile`].
//! For lazy per-channel access see [`Seg2Reader`](crate::Seg2Reader).

use log::{debug, trace};

use crate::bytes::{read_f32, read_f64, read_i16, read_i32, read_u8, read_u16, read_u32, slice};
use crate::layout::*;
use crate::reader::Seg2Reader;
use crate::record::{DecodedFile, Samples};
use crate::types::DataFormat;
use crate::{Result, Seg2Error};

/// SEG2 file descriptor block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub revision: u16,
    /// Declared size M of the trace-pointer sub-block in bytes.
    pub pointer_block_size: u16,
    /// Absolute offsets of the trace descriptor blocks, one per channel.
    pub trace_pointers: Vec<u32>,
}

impl FileHeader {
    /// Number of traces N.
    pub fn trace_count(&self) -> usize {
        self.trace_pointers.len()
    }
}

/// Parsed trace descriptor block of one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceDescriptor {
    /// Absolute offset of this block.
    pub pointer: u32,
    /// Block header size X.
    pub header_size: u16,
    /// Declared data block size Y. Informational only.
    pub data_block_size: u32,
    /// Declared sample count NS.
    pub sample_count: u32,
    pub format: DataFormat,
    pub free_strings: Vec<String>,
}

impl TraceDescriptor {
    /// Absolute offset of the first sample.
    pub fn data_offset(&self) -> usize {
        self.pointer as usize + self.header_size as usize
    }
}

/// Decode a complete SEG2 file.
///
/// Every channel is decoded; the first failing channel aborts the whole
/// decode.
pub fn decode(data: &[u8]) -> Result<DecodedFile> {
    let reader = Seg2Reader::new(data)?;
    let traces = reader.traces().collect::<Result<Vec<_>>>()?;
    Ok(DecodedFile {
        header: reader.header().clone(),
        acquisition: reader.acquisition(),
        free_strings: reader.free_strings().to_vec(),
        traces,
    })
}

/// Parse the file descriptor block and the trace-pointer sub-block.
pub fn parse_file_header(data: &[u8]) -> Result<FileHeader> {
    let magic = read_u16(data, 0)?;
    if magic != FILE_DESCRIPTOR_MAGIC {
        return Err(Seg2Error::InvalidFileMagic { found: magic });
    }

    let revision = read_u16(data, FILE_REVISION)?;
    let pointer_block_size = read_u16(data, FILE_POINTER_BLOCK_SIZE)?;
    let trace_count = read_u16(data, FILE_TRACE_COUNT)? as usize;

    let trace_pointers = (0..trace_count)
        .map(|i| read_u32(data, FILE_TRACE_POINTERS + i * TRACE_POINTER_WIDTH))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "file descriptor: revision {revision}, M = {pointer_block_size}, N = {trace_count}"
    );

    Ok(FileHeader {
        revision,
        pointer_block_size,
        trace_pointers,
    })
}

/// Parse the trace descriptor block at `pointer`, without its samples.
pub fn parse_trace_descriptor(
    data: &[u8],
    channel: usize,
    pointer: u32,
) -> Result<TraceDescriptor> {
    let base = pointer as usize;

    let magic = read_u16(data, base)?;
    if magic != TRACE_DESCRIPTOR_MAGIC {
        return Err(Seg2Error::InvalidTraceDescriptorMagic {
            channel,
            offset: base,
            found: magic,
        });
    }

    let header_size = read_u16(data, base + TRACE_HEADER_SIZE)?;
    let data_block_size = read_u32(data, base + TRACE_DATA_BLOCK_SIZE)?;
    let sample_count = read_u32(data, base + TRACE_SAMPLE_COUNT)?;
    // 4-byte slot; the 3 bytes after the code are reserved
    let format_code = read_u8(data, base + TRACE_DATA_FORMAT)?;
    let format = DataFormat::from_code(format_code)?;

    if (header_size as usize) < TRACE_STRINGS {
        return Err(Seg2Error::TraceHeaderTooSmall {
            channel,
            size: header_size,
        });
    }
    let region = slice(data, base + TRACE_STRINGS, base + header_size as usize)?;
    let free_strings = parse_free_strings(region);

    debug!(
        "channel {channel}: X = {header_size}, Y = {data_block_size}, NS = {sample_count}, {format}, {} strings",
        free_strings.len()
    );

    Ok(TraceDescriptor {
        pointer,
        header_size,
        data_block_size,
        sample_count,
        format,
        free_strings,
    })
}

/// Decode the sample payload that starts at `pointer + X`.
pub fn decode_samples(data: &[u8], descriptor: &TraceDescriptor) -> Result<Samples> {
    let start = descriptor.data_offset();
    let count = descriptor.sample_count as usize;
    let width = descriptor.format.sample_width();

    // Reject a corrupt NS before allocating for it.
    let fits = count
        .checked_mul(width)
        .and_then(|len| start.checked_add(len))
        .is_some_and(|end| end <= data.len());
    if !fits {
        return Err(Seg2Error::OutOfBounds {
            offset: start,
            width: count.saturating_mul(width),
            len: data.len(),
        });
    }

    let offsets = (0..count).map(|i| start + i * width);
    let samples = match descriptor.format {
        DataFormat::Int16 => Samples::Int(
            offsets
                .map(|p| read_i16(data, p).map(i32::from))
                .collect::<Result<_>>()?,
        ),
        DataFormat::Int32 => {
            Samples::Int(offsets.map(|p| read_i32(data, p)).collect::<Result<_>>()?)
        }
        DataFormat::Float32 => {
            Samples::Float(offsets.map(|p| read_f32(data, p)).collect::<Result<_>>()?)
        }
        DataFormat::Float64 => {
            Samples::Double(offsets.map(|p| read_f64(data, p)).collect::<Result<_>>()?)
        }
    };

    trace!(
        "decoded {} {} samples at offset {start}",
        samples.len(),
        descriptor.format
    );
    Ok(samples)
}

/// Split a free-format region into its null-terminated strings.
///
/// Runs of one byte or less are padding (including the 2-byte string
/// offsets that precede each string) and are dropped, as is any trailing run
/// without a terminator. Bytes map to chars one-to-one.
pub fn parse_free_strings(region: &[u8]) -> Vec<String> {
    let terminated = region.iter().filter(|&&b| b == 0).count();
    region
        .split(|&b| b == 0)
        .take(terminated)
        .filter(|run| run.len() > 1)
        .map(|run| run.iter().map(|&b| char::from(b)).collect())
        .collect()
}

/// Find the value following a `SAMPLE_INTERVAL` token.
///
/// When several strings carry the token the last usable one wins. The value
/// is read from the longest numeric prefix of the token, so `0.001s` gives
/// `0.001`. Only a finite, positive interval counts; anything else is ignored.
pub fn find_sample_interval(strings: &[String]) -> Option<f64> {
    strings
        .iter()
        .filter_map(|s| {
            let mut tokens = s.split_whitespace();
            tokens.position(|t| t == SAMPLE_INTERVAL_KEY)?;
            parse_float_prefix(tokens.next()?).filter(|v| v.is_finite() && *v > 0.0)
        })
        .last()
}

/// Parse the longest prefix of `token` that is a valid `f64`.
fn parse_float_prefix(token: &str) -> Option<f64> {
    (1..=token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .find_map(|end| token[..end].parse().ok())
}
