//! SEG2 container layout: signatures, field offsets and reserved regions.
//!
//! All multi-byte fields are little-endian. Offsets in the file descriptor
//! are relative to the start of the file; offsets in a trace descriptor are
//! relative to that descriptor's trace pointer.

/// File descriptor block signature (bytes 0-1).
pub const FILE_DESCRIPTOR_MAGIC: u16 = 0x3A55;

/// Revision number.
pub const FILE_REVISION: usize = 0x02;
/// Declared size M of the trace-pointer sub-block.
pub const FILE_POINTER_BLOCK_SIZE: usize = 0x04;
/// Number of traces N.
pub const FILE_TRACE_COUNT: usize = 0x06;
/// Reserved region between the trace count and the first trace pointer.
pub const FILE_RESERVED_LEN: usize = 0x18;
/// First entry of the trace-pointer sub-block.
pub const FILE_TRACE_POINTERS: usize = FILE_TRACE_COUNT + 2 + FILE_RESERVED_LEN;
/// Width of one trace pointer.
pub const TRACE_POINTER_WIDTH: usize = 4;

/// Trace descriptor block signature.
pub const TRACE_DESCRIPTOR_MAGIC: u16 = 0x4422;

/// Block header size X; sample data starts at `pointer + X`.
pub const TRACE_HEADER_SIZE: usize = 0x02;
/// Declared data block size Y in bytes.
pub const TRACE_DATA_BLOCK_SIZE: usize = 0x04;
/// Number of samples NS.
pub const TRACE_SAMPLE_COUNT: usize = 0x08;
/// Data format code. Only the first byte of the slot is meaningful.
pub const TRACE_DATA_FORMAT: usize = 0x0C;
/// Width of the data format slot (1 code byte + 3 reserved bytes).
pub const TRACE_DATA_FORMAT_SLOT: usize = 4;
/// Reserved region following the data format slot.
pub const TRACE_RESERVED_LEN: usize = 0x10;
/// Start of the free-format string region.
pub const TRACE_STRINGS: usize = TRACE_DATA_FORMAT + TRACE_DATA_FORMAT_SLOT + TRACE_RESERVED_LEN;

/// Free-format token holding the sample interval in seconds.
pub const SAMPLE_INTERVAL_KEY: &str = "SAMPLE_INTERVAL";
