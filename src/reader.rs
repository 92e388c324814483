//! Lazy, per-channel view over a SEG2 buffer.
//!
//! [`Seg2Reader`] parses the file descriptor and the first channel's
//! metadata up front and decodes traces on demand. Use [`Seg2Reader::trace`]
//! for memoized access or [`Seg2Reader::traces`] to iterate all channels.

use std::sync::OnceLock;

use log::{debug, warn};

use crate::decode::{
    FileHeader, decode_samples, find_sample_interval, parse_file_header, parse_trace_descriptor,
};
use crate::record::{AcquisitionParams, Trace};
use crate::{Result, Seg2Error};

/// Read-only view over one SEG2 file held in memory.
///
/// Decoding a channel is a pure function of the buffer and the channel
/// index, so the cache only ever stores what a fresh decode would return.
/// The reader is `Sync` and can be shared across threads.
///
/// # Example
///
/// ```
/// use seg2_rs::{Seg2Error, Seg2Reader};
///
/// let not_seg2 = [0u8; 64];
/// assert!(matches!(
///     Seg2Reader::new(&not_seg2),
///     Err(Seg2Error::InvalidFileMagic { .. })
/// ));
/// ```
pub struct Seg2Reader<'a> {
    data: &'a [u8],
    header: FileHeader,
    acquisition: AcquisitionParams,
    free_strings: Vec<String>,
    cache: Vec<OnceLock<Trace>>,
}

impl<'a> Seg2Reader<'a> {
    /// Parse the file header and channel 0's free-format strings.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let header = parse_file_header(data)?;

        let free_strings = match header.trace_pointers.first() {
            Some(&pointer) => parse_trace_descriptor(data, 0, pointer)?.free_strings,
            None => Vec::new(),
        };

        let acquisition = match find_sample_interval(&free_strings) {
            Some(interval) => AcquisitionParams::from_interval(interval),
            None => {
                if header.trace_count() > 0 {
                    warn!("no usable SAMPLE_INTERVAL in channel 0; frequency and interval set to 0");
                }
                AcquisitionParams::default()
            }
        };
        debug!(
            "acquisition: {} Hz, interval {} s",
            acquisition.frequency, acquisition.sample_interval
        );

        let cache = (0..header.trace_count()).map(|_| OnceLock::new()).collect();

        Ok(Self {
            data,
            header,
            acquisition,
            free_strings,
            cache,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn channel_count(&self) -> usize {
        self.header.trace_count()
    }

    pub fn acquisition(&self) -> AcquisitionParams {
        self.acquisition
    }

    /// Free-format strings of channel 0.
    pub fn free_strings(&self) -> &[String] {
        &self.free_strings
    }

    /// Decode `channel` from the buffer, bypassing the cache.
    pub fn decode_trace(&self, channel: usize) -> Result<Trace> {
        let pointer = *self
            .header
            .trace_pointers
            .get(channel)
            .ok_or(Seg2Error::ChannelOutOfRange {
                channel,
                count: self.channel_count(),
            })?;
        let descriptor = parse_trace_descriptor(self.data, channel, pointer)?;
        let samples = decode_samples(self.data, &descriptor)?;
        Ok(Trace {
            descriptor,
            samples,
        })
    }

    /// Decoded `channel`, computed on first access and cached afterwards.
    ///
    /// Errors are not cached; a failing channel fails again on every call.
    pub fn trace(&self, channel: usize) -> Result<&Trace> {
        let cell = self.cache.get(channel).ok_or(Seg2Error::ChannelOutOfRange {
            channel,
            count: self.channel_count(),
        })?;
        if let Some(trace) = cell.get() {
            return Ok(trace);
        }
        let trace = self.decode_trace(channel)?;
        Ok(cell.get_or_init(|| trace))
    }

    /// Iterate over all channels in order, decoding each afresh.
    pub fn traces(&self) -> Traces<'_, 'a> {
        Traces {
            reader: self,
            next: 0,
            failed: false,
        }
    }
}

/// Iterator over the decoded channels of a [`Seg2Reader`].
///
/// Iteration stops after the first decode error.
pub struct Traces<'r, 'a> {
    reader: &'r Seg2Reader<'a>,
    next: usize,
    failed: bool,
}

impl Iterator for Traces<'_, '_> {
    type Item = Result<Trace>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.reader.channel_count() {
            return None;
        }
        let result = self.reader.decode_trace(self.next);
        self.next += 1;
        self.failed = result.is_err();
        Some(result)
    }
}
