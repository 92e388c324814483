//! Decoded SEG2 file types.
//!
//! [`DecodedFile`] is the owned result of one [`decode`](crate::decode)
//! call: the file header, the acquisition parameters derived from the first
//! channel, and one [`Trace`] per channel.

use std::fmt;

use crate::decode::{FileHeader, TraceDescriptor};

/// Acquisition parameters derived from channel 0's `SAMPLE_INTERVAL` string.
///
/// Both fields are 0 when the token is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AcquisitionParams {
    /// Sampling frequency in Hz, `round(1 / sample_interval)`.
    pub frequency: f64,
    /// Sample interval in seconds.
    pub sample_interval: f64,
}

impl AcquisitionParams {
    pub fn from_interval(sample_interval: f64) -> Self {
        Self {
            frequency: (1.0 / sample_interval).round(),
            sample_interval,
        }
    }

    /// True when no `SAMPLE_INTERVAL` was found.
    pub fn is_unknown(&self) -> bool {
        self.sample_interval == 0.0
    }
}

/// One decoded channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub descriptor: TraceDescriptor,
    pub samples: Samples,
}

/// A fully decoded SEG2 file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub header: FileHeader,
    pub acquisition: AcquisitionParams,
    /// Free-format strings of channel 0.
    pub free_strings: Vec<String>,
    pub traces: Vec<Trace>,
}

impl DecodedFile {
    pub fn channel_count(&self) -> usize {
        self.traces.len()
    }

    /// Longest sample array across all channels.
    pub fn sample_count(&self) -> usize {
        self.traces
            .iter()
            .map(|t| t.samples.len())
            .max()
            .unwrap_or(0)
    }

    /// Samples of `channel`, if it exists.
    pub fn samples(&self, channel: usize) -> Option<&Samples> {
        self.traces.get(channel).map(|t| &t.samples)
    }
}

impl fmt::Display for DecodedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SEG2 rev {} | {} channels | {} Hz | {} samples",
            self.header.revision,
            self.channel_count(),
            self.acquisition.frequency,
            self.sample_count(),
        )
    }
}

/// Decoded sample data.
///
/// 16-bit integers are widened to `i32`.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Int(Vec<i32>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Int(v) => v.len(),
            Samples::Float(v) => v.len(),
            Samples::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the sample at `index` as text, or `None` past the end.
    ///
    /// Infinities are spelled `Infinity` and `-Infinity`.
    pub fn format_at(&self, index: usize) -> Option<String> {
        match self {
            Samples::Int(v) => v.get(index).map(ToString::to_string),
            Samples::Float(v) => v.get(index).map(ToString::to_string).map(spell_infinity),
            Samples::Double(v) => v.get(index).map(ToString::to_string).map(spell_infinity),
        }
    }
}

fn spell_infinity(text: String) -> String {
    match text.as_str() {
        "inf" => "Infinity".to_string(),
        "-inf" => "-Infinity".to_string(),
        _ => text,
    }
}
