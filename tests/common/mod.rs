//! Synthetic SEG2 file builder shared by unit tests, integration tests and
//! benchmarks.
#![allow(dead_code)]

/// One trace to be laid out by [`Seg2Builder`].
pub struct TraceSpec {
    pub format_code: u8,
    pub sample_count: u32,
    pub payload: Vec<u8>,
    pub strings: Vec<String>,
}

/// Builds a little-endian SEG2 buffer: file descriptor, trace pointers, then
/// one trace descriptor + payload per trace, in order.
pub struct Seg2Builder {
    revision: u16,
    traces: Vec<TraceSpec>,
}

impl Default for Seg2Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seg2Builder {
    pub fn new() -> Self {
        Self {
            revision: 1,
            traces: Vec::new(),
        }
    }

    pub fn raw_trace(
        mut self,
        format_code: u8,
        sample_count: u32,
        payload: Vec<u8>,
        strings: &[&str],
    ) -> Self {
        self.traces.push(TraceSpec {
            format_code,
            sample_count,
            payload,
            strings: strings.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn int16_trace(self, strings: &[&str], samples: &[i16]) -> Self {
        let payload = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.raw_trace(0x01, samples.len() as u32, payload, strings)
    }

    pub fn int32_trace(self, strings: &[&str], samples: &[i32]) -> Self {
        let payload = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.raw_trace(0x02, samples.len() as u32, payload, strings)
    }

    pub fn float32_trace(self, strings: &[&str], samples: &[f32]) -> Self {
        let payload = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.raw_trace(0x04, samples.len() as u32, payload, strings)
    }

    pub fn float64_trace(self, strings: &[&str], samples: &[f64]) -> Self {
        let payload = samples.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.raw_trace(0x05, samples.len() as u32, payload, strings)
    }

    pub fn build(&self) -> Vec<u8> {
        let n = self.traces.len();
        let mut out = Vec::new();
        out.extend_from_slice(&0x3A55u16.to_le_bytes());
        out.extend_from_slice(&self.revision.to_le_bytes());
        out.extend_from_slice(&((n * 4) as u16).to_le_bytes());
        out.extend_from_slice(&(n as u16).to_le_bytes());
        out.extend_from_slice(&[0u8; 24]);
        let pointers_at = out.len();
        out.resize(pointers_at + n * 4, 0);

        for (i, trace) in self.traces.iter().enumerate() {
            let pointer = out.len() as u32;
            let slot = pointers_at + i * 4;
            out[slot..slot + 4].copy_from_slice(&pointer.to_le_bytes());

            let strings = encode_strings(&trace.strings);
            let header_size = (32 + strings.len()) as u16;
            out.extend_from_slice(&0x4422u16.to_le_bytes());
            out.extend_from_slice(&header_size.to_le_bytes());
            out.extend_from_slice(&(trace.payload.len() as u32).to_le_bytes());
            out.extend_from_slice(&trace.sample_count.to_le_bytes());
            out.extend_from_slice(&[trace.format_code, 0, 0, 0]);
            out.extend_from_slice(&[0u8; 16]);
            out.extend_from_slice(&strings);
            out.extend_from_slice(&trace.payload);
        }
        out
    }
}

/// Each string as `[offset lo, offset hi, text..., 0]`, padded to 4 bytes.
fn encode_strings(strings: &[String]) -> Vec<u8> {
    let mut out = Vec::new();
    for s in strings {
        let offset = (s.len() + 3) as u16;
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(s.as_bytes());
        out.push(0);
    }
    while out.len() % 4 != 0 {
        out.push(0);
    }
    out
}

/// Absolute offset of trace `index`'s descriptor.
pub fn trace_pointer(data: &[u8], index: usize) -> usize {
    let at = 32 + index * 4;
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]) as usize
}
