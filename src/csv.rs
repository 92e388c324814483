//! Render a [`DecodedFile`] as commented CSV text.
//!
//! The layout is a `#`-prefixed header block describing the acquisition,
//! one column-header row, then one row per sample index. Channels that end
//! early leave empty cells.

use chrono::{NaiveDateTime, Utc};

use crate::record::DecodedFile;

/// Free-format strings copied into the header, at most.
pub const MAX_METADATA_LINES: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepend a `Time(s)` column. Default: `true`.
    pub include_time_column: bool,
    /// Timestamp written to the `Export Date` line. `None` uses the current
    /// UTC time.
    pub export_date: Option<NaiveDateTime>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self {
            include_time_column: true,
            export_date: None,
        }
    }

    pub fn with_time_column(mut self, include: bool) -> Self {
        self.include_time_column = include;
        self
    }

    pub fn with_export_date(mut self, date: NaiveDateTime) -> Self {
        self.export_date = Some(date);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `file` as CSV. Lines are joined with `\n`, without a trailing
/// newline.
pub fn render(file: &DecodedFile, options: &RenderOptions) -> String {
    let interval = file.acquisition.sample_interval;
    let sample_count = file.sample_count();
    let channels = file.channel_count();
    let date = options
        .export_date
        .unwrap_or_else(|| Utc::now().naive_utc());

    let mut lines = vec![
        "# SEG2 Data Export".to_string(),
        format!("# Export Date: {}", date.format(DATE_FORMAT)),
        "# Format: SEG2".to_string(),
        "#".to_string(),
        "# === Acquisition Settings ===".to_string(),
        format!("# Sampling Frequency: {} Hz", file.acquisition.frequency),
        format!("# Sample Interval: {interval} s"),
        format!("# Number of Samples: {sample_count}"),
        format!("# Number of Channels: {channels}"),
        format!("# Record Length: {:.6} s", sample_count as f64 * interval),
        "#".to_string(),
    ];

    if !file.free_strings.is_empty() {
        lines.push("# === SEG2 Metadata ===".to_string());
        lines.extend(
            file.free_strings
                .iter()
                .take(MAX_METADATA_LINES)
                .flat_map(|s| comment_lines(s)),
        );
        lines.push("#".to_string());
    }

    lines.push(column_headers(channels, options.include_time_column).join(","));

    lines.reserve(sample_count);
    for index in 0..sample_count {
        let mut row = Vec::with_capacity(channels + 1);
        if options.include_time_column {
            row.push(format!("{:.9}", index as f64 * interval));
        }
        row.extend(
            file.traces
                .iter()
                .map(|t| t.samples.format_at(index).unwrap_or_default()),
        );
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Comment out every physical line of a free-format string. NOTE strings
/// may carry their own `\r\n`, `\n` or `\r` breaks.
fn comment_lines(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split("\r\n")
        .flat_map(|line| line.split(['\n', '\r']))
        .map(|line| format!("# {line}"))
}

fn column_headers(channels: usize, include_time: bool) -> Vec<String> {
    include_time
        .then(|| "Time(s)".to_string())
        .into_iter()
        .chain((1..=channels).map(|ch| format!("CH{ch}")))
        .collect()
}
