//! Convert many SEG2 buffers to CSV, one failure at a time.
//!
//! Each input is decoded and rendered on its own; a file that fails is
//! recorded in the [`BatchReport`] with its name and never stops the rest.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::csv::{RenderOptions, render};
use crate::{Seg2Error, decode};

/// A successfully converted file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    /// Name of the SEG2 input.
    pub filename: String,
    /// Suggested name for the CSV output.
    pub csv_name: String,
    pub csv: String,
    pub channels: usize,
    pub samples: usize,
}

/// A file whose decode failed, tagged with its name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{filename}: {error}")]
pub struct FailedFile {
    pub filename: String,
    pub error: Seg2Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Decode and render one SEG2 buffer.
pub fn convert(
    filename: &str,
    data: &[u8],
    options: &RenderOptions,
) -> Result<ConvertedFile, FailedFile> {
    let file = decode(data).map_err(|error| FailedFile {
        filename: filename.to_string(),
        error,
    })?;
    Ok(ConvertedFile {
        filename: filename.to_string(),
        csv_name: csv_file_name(filename),
        csv: render(&file, options),
        channels: file.channel_count(),
        samples: file.sample_count(),
    })
}

/// Convert every `(filename, bytes)` input in order.
pub fn convert_batch<'a, I>(inputs: I, options: &RenderOptions) -> BatchReport
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut report = BatchReport::default();
    for (filename, data) in inputs {
        match convert(filename, data, options) {
            Ok(converted) => {
                info!(
                    "{filename}: {} channels, {} samples -> {}",
                    converted.channels, converted.samples, converted.csv_name
                );
                report.converted.push(converted);
            }
            Err(failed) => {
                warn!("{failed}");
                report.failed.push(failed);
            }
        }
    }
    report
}

/// Replace the last extension of `filename` with `.csv`.
///
/// A name without an extension gets `.csv` appended; a leading dot does not
/// count as an extension.
pub fn csv_file_name(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) if dot > 0 && !filename[dot..].contains(['/', '\\']) => &filename[..dot],
        _ => filename,
    };
    format!("{stem}.csv")
}

/// Where the CSV for `input` is written: inside `output_dir` when given,
/// next to the input otherwise.
///
/// Returns `None` when `input` has no file name or when the CSV path would
/// be `input` itself, e.g. `shot.csv` converted in place.
pub fn csv_output_path(input: &Path, output_dir: Option<&Path>) -> Option<PathBuf> {
    let csv_name = csv_file_name(&input.file_name()?.to_string_lossy());
    let output = match output_dir {
        Some(dir) => dir.join(csv_name),
        None => input.with_file_name(csv_name),
    };
    (output != input).then_some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Seg2Builder;

    #[test]
    fn test_csv_file_name() {
        assert_eq!(csv_file_name("shot01.sg2"), "shot01.csv");
        assert_eq!(csv_file_name("line.a.dat"), "line.a.csv");
        assert_eq!(csv_file_name("raw"), "raw.csv");
        assert_eq!(csv_file_name(".hidden"), ".hidden.csv");
        assert_eq!(csv_file_name("dir.v2/raw"), "dir.v2/raw.csv");
    }

    #[test]
    fn test_csv_output_path() {
        let input = Path::new("survey/shot01.sg2");
        assert_eq!(
            csv_output_path(input, None),
            Some(PathBuf::from("survey/shot01.csv"))
        );
        assert_eq!(
            csv_output_path(input, Some(Path::new("out"))),
            Some(PathBuf::from("out/shot01.csv"))
        );
        assert_eq!(csv_output_path(Path::new(".."), None), None);
    }

    #[test]
    fn test_csv_output_path_never_overwrites_input() {
        assert_eq!(csv_output_path(Path::new("survey/shot01.csv"), None), None);
        assert_eq!(
            csv_output_path(Path::new("survey/shot01.csv"), Some(Path::new("survey"))),
            None
        );
        assert_eq!(
            csv_output_path(Path::new("survey/shot01.csv"), Some(Path::new("out"))),
            Some(PathBuf::from("out/shot01.csv"))
        );
    }

    #[test]
    fn test_convert_tags_failure_with_filename() {
        let err = convert("bad.sg2", &[0u8; 40], &RenderOptions::new()).unwrap_err();
        assert_eq!(err.filename, "bad.sg2");
        assert_eq!(err.error, Seg2Error::InvalidFileMagic { found: 0 });
        assert!(err.to_string().starts_with("bad.sg2: invalid SEG2 file"));
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let good = Seg2Builder::new()
            .int16_trace(&["SAMPLE_INTERVAL 0.001"], &[1, 2])
            .build();
        let unsupported = Seg2Builder::new()
            .raw_trace(0x03, 1, vec![0; 3], &[])
            .build();
        let inputs = [
            ("a.sg2", good.as_slice()),
            ("b.sg2", unsupported.as_slice()),
            ("c.dat", &[0x55, 0x3A][..]),
            ("d.sg2", good.as_slice()),
        ];
        let report = convert_batch(inputs, &RenderOptions::new());

        assert!(!report.is_success());
        let names: Vec<_> = report
            .converted
            .iter()
            .map(|c| c.csv_name.as_str())
            .collect();
        assert_eq!(names, ["a.csv", "d.csv"]);
        assert_eq!(report.converted[0].channels, 1);
        assert_eq!(report.converted[0].samples, 2);

        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].filename, "b.sg2");
        assert_eq!(report.failed[0].error, Seg2Error::UnsupportedDataFormat(3));
        assert_eq!(report.failed[1].filename, "c.dat");
        assert!(matches!(report.failed[1].error, Seg2Error::OutOfBounds { .. }));
    }
}
