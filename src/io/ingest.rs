//! Dataset ingest.
//!
//! Turns a delimited text file into a `Dataset`: one integer label and a row of
//! features per non-blank line, in input order.
//!
//! Design goals:
//! - **Permissive tokens**: numbers are read by leading prefix, never rejected
//! - **No header**: the first line is data
//! - **Separation of concerns**: width checks belong to the matrix builder

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info};

use crate::domain::{Dataset, RawRow, ReadOptions};
use crate::error::{AppError, EXIT_IO};
use crate::io::parse::{parse_float_prefix, parse_int_prefix};
use crate::io::split::split_fields;

/// Read `path` into a `Dataset`.
///
/// Blank lines (empty, whitespace-only, or delimiter-only) are skipped and not
/// counted as rows. With `opts.verbose` every parsed row is written to `echo`
/// as `label,f0,...,fn`.
pub fn read_dataset(path: &Path, opts: &ReadOptions, echo: &mut dyn Write) -> Result<Dataset, AppError> {
    read_opened(open_input(path)?, path, opts, echo)
}

/// Read an input already opened with `open_input`; `path` is used for messages.
pub fn read_opened<R: BufRead>(
    reader: R,
    path: &Path,
    opts: &ReadOptions,
    echo: &mut dyn Write,
) -> Result<Dataset, AppError> {
    let dataset = read_records(reader, opts, echo)
        .map_err(|e| AppError::new(e.exit_code(), format!("'{}': {e}", path.display())))?;

    info!(
        "read {} row(s) from '{}' (first row width {})",
        dataset.len(),
        path.display(),
        dataset.width()
    );
    Ok(dataset)
}

/// Open `path` for line-oriented reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("no input file : {} ({e})", path.display())))?;
    Ok(BufReader::new(file))
}

/// Parse every record from `reader`.
///
/// Lines are read as raw bytes; invalid UTF-8 is replaced before splitting, so a
/// bad byte only affects the token that contains it. I/O errors and failed echo
/// writes abort the read.
pub fn read_records<R: BufRead>(mut reader: R, opts: &ReadOptions, echo: &mut dyn Write) -> Result<Dataset, AppError> {
    let mut dataset = Dataset::default();
    let mut skipped = 0usize;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AppError::new(EXIT_IO, format!("read failed at line {}: {e}", line_no + 1)))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        let Some(row) = parse_line(line, &opts.delimiters) else {
            skipped += 1;
            continue;
        };

        if opts.verbose {
            writeln!(echo, "{}", format_echo(&row))
                .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write verbose output: {e}")))?;
        }

        dataset.push(row);
    }

    if skipped > 0 {
        debug!("skipped {skipped} blank line(s)");
    }
    Ok(dataset)
}

/// Parse one input line, or `None` if it holds no fields.
pub fn parse_line(line: &str, delimiters: &str) -> Option<RawRow> {
    if line.trim().is_empty() {
        return None;
    }

    let fields = split_fields(line, delimiters);
    let (label, rest) = fields.split_first()?;

    Some(RawRow {
        label: parse_int_prefix(label),
        features: rest.iter().map(|f| parse_float_prefix(f)).collect(),
    })
}

fn format_echo(row: &RawRow) -> String {
    let mut out = row.label.to_string();
    for v in &row.features {
        out.push(',');
        out.push_str(&v.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("temp");
        tmp.write_all(contents.as_bytes()).expect("write");
        tmp.flush().expect("flush");
        tmp
    }

    #[test]
    fn parse_line_reads_label_and_features() {
        let row = parse_line("3,1.5,abc,2.5x", ",").unwrap();
        assert_eq!(row.label, 3);
        assert_eq!(row.features, vec![1.5, 0.0, 2.5]);
    }

    #[test]
    fn parse_line_label_is_permissive() {
        let row = parse_line("abc,1.0", ",").unwrap();
        assert_eq!(row.label, 0);

        let row = parse_line("7.9,1.0", ",").unwrap();
        assert_eq!(row.label, 7);
    }

    #[test]
    fn parse_line_skips_blank_and_delimiter_only() {
        assert!(parse_line("", ",").is_none());
        assert!(parse_line("   ", ",").is_none());
        assert!(parse_line(",,", ",").is_none());
    }

    #[test]
    fn read_dataset_preserves_order_and_skips_blank_lines() {
        let tmp = write_input("1,1.0,2.0\n\n2,2.0,3.0\n\n\n3,3.0,4.0\n");
        let mut echo = Vec::new();

        let data = read_dataset(tmp.path(), &ReadOptions::default(), &mut echo).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.width(), 2);
        assert_eq!(data.labels, vec![1, 2, 3]);
        assert_eq!(data.features[2], vec![3.0, 4.0]);
        assert!(echo.is_empty());
    }

    #[test]
    fn read_dataset_handles_crlf_and_custom_delimiters() {
        let tmp = write_input("1;0.5\r\n2;1.5\r\n");
        let opts = ReadOptions {
            delimiters: ";".to_string(),
            verbose: false,
        };

        let data = read_dataset(tmp.path(), &opts, &mut std::io::sink()).unwrap();
        assert_eq!(data.features, vec![vec![0.5], vec![1.5]]);
    }

    #[test]
    fn verbose_mode_echoes_each_row() {
        let tmp = write_input("1,1.0,2.5\n2,3.0\n4\n");
        let opts = ReadOptions {
            verbose: true,
            ..ReadOptions::default()
        };
        let mut echo = Vec::new();

        read_dataset(tmp.path(), &opts, &mut echo).unwrap();

        let text = String::from_utf8(echo).unwrap();
        assert_eq!(text, "1,1,2.5\n2,3\n4\n");
    }

    #[test]
    fn invalid_utf8_only_spoils_its_own_token() {
        let mut tmp = NamedTempFile::new().expect("temp");
        tmp.write_all(b"1,1.0\n2,2.0\n3,3.0\xe9\n4,\xff4.0\n").expect("write");
        tmp.flush().expect("flush");

        let data = read_dataset(tmp.path(), &ReadOptions::default(), &mut std::io::sink()).unwrap();

        assert_eq!(data.labels, vec![1, 2, 3, 4]);
        assert_eq!(data.features, vec![vec![1.0], vec![2.0], vec![3.0], vec![0.0]]);
    }

    struct FailingReader {
        served: bool,
    }

    impl std::io::Read for FailingReader {
        fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::other("disk went away"));
            }
            self.served = true;
            let head = b"1,1.0\n2,";
            out[..head.len()].copy_from_slice(head);
            Ok(head.len())
        }
    }

    #[test]
    fn mid_file_read_error_is_an_io_error() {
        let reader = BufReader::new(FailingReader { served: false });

        let err = read_records(reader, &ReadOptions::default(), &mut std::io::sink()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
        assert!(err.message().contains("line 2"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.csv");

        let err = read_dataset(&path, &ReadOptions::default(), &mut std::io::sink()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
        assert!(err.message().contains("does-not-exist.csv"));
    }
}
