use crate::core::models::sample::Sample;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Fixed column order of the `.dat` format.
const COLUMNS: usize = 4;

#[derive(Debug, Error)]
pub enum DatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: DatParseErrorKind,
    },
    #[error("No data rows found")]
    Empty,
}

#[derive(Debug, Error)]
pub enum DatParseErrorKind {
    #[error("Expected at least 4 fields, found {found}")]
    MissingFields { found: usize },
    #[error("Invalid float in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
}

/// Reader for the whitespace-separated `T magnetization energy specific_heat`
/// series format.
///
/// Rows are trusted to be sorted by ascending temperature; unsorted input is
/// accepted as-is and will render as visually out-of-order line segments.
/// Blank lines are skipped as non-data; fields past the fourth are ignored.
pub struct DatFile;

impl DatFile {
    /// Reads all samples from `reader`.
    ///
    /// Any line that is not blank and does not parse as at least four floats
    /// fails the whole load; an input with zero data rows is rejected so the
    /// renderer never sees an empty series.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sample>, DatError> {
        let mut samples = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < COLUMNS {
                return Err(DatError::Parse {
                    line: line_num,
                    kind: DatParseErrorKind::MissingFields {
                        found: fields.len(),
                    },
                });
            }

            let mut values = [0.0; COLUMNS];
            for (column, value) in values.iter_mut().enumerate() {
                *value = fields[column].parse().map_err(|_| DatError::Parse {
                    line: line_num,
                    kind: DatParseErrorKind::InvalidFloat {
                        column: column + 1,
                        value: fields[column].to_string(),
                    },
                })?;
            }

            samples.push(Sample::new(values[0], values[1], values[2], values[3]));
        }

        if samples.is_empty() {
            return Err(DatError::Empty);
        }
        Ok(samples)
    }

    /// Opens `path` and reads all samples from it.
    pub fn load(path: &Path) -> Result<Vec<Sample>, DatError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_from_parses_all_rows_in_order() {
        let input = "1.0 0.98 -1.99 0.12\n2.0 0.91 -1.75 0.48\n2.3 0.55 -1.41 1.92\n";
        let samples = DatFile::read_from(&mut input.as_bytes()).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].temperature, 1.0);
        assert_eq!(samples[0].specific_heat, 0.12);
        assert_eq!(samples[2].temperature, 2.3);
        assert_eq!(samples[2].magnetization, 0.55);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\n1.0 0.9 -1.9 0.3\n   \n2.0 0.7 -1.4 1.1\n\n";
        let samples = DatFile::read_from(&mut input.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "1.0 0.9 -1.9 0.3 99.0 7.0\n";
        let samples = DatFile::read_from(&mut input.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].specific_heat, 0.3);
    }

    #[test]
    fn short_line_fails_with_line_number() {
        let input = "1.0 0.9 -1.9 0.3\n2.0 0.7\n";
        let result = DatFile::read_from(&mut input.as_bytes());
        assert!(matches!(
            result,
            Err(DatError::Parse {
                line: 2,
                kind: DatParseErrorKind::MissingFields { found: 2 },
            })
        ));
    }

    #[test]
    fn non_numeric_field_fails_with_column() {
        let input = "1.0 0.9 oops 0.3\n";
        let result = DatFile::read_from(&mut input.as_bytes());
        match result {
            Err(DatError::Parse {
                line: 1,
                kind: DatParseErrorKind::InvalidFloat { column, value },
            }) => {
                assert_eq!(column, 3);
                assert_eq!(value, "oops");
            }
            other => panic!("Expected InvalidFloat parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = DatFile::read_from(&mut "".as_bytes());
        assert!(matches!(result, Err(DatError::Empty)));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let result = DatFile::read_from(&mut "\n  \n\t\n".as_bytes());
        assert!(matches!(result, Err(DatError::Empty)));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = DatFile::load(&dir.path().join("non_existent.dat"));
        assert!(matches!(result, Err(DatError::Io(_))));
    }

    #[test]
    fn load_reads_a_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ising2d_vs_T.dat");
        fs::write(&path, "2.5 0.1 -1.2 0.9\n").unwrap();

        let samples = DatFile::load(&path).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].energy, -1.2);
    }
}
