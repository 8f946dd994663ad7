use std::str::FromStr;

use csv::{Position, ReaderBuilder, StringRecord, Trim};

use mmreport_types::{BenchmarkRecord, Field};

use crate::RowError;

//---------------------------------------------------------------------------------------------------- Parsed
/// The result of parsing a benchmark file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Parsed {
    /// Successfully parsed records, in input order.
    pub records: Vec<BenchmarkRecord>,
    /// Rows that were skipped, in input order.
    pub rejected: Vec<RejectedRow>,
}

impl Parsed {
    /// Returns `true` if no row produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A row skipped because it could not be turned into a [`BenchmarkRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the input.
    pub line: u64,
    /// The row's fields, as read.
    pub fields: Vec<String>,
    /// Why the row was rejected.
    pub error: RowError,
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Physical line holding the header.
const HEADER_LINE: u64 = 1;

/// Parse a whole benchmark file held in memory.
///
/// The first line is a header and is discarded, even when it is blank. Blank lines and lines whose
/// first field starts with `#` are skipped. Every other line either becomes a
/// record or a [`RejectedRow`], so this never fails.
///
/// ```rust
/// # use mmreport_parser::parse_records;
/// let input = b"header\n100x100,2,16,1000,600,650,1.67,1.54\nbad\n";
/// let parsed = parse_records(input);
///
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.records[0].matrix_size, 100);
/// assert_eq!(parsed.rejected.len(), 1);
/// ```
pub fn parse_records(input: &[u8]) -> Parsed {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut parsed = Parsed::default();

    for result in reader.records() {
        let (line, outcome) = match result {
            Ok(row) => {
                let line = row.position().map_or(0, Position::line);
                if line == HEADER_LINE || is_skipped(&row) {
                    continue;
                }

                let fields: Vec<&str> = row.iter().collect();
                (line, parse_fields(&fields).map_err(|e| (fields_owned(&fields), e)))
            }
            Err(e) => {
                let line = e.position().map_or(0, Position::line);
                if line == HEADER_LINE {
                    continue;
                }
                (line, Err((Vec::new(), RowError::Malformed(e.to_string()))))
            }
        };

        match outcome {
            Ok(record) => parsed.records.push(record),
            Err((fields, error)) => {
                tracing::warn!("Skipping line {line}: {fields:?} - {error}");
                parsed.rejected.push(RejectedRow {
                    line,
                    fields,
                    error,
                });
            }
        }
    }

    tracing::debug!(
        "Parsed {} records, rejected {} rows",
        parsed.records.len(),
        parsed.rejected.len()
    );

    parsed
}

/// Convert one row's fields into a [`BenchmarkRecord`].
///
/// Fields are read in column order and the first failure is returned.
/// Fields past [`Field::AsyncSpeedup`] are ignored.
///
/// # Errors
/// Returns a [`RowError`] describing the first field that is missing or invalid.
///
/// ```rust
/// # use mmreport_parser::{parse_fields, RowError};
/// # use mmreport_types::Field;
/// let record = parse_fields(&["200x200", "8", "32", "41000", "7300", "7600", "5.62", "5.39"]).unwrap();
/// assert_eq!(record.matrix_size, 200);
/// assert_eq!(record.thread_count, 8);
///
/// assert_eq!(
///     parse_fields(&["200x200", "8", "32"]),
///     Err(RowError::MissingField(Field::SequentialTime)),
/// );
/// ```
pub fn parse_fields(fields: &[&str]) -> Result<BenchmarkRecord, RowError> {
    Ok(BenchmarkRecord {
        matrix_size: matrix_size(fields)?,
        thread_count: positive(fields, Field::Threads)?,
        block_size: positive(fields, Field::BlockSize)?,
        sequential_time_us: integer(fields, Field::SequentialTime)?,
        threaded_time_us: integer(fields, Field::ThreadedTime)?,
        async_time_us: integer(fields, Field::AsyncTime)?,
        threaded_speedup: ratio(fields, Field::ThreadedSpeedup)?,
        async_speedup: ratio(fields, Field::AsyncSpeedup)?,
    })
}

//---------------------------------------------------------------------------------------------------- Private
/// Blank rows and comment rows.
fn is_skipped(row: &StringRecord) -> bool {
    match row.get(0) {
        None => true,
        Some(first) => first.starts_with('#') || row.iter().all(str::is_empty),
    }
}

fn fields_owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| (*f).to_owned()).collect()
}

fn get<'a>(fields: &[&'a str], field: Field) -> Result<&'a str, RowError> {
    fields
        .get(field.column())
        .copied()
        .map(str::trim)
        .ok_or(RowError::MissingField(field))
}

/// `"<N>x<N>"`, only `N` before the first `x` is read.
fn matrix_size(fields: &[&str]) -> Result<u32, RowError> {
    let raw = get(fields, Field::Matrix)?;
    let size = raw.split_once('x').map_or(raw, |(size, _)| size).trim();
    check_positive(Field::Matrix, size, parse_integer(Field::Matrix, size)?)
}

fn integer<T>(fields: &[&str], field: Field) -> Result<T, RowError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    parse_integer(field, get(fields, field)?)
}

fn parse_integer<T>(field: Field, raw: &str) -> Result<T, RowError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse().map_err(|source| RowError::InvalidInteger {
        field,
        value: raw.to_owned(),
        source,
    })
}

fn positive(fields: &[&str], field: Field) -> Result<u32, RowError> {
    let raw = get(fields, field)?;
    check_positive(field, raw, parse_integer(field, raw)?)
}

fn check_positive(field: Field, raw: &str, value: u32) -> Result<u32, RowError> {
    if value == 0 {
        return Err(RowError::NotPositive {
            field,
            value: raw.to_owned(),
        });
    }

    Ok(value)
}

fn ratio(fields: &[&str], field: Field) -> Result<f64, RowError> {
    let raw = get(fields, field)?;

    let value: f64 = raw.parse().map_err(|source| RowError::InvalidFloat {
        field,
        value: raw.to_owned(),
        source,
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(RowError::NotPositive {
            field,
            value: raw.to_owned(),
        });
    }

    Ok(value)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use mmreport_test_utils::{
        data::{COMPARE_BLOCKS, COMPARE_BLOCKS_ROWS, COMPARE_THREADS, COMPARE_THREADS_ROWS, HEADER},
        record::{record, to_csv_line},
    };

    use super::*;

    fn parse_str(s: &str) -> Parsed {
        parse_records(s.as_bytes())
    }

    #[test]
    fn two_valid_rows() {
        let parsed = parse_str(&format!(
            "{HEADER}\n\"100x100\",2,16,1000,600,650,1.67,1.54\n\"100x100\",2,32,1000,500,520,2.0,1.92\n"
        ));

        assert!(parsed.rejected.is_empty());
        assert_eq!(
            parsed.records,
            vec![
                BenchmarkRecord {
                    matrix_size: 100,
                    thread_count: 2,
                    block_size: 16,
                    sequential_time_us: 1000,
                    threaded_time_us: 600,
                    async_time_us: 650,
                    threaded_speedup: 1.67,
                    async_speedup: 1.54,
                },
                BenchmarkRecord {
                    matrix_size: 100,
                    thread_count: 2,
                    block_size: 32,
                    sequential_time_us: 1000,
                    threaded_time_us: 500,
                    async_time_us: 520,
                    threaded_speedup: 2.0,
                    async_speedup: 1.92,
                },
            ]
        );
    }

    #[test]
    fn bad_row_is_skipped_and_parsing_continues() {
        let parsed = parse_str(&format!(
            "{HEADER}\n\"bad\",2,16,x,600,650,1.67,1.54\n100x100,2,32,1000,500,520,2.0,1.92\n"
        ));

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].block_size, 32);

        assert_eq!(parsed.rejected.len(), 1);
        let rejected = &parsed.rejected[0];
        assert_eq!(rejected.line, 2);
        assert_eq!(rejected.fields[0], "bad");
        assert!(matches!(
            rejected.error,
            RowError::InvalidInteger {
                field: Field::Matrix,
                ..
            }
        ));
    }

    #[test]
    fn header_is_always_discarded() {
        // Even a valid-looking first line is a header.
        let parsed = parse_str("100x100,2,16,1000,600,650,1.67,1.54\n");
        assert!(parsed.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn blank_first_line_is_the_header() {
        let parsed = parse_str("\n100x100,2,16,1000,600,650,1.67,1.54\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].block_size, 16);
        assert!(parsed.rejected.is_empty());

        // A malformed header is not reported either.
        let parsed = parse_records(b"\xff,\xfe\n100x100,2,16,1000,600,650,1.67,1.54\n");
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn empty_and_header_only_inputs() {
        assert_eq!(parse_str(""), Parsed::default());
        assert_eq!(parse_str(HEADER), Parsed::default());
        assert_eq!(parse_str(&format!("{HEADER}\n\n# nothing here\n")), Parsed::default());
    }

    #[test]
    fn comments_and_blank_lines_are_silent() {
        let parsed = parse_str(&format!(
            "{HEADER}\n\n# a comment, with commas\n   \n#100x100,2,16,1000,600,650,1.67,1.54\n100x100,2,16,1000,600,650,1.67,1.54\n"
        ));

        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn second_matrix_dimension_is_not_validated() {
        let parsed = parse_str(&format!(
            "{HEADER}\n100x999,2,16,1000,600,650,1.67,1.54\n100,2,16,1000,600,650,1.67,1.54\n"
        ));

        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.records.iter().all(|r| r.matrix_size == 100));
    }

    #[test]
    fn whitespace_around_fields_is_ignored() {
        let record = parse_fields(&["100 x100", " 2", "16 ", "1000", "600", "650", "1.67", "1.54"]);
        let record = record.unwrap();
        assert_eq!(record.matrix_size, 100);
        assert_eq!(record.thread_count, 2);
        assert_eq!(record.block_size, 16);

        // Same through the reader.
        let parsed = parse_str(&format!("{HEADER}\n 100x100 , 2 ,16, 1000,600,650, 1.67 ,1.54\n"));
        assert_eq!(parsed.records, [record]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let parsed = parse_str(&format!("{HEADER}\n100x100,2,16,1000,600,650,1.67,1.54,extra,fields\n"));
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn missing_field_names_first_absent_column() {
        let parsed = parse_str(&format!("{HEADER}\n100x100,2,16,1000,600,650,1.67\n"));

        assert!(parsed.is_empty());
        assert_eq!(
            parsed.rejected[0].error,
            RowError::MissingField(Field::AsyncSpeedup)
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases: [(&[&str], Field); 6] = [
            (&["0x0", "2", "16", "1", "1", "1", "1.0", "1.0"], Field::Matrix),
            (&["100x100", "0", "16", "1", "1", "1", "1.0", "1.0"], Field::Threads),
            (&["100x100", "2", "0", "1", "1", "1", "1.0", "1.0"], Field::BlockSize),
            (&["100x100", "2", "16", "-1", "1", "1", "1.0", "1.0"], Field::SequentialTime),
            (&["100x100", "2", "16", "1", "1", "1", "NaN", "1.0"], Field::ThreadedSpeedup),
            (&["100x100", "2", "16", "1", "1", "1", "1.0", "fast"], Field::AsyncSpeedup),
        ];

        for (fields, expected) in cases {
            let field = match parse_fields(fields) {
                Err(
                    RowError::MissingField(field)
                    | RowError::InvalidInteger { field, .. }
                    | RowError::InvalidFloat { field, .. }
                    | RowError::NotPositive { field, .. },
                ) => field,
                other => panic!("{fields:?} unexpectedly gave {other:?}"),
            };
            assert_eq!(field, expected, "{fields:?}");
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let line = "100x100,2,16,1000,600,650,1.67,1.54";
        let parsed = parse_str(&format!("{HEADER}\n{line}\n{line}\n{line}\n"));
        assert_eq!(parsed.records.len(), 3);
    }

    #[test]
    fn fixtures_parse_completely() {
        let blocks = parse_str(COMPARE_BLOCKS);
        assert_eq!(blocks.records.len(), COMPARE_BLOCKS_ROWS);
        assert!(blocks.rejected.is_empty());

        let threads = parse_str(COMPARE_THREADS);
        assert_eq!(threads.records.len(), COMPARE_THREADS_ROWS);
        assert!(threads.rejected.is_empty());
    }

    #[test]
    fn invalid_utf8_only_drops_its_row() {
        let mut input = format!("{HEADER}\n").into_bytes();
        input.extend_from_slice(b"100x100,2,16,1000,600,650,\xff,1.54\n");
        input.extend_from_slice(b"100x100,2,32,1000,500,520,2.0,1.92\n");

        let parsed = parse_records(&input);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.rejected.len(), 1);
        assert!(matches!(parsed.rejected[0].error, RowError::Malformed(_)));
    }

    prop_compose! {
        fn arb_record()
            (
                matrix_size in 1_u32..2048,
                thread_count in 1_u32..64,
                block_exp in 0_u32..10,
                threaded_speedup in 0.01_f64..64.0,
                async_speedup in 0.01_f64..64.0,
            )
        -> BenchmarkRecord {
            record(matrix_size, thread_count, 1 << block_exp, threaded_speedup, async_speedup)
        }
    }

    /// A line that is never a valid record, nor a comment.
    fn arb_malformed() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("bad,2,16,x,600,650,1.67,1.54".to_owned()),
            Just("100x100,2".to_owned()),
            Just("100x100,two,16,1000,600,650,1.67,1.54".to_owned()),
            Just("100x100,2,16,1000,600,650,1.67,inf".to_owned()),
            "[a-z]{1,8}",
        ]
    }

    proptest! {
        /// N valid rows interleaved with M malformed rows give
        /// exactly the N records, in order.
        #[test]
        fn resilient_and_order_preserving(
            rows in prop::collection::vec(
                prop_oneof![
                    arb_record().prop_map(Ok::<BenchmarkRecord, String>),
                    arb_malformed().prop_map(Err::<BenchmarkRecord, String>),
                ],
                0..40,
            )
        ) {
            let mut input = format!("{HEADER}\n");
            for row in &rows {
                match row {
                    Ok(r) => input.push_str(&to_csv_line(r)),
                    Err(line) => input.push_str(line),
                }
                input.push('\n');
            }

            let parsed = parse_str(&input);

            let expected: Vec<BenchmarkRecord> = rows.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
            let malformed = rows.iter().filter(|r| r.is_err()).count();

            prop_assert_eq!(&parsed.records, &expected);
            prop_assert_eq!(parsed.rejected.len(), malformed);
        }
    }
}
