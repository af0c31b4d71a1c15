//! Streaming CSV conversion.
//!
//! Reads `id,amount` rows and writes `id,amount,words` rows one at a time,
//! so memory use does not grow with the input. Rows that cannot be
//! converted are logged at warn level and left out of the output.

use crate::converter::Converter;
use crate::error::Result;
use crate::record::{AmountRecord, WordsRecord};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use std::io::{Read, Write};

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows written to the output.
    pub converted: usize,

    /// Rows rejected and skipped.
    pub skipped: usize,
}

/// Converts CSV files of amounts into CSV files of words.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchConverter {
    converter: Converter,
}

impl BatchConverter {
    pub fn new(converter: Converter) -> Self {
        BatchConverter { converter }
    }

    /// Streams records from `reader` to `writer`.
    ///
    /// Only I/O failures on the output abort the run; bad input rows are
    /// counted in [`BatchSummary::skipped`].
    pub fn convert_csv<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<BatchSummary> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(["id", "amount", "words"])?;

        let mut summary = BatchSummary::default();
        for (row_idx, result) in csv_reader.deserialize::<AmountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.convert_record(&record) {
                Ok(output) => {
                    csv_writer.serialize(&output)?;
                    summary.converted += 1;
                }
                Err(e) => {
                    warn!("Row {}: {}", row_num, e);
                    summary.skipped += 1;
                }
            }
        }

        csv_writer.flush()?;
        debug!(
            "Batch finished: {} converted, {} skipped",
            summary.converted, summary.skipped
        );
        Ok(summary)
    }

    fn convert_record(&self, record: &AmountRecord) -> Result<WordsRecord> {
        let normalized = record
            .parse_amount()?
            .normalize(self.converter.config())?;
        let words = self.converter.convert_normalized(normalized)?;
        Ok(WordsRecord {
            id: record.id().to_string(),
            amount: normalized.to_string(),
            words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use std::io::Cursor;

    fn run(csv: &str) -> (String, BatchSummary) {
        run_with(BatchConverter::default(), csv)
    }

    fn run_with(batch: BatchConverter, csv: &str) -> (String, BatchSummary) {
        let mut output = Vec::new();
        let summary = batch.convert_csv(Cursor::new(csv), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_converts_each_row() {
        let csv = "id,amount\nA,100\nB,1234.56\n";
        let (output, summary) = run(csv);

        assert_eq!(summary, BatchSummary { converted: 2, skipped: 0 });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,amount,words");
        assert_eq!(lines[1], "A,100.00,One Hundred Rupees only");
        assert_eq!(
            lines[2],
            "B,1234.56,One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise only"
        );
    }

    #[test]
    fn test_amount_only_column() {
        let (output, summary) = run("amount\n100000\n");
        assert_eq!(summary.converted, 1);
        assert!(output.contains(",100000.00,One Lakh Rupees only"));
    }

    #[test]
    fn test_skips_bad_rows() {
        let csv = "id,amount\n1,-5\n2,abc\n3,\n4,1000000000\n5,10000000\n";
        let (output, summary) = run(csv);

        assert_eq!(summary, BatchSummary { converted: 1, skipped: 4 });
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("5,10000000.00,One Crore Rupees only"));
    }

    #[test]
    fn test_whitespace_handling() {
        let (output, _) = run("id, amount\n X , 7.5 \n");
        assert!(output.contains("X,7.50,Seven Rupees and Fifty Paise only"));
    }

    #[test]
    fn test_configured_maximum_skips_rows() {
        let batch = BatchConverter::new(Converter::new(
            ConverterConfig::default().with_max_rupees(500),
        ));
        let (output, summary) = run_with(batch, "id,amount\n1,500\n2,501\n");
        assert_eq!(summary, BatchSummary { converted: 1, skipped: 1 });
        assert!(output.contains("1,500.00,Five Hundred Rupees only"));
    }

    #[test]
    fn test_empty_input_writes_header() {
        let (output, summary) = run("id,amount\n");
        assert_eq!(summary, BatchSummary::default());
        assert_eq!(output.trim(), "id,amount,words");
    }
}
