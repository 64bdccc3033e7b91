use crate::errors::Result;
use crate::sequence::Sequence;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line
    #[default]
    Text,
    /// A JSON object with the count and the values
    Json,
}

/// A generated sequence together with the count that was asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceReport {
    pub count: i64,
    pub sequence: Sequence,
}

impl SequenceReport {
    pub fn new(count: i64, sequence: Sequence) -> Self {
        Self { count, sequence }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()>;
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()> {
        writeln!(
            self.writer,
            "Fibonacci sequence ({}): {}",
            report.count, report.sequence
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::sequence::generate;
    use pretty_assertions::assert_eq;

    fn render(format: OutputFormat, count: i64) -> String {
        let report = SequenceReport::new(count, generate(count).unwrap());
        let mut buf = Vec::new();
        create_writer(format, &mut buf).write_report(&report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output_default_count() {
        assert_eq!(
            render(OutputFormat::Text, 10),
            "Fibonacci sequence (10): [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n"
        );
    }

    #[test]
    fn test_text_output_keeps_negative_count() {
        assert_eq!(render(OutputFormat::Text, -3), "Fibonacci sequence (-3): []\n");
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            render(OutputFormat::Json, 5),
            "{\"count\":5,\"sequence\":[0,1,1,2,3]}\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_text_write_failure_is_io_error() {
        let report = SequenceReport::new(3, generate(3).unwrap());
        let err = TextWriter::new(BrokenPipe).write_report(&report).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_json_write_failure_is_json_error() {
        let report = SequenceReport::new(3, generate(3).unwrap());
        let err = JsonWriter::new(BrokenPipe).write_report(&report).unwrap_err();
        assert!(matches!(err, Error::Json(ref e) if e.is_io()));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
