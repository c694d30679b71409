//! Destinations for session reports

use std::io::Write;

use serde_json::json;

use crate::dataframe::OutlierReport;
use crate::error::Result;
use crate::stats::SummaryStats;

/// Receives the results a session produces
pub trait ReportSink {
    fn message(&mut self, text: &str) -> Result<()>;

    fn summary(&mut self, column: &str, stats: &SummaryStats) -> Result<()>;

    fn outliers(&mut self, report: &OutlierReport) -> Result<()>;
}

/// Human-readable text
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn summary(&mut self, column: &str, stats: &SummaryStats) -> Result<()> {
        writeln!(self.out, "\nSummary for {}:\n{}", column, stats)?;
        Ok(())
    }

    fn outliers(&mut self, report: &OutlierReport) -> Result<()> {
        writeln!(
            self.out,
            "Removed {} outliers outside {} for '{}'",
            report.removed, report.bounds, report.column
        )?;
        Ok(())
    }
}

/// One JSON object per line for summaries and outlier reports; messages
/// are wrapped as `{"message": ...}`
#[derive(Debug)]
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn message(&mut self, text: &str) -> Result<()> {
        self.emit(json!({ "message": text }))
    }

    fn summary(&mut self, column: &str, stats: &SummaryStats) -> Result<()> {
        self.emit(json!({ "column": column, "summary": stats }))
    }

    fn outliers(&mut self, report: &OutlierReport) -> Result<()> {
        self.emit(json!({
            "column": report.column,
            "lower": report.bounds.lower,
            "upper": report.bounds.upper,
            "removed": report.removed,
        }))
    }
}
