/// Batch resolution of accession/taxon rows into fixed lineage labels
use crate::bio::lineage::project;
use crate::bio::taxonomy::TaxonomyDB;
use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Prefix of the taxon column in input rows
pub const TAXON_PREFIX: &str = "taxon:";

/// Why an input row produced no output
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    #[error("Empty line at line {line}")]
    EmptyLine { line: usize },

    #[error("Line {line} does not have exactly two columns: '{content}'")]
    ColumnCount { line: usize, content: String },

    #[error("Line {line} has invalid taxon format: '{taxon}'")]
    InvalidTaxon { line: usize, taxon: String },

    #[error("Tax ID {tax_id} not found in taxonomy database at line {line}")]
    UnknownTaxId { line: usize, tax_id: String },
}

impl SkipReason {
    /// Short label used when summarising skipped rows
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyLine { .. } => "empty line",
            Self::ColumnCount { .. } => "wrong column count",
            Self::InvalidTaxon { .. } => "invalid taxon format",
            Self::UnknownTaxId { .. } => "unknown tax ID",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub lines_read: usize,
    pub resolved: usize,
    pub skipped: Vec<SkippedRow>,
}

impl BatchReport {
    /// Skip counts per reason, in first-seen order
    pub fn skip_summary(&self) -> Vec<(&'static str, usize)> {
        let mut summary: Vec<(&'static str, usize)> = Vec::new();
        for row in &self.skipped {
            let kind = row.reason.kind();
            match summary.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, count)) => *count += 1,
                None => summary.push((kind, 1)),
            }
        }
        summary
    }
}

/// A row that passed validation
#[derive(Debug, PartialEq, Eq)]
struct AccessionRow<'a> {
    accession: &'a str,
    tax_id: &'a str,
}

pub struct BatchResolver<'a> {
    taxonomy: &'a TaxonomyDB,
}

impl<'a> BatchResolver<'a> {
    pub fn new(taxonomy: &'a TaxonomyDB) -> Self {
        Self { taxonomy }
    }

    /// Resolve `input` into `output`, creating or truncating the output file
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<BatchReport> {
        let reader = BufReader::new(File::open(input.as_ref())?);
        let writer = BufWriter::new(File::create(output.as_ref())?);
        tracing::info!(
            "Resolving {} into {}",
            input.as_ref().display(),
            output.as_ref().display()
        );
        self.process(reader, writer)
    }

    /// Resolve each input row and write `accession<TAB>tax=...` rows in input order.
    ///
    /// Malformed rows and unknown tax IDs are logged and skipped; only I/O errors
    /// abort the batch.
    pub fn process<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            report.lines_read += 1;

            let row = match self.validate(line.trim(), line_number) {
                Ok(row) => row,
                Err(reason) => {
                    tracing::warn!("{}", reason);
                    report.skipped.push(SkippedRow {
                        line: line_number,
                        reason,
                    });
                    continue;
                }
            };

            let lineage = project(&self.taxonomy.resolve(row.tax_id));
            // One write per row so a buffered flush never ends mid-row
            let record = format!("{}\t{}\n", row.accession, lineage);
            writer.write_all(record.as_bytes())?;
            report.resolved += 1;
        }

        writer.flush()?;
        tracing::info!(
            "Resolved {} of {} rows ({} skipped)",
            report.resolved,
            report.lines_read,
            report.skipped.len()
        );
        Ok(report)
    }

    fn validate<'l>(&self, line: &'l str, line_number: usize) -> std::result::Result<AccessionRow<'l>, SkipReason> {
        if line.is_empty() {
            return Err(SkipReason::EmptyLine { line: line_number });
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 2 {
            return Err(SkipReason::ColumnCount {
                line: line_number,
                content: line.to_string(),
            });
        }

        let (accession, taxon) = (parts[0], parts[1]);
        if !taxon.starts_with(TAXON_PREFIX) {
            return Err(SkipReason::InvalidTaxon {
                line: line_number,
                taxon: taxon.to_string(),
            });
        }

        let tax_id = taxon.split(':').nth(1).unwrap_or("");
        if !self.taxonomy.contains(tax_id) {
            return Err(SkipReason::UnknownTaxId {
                line: line_number,
                tax_id: tax_id.to_string(),
            });
        }

        Ok(AccessionRow { accession, tax_id })
    }
}
