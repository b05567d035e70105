//! Text report format.

use std::io::Write;

use docsize_estimate::{DatabaseEstimate, ShardingStats};

use crate::units::{group_thousands, to_gb};
use crate::{AnalysisReport, CollectionReport, DesignSummary, FormatError, Formatter};

/// Plain-text formatter producing fixed-width tables.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Width of the `=` rules framing each section.
    width: usize,
}

impl TextFormatter {
    /// Creates a text formatter with the default width.
    #[must_use]
    pub const fn new() -> Self {
        Self { width: 70 }
    }

    fn rule(&self, c: char) -> String {
        c.to_string().repeat(self.width)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_database<W: Write + Send>(
        &self,
        estimate: &DatabaseEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", self.rule('='))?;
        writeln!(writer, "DATABASE SUMMARY: {}", estimate.name)?;
        writeln!(writer, "Signature: {}", estimate.signature)?;
        writeln!(writer, "{}", self.rule('='))?;
        writeln!(writer)?;
        writeln!(writer, "COLLECTIONS:")?;

        for collection in &estimate.collections {
            writeln!(
                writer,
                "  - {:<15}: {:>12.4} GB  ({} docs)",
                collection.name,
                to_gb(collection.collection_bytes),
                group_thousands(collection.document_count, 0),
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "TOTAL: {:.4} GB", to_gb(estimate.total_bytes))?;
        writeln!(writer, "{}", self.rule('='))?;
        Ok(())
    }

    fn write_collection<W: Write + Send>(
        &self,
        report: &CollectionReport<'_>,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let CollectionReport { estimate, analysis } = *report;

        writeln!(writer, "{}", self.rule('='))?;
        writeln!(writer, "COLLECTION: {}", estimate.name)?;
        writeln!(writer, "Detected type: {}", analysis.label)?;
        writeln!(writer, "{}", self.rule('='))?;

        writeln!(writer)?;
        writeln!(writer, "STATISTICS:")?;
        writeln!(
            writer,
            "  - Documents: {}",
            group_thousands(estimate.document_count, 0)
        )?;
        writeln!(writer, "  - Embedded entities: {}", analysis.embedded_entities)?;
        writeln!(writer, "  - Keys: {}", group_thousands(analysis.key_count, 0))?;

        writeln!(writer)?;
        writeln!(writer, "SCALARS OUTSIDE ARRAYS:")?;
        if analysis.scalars_outside.is_empty() {
            writeln!(writer, "  (none)")?;
        }
        for (type_name, count) in analysis.scalars_outside.iter() {
            writeln!(writer, "  - {type_name}: {count}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "SCALARS INSIDE ARRAYS:")?;
        if analysis.arrays.is_empty() {
            writeln!(writer, "  (none)")?;
        }
        for array in &analysis.arrays {
            let per_document = array.length * array.occurrences;
            writeln!(
                writer,
                "  - Array '{}' (average: {}, from {}):",
                array.path,
                group_thousands(array.length, 0),
                array.length_statistic,
            )?;
            for (type_name, count) in array.scalars.iter() {
                writeln!(
                    writer,
                    "    - {type_name}: {count} x {} = {}",
                    group_thousands(per_document, 0),
                    group_thousands(count as f64 * per_document, 0),
                )?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "SIZE:")?;
        writeln!(
            writer,
            "  - Scalars (outside arrays): {} B",
            group_thousands(analysis.outside_bytes, 0)
        )?;
        writeln!(
            writer,
            "  - Scalars (inside arrays): {} B",
            group_thousands(analysis.inside_bytes, 0)
        )?;
        writeln!(writer, "  - Keys: {} B", group_thousands(analysis.key_bytes, 0))?;
        writeln!(
            writer,
            "  - DOCUMENT: {} B",
            group_thousands(analysis.document_bytes, 0)
        )?;
        writeln!(
            writer,
            "  - COLLECTION: {:.4} GB",
            to_gb(estimate.collection_bytes)
        )?;
        writeln!(writer, "{}", self.rule('='))?;
        Ok(())
    }

    fn write_analysis<W: Write + Send>(
        &self,
        report: &AnalysisReport<'_>,
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.write_database(report.database, &mut writer)?;
        for collection in &report.collections {
            writeln!(writer)?;
            self.write_collection(collection, &mut writer)?;
        }
        Ok(())
    }

    fn write_designs<W: Write + Send>(
        &self,
        designs: &[DesignSummary<'_>],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "NAME       COLLECTIONS                                   SIGNATURE"
        )?;
        writeln!(writer, "{}", self.rule('-'))?;

        for design in designs {
            writeln!(
                writer,
                "{:<10} {:<45} {}",
                design.name,
                design.collections.join(", "),
                design.signature,
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} designs", designs.len())?;
        Ok(())
    }

    fn write_comparison<W: Write + Send>(
        &self,
        estimates: &[DatabaseEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", self.rule('='))?;
        writeln!(writer, "DATABASE SIZE COMPARISON")?;
        writeln!(writer, "{}", self.rule('='))?;
        writeln!(writer, "DATABASE   COLLECTIONS        SIZE (GB)  SIGNATURE")?;
        writeln!(writer, "{}", self.rule('-'))?;

        for estimate in estimates {
            writeln!(
                writer,
                "{:<10} {:<12} {:>15.4}  {}",
                estimate.name,
                estimate.collections.len(),
                to_gb(estimate.total_bytes),
                estimate.signature,
            )?;
        }

        writeln!(writer, "{}", self.rule('='))?;
        Ok(())
    }

    fn write_sharding<W: Write + Send>(
        &self,
        stats: &[ShardingStats],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if let Some(first) = stats.first() {
            writeln!(
                writer,
                "Configuration: {} servers in cluster",
                group_thousands(first.servers, 0)
            )?;
        }
        writeln!(writer, "{}", self.rule('='))?;
        writeln!(
            writer,
            "STRATEGY                         DOCS/SERVER   DISTINCT VALUES/SERVER"
        )?;
        writeln!(writer, "{}", self.rule('='))?;

        for entry in stats {
            writeln!(
                writer,
                "{:<25} {:>18} {:>24}",
                entry.strategy(),
                group_thousands(entry.docs_per_server, 2),
                group_thousands(entry.distinct_values_per_server, 2),
            )?;
        }

        writeln!(writer, "{}", self.rule('='))?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
