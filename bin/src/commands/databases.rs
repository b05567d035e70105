//! Databases command implementation.
//!
//! This module lists the database designs shipped in the catalog.

use crate::display::{Format, Report, print_report};
use anyhow::Result;
use docsize_lib::DesignSummary;
use docsize_lib::prelude::*;

/// Summaries of every catalog design, in catalog order.
fn summaries(catalog: &Catalog) -> Vec<DesignSummary<'_>> {
    catalog.designs().iter().map(DesignSummary::new).collect()
}

/// List the catalog designs.
pub(crate) fn list_databases(format: Format) -> Result<()> {
    print_report(&Report::Designs(&summaries(Catalog::global())), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::write_report;

    fn render(format: Format) -> String {
        let summaries = summaries(Catalog::global());
        let mut output = Vec::new();
        write_report(&Report::Designs(&summaries), format, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_lists_every_design() {
        let text = render(Format::Text);
        for name in ["DB1", "DB2", "DB3", "DB4", "DB5"] {
            assert!(text.lines().any(|l| l.starts_with(name)), "{name}");
        }
        assert!(text.ends_with("Total: 5 designs\n"));
    }

    #[test]
    fn test_ndjson_rows() {
        let text = render(Format::Ndjson);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["name"], "DB1");
        assert!(first["collections"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn test_csv_signatures_are_quoted() {
        let text = render(Format::Csv);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "DB1,Product;Stock;Warehouse;OrderLine;Client,\"Prod{[Cat],Supp}, St, Wa, OL, Cl\""
        );
    }
}
