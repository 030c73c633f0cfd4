//! CSV export functionality
//!
//! Writes the wallet report as CSV: one row per category in registry order,
//! then a summary block with grand totals. Field escaping happens here, in
//! the exporter; category names are stored unescaped.

use std::io::Write;

use crate::error::{FinFlowError, FinFlowResult};

use super::Report;

/// Write a report as CSV.
///
/// Starts with a UTF-8 BOM so spreadsheet applications pick up the encoding.
pub fn export_report_csv<W: Write>(report: &Report, writer: &mut W) -> FinFlowResult<()> {
    write!(writer, "\u{feff}").map_err(export_err)?;

    writeln!(writer, "Category,Income,Expense,Budget,Remaining").map_err(export_err)?;

    for row in &report.categories {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&row.name),
            row.income,
            row.expense,
            row.budget,
            row.remaining
        )
        .map_err(export_err)?;
    }

    writeln!(writer).map_err(export_err)?;

    writeln!(writer, "Metric,Value").map_err(export_err)?;
    writeln!(writer, "Total income,{}", report.total_income).map_err(export_err)?;
    writeln!(writer, "Total expenses,{}", report.total_expense).map_err(export_err)?;
    writeln!(writer, "Balance,{}", report.balance).map_err(export_err)?;

    Ok(())
}

fn export_err(e: std::io::Error) -> FinFlowError {
    FinFlowError::Export(e.to_string())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
