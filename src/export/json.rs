//! JSON export functionality

use std::io::Write;

use crate::error::{FinFlowError, FinFlowResult};

use super::Report;

/// Write a report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &Report, writer: &mut W) -> FinFlowResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| FinFlowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinFlowError::Export(e.to_string()))?;
    Ok(())
}
