//! YAML export functionality

use std::io::Write;

use crate::error::{FinFlowError, FinFlowResult};

use super::Report;

/// Write a report as YAML
pub fn export_report_yaml<W: Write>(report: &Report, writer: &mut W) -> FinFlowResult<()> {
    serde_yaml::to_writer(writer, report).map_err(|e| FinFlowError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wallet;

    #[test]
    fn test_export_report_yaml() {
        let mut wallet = Wallet::new();
        wallet.add_category("Food").unwrap();
        wallet.record_expense(800, "Food").unwrap();

        let report = Report::from_wallet(&wallet);
        let mut output = Vec::new();
        export_report_yaml(&report, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.contains("name: Food"));
        assert!(yaml.contains("total_expense: 800"));
    }
}
