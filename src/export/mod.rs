//! Report export functionality
//!
//! Builds a full wallet report (per-category figures in registry order plus
//! grand totals) and writes it in CSV, JSON, or YAML format.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_report_csv;
pub use json::export_report_json;
pub use yaml::export_report_yaml;

use std::io::Write;

use chrono::Local;
use serde::Serialize;

use crate::error::FinFlowResult;
use crate::models::{TransactionKind, Wallet};
use crate::services::stats::{CategoryBreakdown, Stats};

/// Output formats the report writers understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Yaml,
}

impl ReportFormat {
    /// Parse a user-entered format name
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Label used in shell messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Write a report in the given format
pub fn export_report<W: Write>(
    report: &Report,
    writer: &mut W,
    format: ReportFormat,
) -> FinFlowResult<()> {
    match format {
        ReportFormat::Csv => export_report_csv(report, writer),
        ReportFormat::Json => export_report_json(report, writer),
        ReportFormat::Yaml => export_report_yaml(report, writer),
    }
}

/// A complete wallet report, ready for export
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Per-category figures in registry insertion order
    pub categories: Vec<CategoryBreakdown>,
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
}

impl Report {
    /// Build a report from a wallet snapshot
    pub fn from_wallet(wallet: &Wallet) -> Self {
        let stats = Stats::new(wallet);
        let total_income = stats.total(TransactionKind::Income);
        let total_expense = stats.total(TransactionKind::Expense);

        Self {
            categories: stats.all_breakdowns(),
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

/// File name for a user's dated report, e.g. `alice_report_2026-08-29.csv`
pub fn report_file_name(login: &str, date_format: &str, format: ReportFormat) -> String {
    let date = Local::now().format(date_format);
    format!("{}_report_{}.{}", login, date, format.extension())
}
