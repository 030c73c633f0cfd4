//! Statistics formatting for terminal output
//!
//! Pure string builders; the shell decides where they are printed. Category
//! listings always follow registry insertion order, which the breakdown
//! vectors already carry.

use std::fmt::Write;

use crate::services::stats::{CategoryBreakdown, SelectedSummary};

/// Format an amount with an optional currency symbol
pub fn format_amount(amount: i64, currency: &str) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", amount, currency)
    }
}

/// Overall totals view: income, expenses, balance
pub fn totals_view(total_income: i64, total_expense: i64, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total income: {}",
        format_amount(total_income, currency)
    );
    let _ = writeln!(
        out,
        "Total expenses: {}",
        format_amount(total_expense, currency)
    );
    let _ = writeln!(
        out,
        "Balance: {}",
        format_amount(total_income - total_expense, currency)
    );
    out
}

/// Per-category view: incomes, expenses, and budgets with remaining figures
pub fn category_stats_view(rows: &[CategoryBreakdown], currency: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Income by category:");
    for row in rows {
        let _ = writeln!(out, "    {}: {}", row.name, format_amount(row.income, currency));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Expenses by category:");
    for row in rows {
        let _ = writeln!(out, "    {}: {}", row.name, format_amount(row.expense, currency));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Budgets by category (expenses):");
    for row in rows {
        let _ = writeln!(
            out,
            "    {}: {}. Remaining budget: {}",
            row.name,
            format_amount(row.budget, currency),
            format_amount(row.remaining, currency)
        );
    }

    out
}

/// Summary view for a user-selected set of categories
pub fn selected_summary_view(summary: &SelectedSummary, currency: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Summary for selected categories:");
    for row in &summary.rows {
        let _ = writeln!(out, "  * {}:", row.name);
        let _ = writeln!(out, "      Income: {}", format_amount(row.income, currency));
        let _ = writeln!(out, "      Expenses: {}", format_amount(row.expense, currency));
        let _ = writeln!(out, "      Budget: {}", format_amount(row.budget, currency));
        let _ = writeln!(
            out,
            "      Remaining budget: {}",
            format_amount(row.remaining, currency)
        );
    }

    let _ = writeln!(out, "---------------------------------");
    let _ = writeln!(
        out,
        "Income over selected categories: {}",
        format_amount(summary.total_income, currency)
    );
    let _ = writeln!(
        out,
        "Expenses over selected categories: {}",
        format_amount(summary.total_expense, currency)
    );
    let _ = writeln!(
        out,
        "Balance over selected categories: {}",
        format_amount(summary.balance(), currency)
    );

    out
}

/// Warning for a monitored category that went over its limit
pub fn over_budget_warning(category: &str, overshoot: i64, currency: &str) -> String {
    format!(
        "!!! Warning: budget for category {} exceeded by {} !!!",
        category,
        format_amount(overshoot, currency)
    )
}

/// Warning when total expenses exceed total income
pub fn overspent_warning(total_income: i64, total_expense: i64, currency: &str) -> String {
    format!(
        "!!! Warning: expenses ({}) exceeded income ({}) by {} !!!",
        format_amount(total_expense, currency),
        format_amount(total_income, currency),
        format_amount(total_expense - total_income, currency)
    )
}
