//! Budget overview and category summary formatting

use crate::models::{BudgetSnapshot, CategoryTotal, Money};

/// Wrap text in red when `alert` is set, green otherwise (ANSI colors)
pub fn colorize(text: &str, alert: bool) -> String {
    if alert {
        format!("\x1b[31m{}\x1b[0m", text)
    } else {
        format!("\x1b[32m{}\x1b[0m", text)
    }
}

/// Income, total expenses and balance, with an over-budget warning line
pub fn format_overview(snapshot: &BudgetSnapshot, currency_symbol: &str, color: bool) -> String {
    let paint = |amount: Money, alert: bool| {
        let text = amount.format_with_symbol(currency_symbol);
        if color {
            colorize(&text, alert)
        } else {
            text
        }
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Income:          {}\n",
        snapshot.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:  {}\n",
        paint(snapshot.total_expenses, snapshot.over_budget)
    ));
    output.push_str(&format!(
        "Balance:         {}\n",
        paint(snapshot.balance, snapshot.balance.is_negative())
    ));

    if snapshot.over_budget {
        output.push_str("\nWarning: You are over budget!\n");
    }

    output
}

/// Category summary, one line per category in first-seen order
pub fn format_category_summary(totals: &[CategoryTotal], currency_symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let name_width = totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>5}\n",
        "Category",
        "Total",
        "Count",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->5}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for total in totals {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>5}\n",
            total.category,
            total.total.format_with_symbol(currency_symbol),
            total.count,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BudgetStore;
    use crate::storage::MemoryStore;

    fn snapshot(income: &str, expenses: &[(&str, &str)]) -> BudgetSnapshot {
        let mut store = BudgetStore::load(MemoryStore::new());
        store.set_income_from_input(income).unwrap();
        for (category, amount) in expenses {
            store
                .add_transaction_from_input(category, amount, "2024-01-01")
                .unwrap();
        }
        store.snapshot()
    }

    #[test]
    fn test_overview_within_budget() {
        let output = format_overview(&snapshot("100", &[("Food", "40")]), "₦", false);
        assert!(output.contains("Income:          ₦100.00"));
        assert!(output.contains("Total Expenses:  ₦40.00"));
        assert!(output.contains("Balance:         ₦60.00"));
        assert!(!output.contains("over budget"));
    }

    #[test]
    fn test_overview_over_budget() {
        let snap = snapshot("100", &[("Food", "100"), ("Fun", "50")]);
        let output = format_overview(&snap, "₦", false);
        assert!(output.contains("-₦50.00"));
        assert!(output.contains("You are over budget!"));

        let colored = format_overview(&snap, "₦", true);
        assert!(colored.contains("\x1b[31m-₦50.00\x1b[0m"));
    }

    #[test]
    fn test_category_summary() {
        let snap = snapshot("0", &[("Food", "10"), ("Transport", "5"), ("Food", "15")]);
        let output = format_category_summary(&snap.category_totals, "₦");

        assert!(output.contains("₦25.00"));
        assert!(output.contains("₦5.00"));
        assert!(output.find("Food").unwrap() < output.find("Transport").unwrap());
    }

    #[test]
    fn test_empty_category_summary() {
        assert!(format_category_summary(&[], "₦").contains("No expenses yet"));
    }
}
