use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::ledger::Totals;
use crate::models::{Category, Currency, Transaction, TITLE_MAX_LENGTH};
use crate::types::format_amount;

const CATEGORY_WIDTH: usize = 27;
const AMOUNT_WIDTH: usize = 10;

pub const ABOUT: &str = "Finance Tracker v1.0\n\
    A personal finance manager that helps you track your income, expenses and liabilities.\n\
    You can add, edit, delete and view transactions, and sort them by date, amount or expense type.";

/// One line per transaction, aligned into columns.
pub fn render_transaction(transaction: &Transaction) -> String {
    let category = match transaction.expense_type {
        Some(expense_type) => format!("{} - {}", transaction.category, expense_type),
        None => transaction.category.to_string()
    };

    format!(
        "#{:<4} {} | {:<category_width$} | Title: {:<title_width$} | {:>amount_width$} {} | Description: {}",
        transaction.id,
        transaction.date,
        category,
        transaction.title,
        format_amount(transaction.amount),
        transaction.currency,
        transaction.description.as_deref().unwrap_or(""),
        category_width = CATEGORY_WIDTH,
        title_width = TITLE_MAX_LENGTH,
        amount_width = AMOUNT_WIDTH
    )
}

/// Gross totals with a per-currency breakdown.
///
/// Without a category the net balance follows, counting income as positive and everything else as negative.
pub fn render_totals(category: Option<Category>, totals: &Totals) -> String {
    let mut output = format!(
        "Total {} {}transaction{}: {}",
        totals.count,
        scope(category),
        if totals.count == 1 { "" } else { "s" },
        format_amount(totals.sum)
    );

    push_breakdown(&mut output, &totals.by_currency);

    if category.is_none() {
        output.push_str(&format!("\nNet balance: {}", format_amount(totals.net)));
        push_breakdown(&mut output, &totals.net_by_currency);
    }

    output
}

fn push_breakdown(output: &mut String, subtotals: &BTreeMap<Currency, Decimal>) {
    for (currency, subtotal) in subtotals {
        output.push_str(&format!("\n  {currency}: {}", format_amount(*subtotal)));
    }
}

pub fn render_list(category: Option<Category>, transactions: &[&Transaction], totals: &Totals) -> String {
    if transactions.is_empty() {
        return format!("No {}transactions found", scope(category));
    }

    let mut output = String::new();

    for transaction in transactions {
        output.push_str(&render_transaction(transaction));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&render_totals(category, totals));

    output
}

fn scope(category: Option<Category>) -> String {
    category.map(|category| format!("{} ", category.to_string().to_lowercase())).unwrap_or_default()
}
