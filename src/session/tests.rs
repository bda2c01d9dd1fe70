use super::commands::split_line;
use super::random::random_transaction;
use super::{Reply, Session, SessionError};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use crate::ledger::TransactionStore;
use crate::models::{Category, Currency, ExpenseType};
use crate::storage::{MemoryStorage, Storage};

fn create_session() -> Session<MemoryStorage> {
    Session::new(TransactionStore::new(), MemoryStorage::new(), false)
}

fn reply_text(reply: Reply) -> Result<String> {
    match reply {
        Reply::Continue(text) => Ok(text),
        Reply::Exit(text) => Err(anyhow!("Session exited unexpectedly: {text}"))
    }
}

#[test]
fn test_split_line_handles_quotes_and_whitespace() -> Result<()> {
    assert_eq!(
        split_line(r#"add  --title "Monthly rent" --description "" --amount 5"#)?,
        vec!["add", "--title", "Monthly rent", "--description", "", "--amount", "5"]
    );
    assert_eq!(split_line(r#"edit 1 --title "say \"hi\"""#)?, vec!["edit", "1", "--title", "say \"hi\""]);
    assert!(split_line("   ")?.is_empty());
    assert!(matches!(split_line(r#"add --title "open"#), Err(SessionError::UnterminatedQuote)));

    Ok(())
}

#[test]
fn test_add_command_stores_and_persists_transaction() -> Result<()> {
    let mut session = create_session();

    let text = reply_text(session.execute(
        r#"add --date 2024-05-02 --category expense --expense-type housing --title Rent --amount 500 --description "May rent""#
    ))?;

    assert!(text.starts_with("Saved successfully!"));
    assert!(text.contains("Expense - Housing"));

    let stored = session.store().get(1).ok_or_else(|| anyhow!("Transaction 1 missing from store"))?;

    assert_eq!(stored.expense_type, Some(ExpenseType::Housing));
    assert_eq!(stored.amount, Decimal::from(500));
    assert_eq!(stored.currency, Currency::Usd);
    assert_eq!(stored.description.as_deref(), Some("May rent"));
    assert_eq!(session.storage.load()?.len(), 1);

    Ok(())
}

#[test]
fn test_invalid_commands_are_reported_without_changing_store() -> Result<()> {
    let mut session = create_session();

    let missing_type = reply_text(session.execute("add --date 2024-05-02 --category expense --title Rent --amount 500"))?;
    let negative = reply_text(session.execute("add --date 2024-05-02 --category income --title Gift --amount -5"))?;
    let bad_amount = reply_text(session.execute("add --date 2024-05-02 --category income --title Gift --amount lots"))?;
    let bad_currency = reply_text(session.execute("add --date 2024-05-02 --category income --title Gift --amount 5 --currency GBP"))?;
    let unknown = reply_text(session.execute("transfer 1 2"))?;

    assert!(missing_type.contains("expense type is required"));
    assert!(negative.contains("must not be negative"));
    assert!(bad_amount.contains("lots"));
    assert!(bad_currency.contains("GBP"));
    assert!(unknown.contains("transfer"));
    assert!(session.store().is_empty());
    assert!(session.storage.load()?.is_empty());

    Ok(())
}

#[test]
fn test_list_command_sorts_and_reports_totals() -> Result<()> {
    let mut session = create_session();
    session.execute("add --date 2024-05-01 --category income --title Salary --amount 1000");
    session.execute("add --date 2024-05-02 --category expense --expense-type housing --title Rent --amount 500");

    let listed = reply_text(session.execute("list --sort amount-decreasing"))?;
    let salary = listed.find("Salary").ok_or_else(|| anyhow!("Salary missing from list"))?;
    let rent = listed.find("Rent").ok_or_else(|| anyhow!("Rent missing from list"))?;

    assert!(salary < rent);
    assert!(listed.contains("Total 2 transactions: 1500.00"));
    assert!(listed.contains("Net balance: 500.00"));

    let expenses = reply_text(session.execute("list --category Expense --sort expense-type"))?;

    assert!(!expenses.contains("Salary"));
    assert!(expenses.contains("Total 1 expense transaction: 500.00"));
    assert!(!expenses.contains("Net balance"));

    let liabilities = reply_text(session.execute("list --category liability"))?;

    assert_eq!(liabilities, "No liability transactions found");

    Ok(())
}

#[test]
fn test_totals_command_on_empty_store() -> Result<()> {
    let mut session = create_session();

    assert_eq!(reply_text(session.execute("totals --category expense"))?, "Total 0 expense transactions: 0.00");

    Ok(())
}

#[test]
fn test_totals_command_reports_net_balance_per_currency() -> Result<()> {
    let mut session = create_session();
    session.execute("add --date 2024-05-01 --category income --title Salary --amount 1000");
    session.execute("add --date 2024-05-02 --category expense --expense-type other --title Gift --amount 40 --currency eur");
    session.execute("add --date 2024-05-03 --category liability --title Loan --amount 1250.5");

    let totals = reply_text(session.execute("totals"))?;

    assert_eq!(
        totals,
        "Total 3 transactions: 2290.50\n  USD: 2250.50\n  EUR: 40.00\nNet balance: -290.50\n  USD: -250.50\n  EUR: -40.00"
    );

    Ok(())
}

#[test]
fn test_list_on_empty_store_and_search_filter() -> Result<()> {
    let mut session = create_session();

    assert_eq!(reply_text(session.execute("list --category expense"))?, "No transactions added yet");

    session.execute(r#"add --date 2024-05-01 --category expense --expense-type food --title Lunch --amount 12 --description "With Ana""#);
    session.execute("add --date 2024-05-02 --category expense --expense-type food --title Dinner --amount 30");

    let found = reply_text(session.execute("list --search ana"))?;

    assert!(found.contains("Lunch"));
    assert!(!found.contains("Dinner"));
    assert!(found.contains("Total 1 transaction: 12.00"));
    assert_eq!(reply_text(session.execute("list --search breakfast"))?, "No transactions found");

    Ok(())
}

#[test]
fn test_show_command_renders_one_transaction() -> Result<()> {
    let mut session = create_session();
    session.execute("add --date 2024-05-02 --category expense --expense-type housing --title Rent --amount 500");

    let shown = reply_text(session.execute("show 1"))?;

    assert!(shown.starts_with("#1"));
    assert!(shown.contains("Expense - Housing"));
    assert_eq!(reply_text(session.execute("show 2"))?, "Error: Transaction [2] was not found");

    Ok(())
}

#[test]
fn test_edit_and_delete_commands() -> Result<()> {
    let mut session = create_session();
    session.execute("add --date 2024-05-02 --category expense --expense-type food --title Lunch --amount 12.5");

    let edited = reply_text(session.execute("edit 1 --category liability --amount 20 --currency eur"))?;

    assert!(edited.starts_with("Changed successfully!"));

    let stored = session.store().get(1).ok_or_else(|| anyhow!("Transaction 1 missing from store"))?;

    assert_eq!(stored.category, Category::Liability);
    assert_eq!(stored.expense_type, None);
    assert_eq!(stored.amount, Decimal::from_str("20")?);
    assert_eq!(session.storage.load()?[0].currency, Currency::Eur);

    let rejected = reply_text(session.execute("edit 1 --amount -5"))?;

    assert!(rejected.starts_with("Error:"));
    assert_eq!(session.store().get(1).map(|transaction| transaction.amount), Some(Decimal::from(20)));

    let deleted = reply_text(session.execute("delete 1"))?;
    let deleted_again = reply_text(session.execute("delete 1"))?;

    assert!(deleted.starts_with("Deleted successfully!"));
    assert_eq!(deleted_again, "Error: Transaction [1] was not found");
    assert!(session.storage.load()?.is_empty());

    Ok(())
}

#[test]
fn test_random_command_requires_debug_mode() -> Result<()> {
    let mut session = create_session();
    let refused = reply_text(session.execute("random"))?;

    assert!(refused.contains("debug mode"));
    assert!(session.store().is_empty());

    let mut debug_session = Session::new(TransactionStore::new(), MemoryStorage::new(), true);
    let added = reply_text(debug_session.execute("random"))?;

    assert!(added.starts_with("Saved successfully!"));
    assert_eq!(debug_session.store().len(), 1);

    Ok(())
}

#[test]
fn test_random_transactions_are_always_valid() {
    let mut rng = StdRng::seed_from_u64(7);

    for id in 1..=200 {
        let transaction = random_transaction(&mut rng).into_transaction(id);

        assert!(transaction.validate().is_ok());
    }
}

#[test]
fn test_run_answers_each_line_until_exit() -> Result<()> {
    let mut session = create_session();
    let input = "about\n\nadd --date 2024-01-01 --category income --title Salary --amount 10\nexit\nlist\n";
    let mut output = Vec::new();

    session.run(input.as_bytes(), &mut output)?;

    let output = String::from_utf8(output)?;

    assert!(output.contains("Finance Tracker"));
    assert!(output.contains("Saved successfully!"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    assert!(!output.contains("Total 1"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let mut session = create_session();
    let help = reply_text(session.execute("help"))?;

    assert!(help.contains("add"));
    assert!(help.contains("totals"));
    assert!(!help.contains("random"));

    Ok(())
}
