//! Commands accepted by the interactive session, one per input line.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::ledger::{Filter, SortOrder};
use crate::models::{Category, Currency, ExpenseType, NewTransaction, Transaction, TransactionUpdate};
use crate::session::SessionError;
use crate::types::{parse_amount, TransactionId};

#[derive(Debug, Parser)]
#[command(name = "finance", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Record a new transaction.
    Add(AddArgs),
    /// Show transactions, optionally restricted to one category and sorted.
    List(ListArgs),
    /// Show a single transaction by id.
    Show(IdArgs),
    /// Remove a transaction by id.
    Delete(IdArgs),
    /// Change one or more fields of a transaction.
    Edit(EditArgs),
    /// Count and sum the amounts of transactions.
    Totals(TotalsArgs),
    /// Describe this application.
    About,
    /// Record a randomly generated transaction (debug mode only).
    #[command(hide = true)]
    Random,
    /// Leave the session.
    #[command(alias = "quit")]
    Exit
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Date of the transaction, YYYY-MM-DD.
    #[arg(long)]
    date: NaiveDate,
    #[arg(long, value_enum, ignore_case = true)]
    category: Category,
    /// Required for expenses, not allowed otherwise.
    #[arg(long, value_enum, ignore_case = true)]
    expense_type: Option<ExpenseType>,
    #[arg(long)]
    title: String,
    #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
    amount: Decimal,
    #[arg(long, value_enum, ignore_case = true, default_value = "usd")]
    currency: Currency,
    #[arg(long)]
    description: Option<String>
}

impl From<AddArgs> for NewTransaction {
    fn from(args: AddArgs) -> Self {
        NewTransaction {
            date: args.date,
            category: args.category,
            expense_type: args.expense_type,
            title: args.title,
            amount: args.amount,
            currency: args.currency,
            description: args.description
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, ignore_case = true)]
    pub category: Option<Category>,
    #[arg(long, value_enum, default_value_t = SortOrder::Insertion)]
    pub sort: SortOrder,
    /// Only transactions whose title or description contains this text, ignoring case.
    #[arg(long)]
    pub search: Option<String>
}

impl ListArgs {
    pub fn filter(&self) -> Filter {
        let filter = category_filter(self.category);

        match &self.search {
            Some(text) => {
                let needle = text.to_lowercase();
                filter.with_predicate(move |transaction| mentions(transaction, &needle))
            }
            None => filter
        }
    }
}

#[derive(Debug, Args)]
pub struct IdArgs {
    pub id: TransactionId
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: TransactionId,
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Leaving Expense drops the expense type, entering it requires --expense-type.
    #[arg(long, value_enum, ignore_case = true)]
    category: Option<Category>,
    #[arg(long, value_enum, ignore_case = true)]
    expense_type: Option<ExpenseType>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
    amount: Option<Decimal>,
    #[arg(long, value_enum, ignore_case = true)]
    currency: Option<Currency>,
    /// An empty description clears it.
    #[arg(long)]
    description: Option<String>
}

impl EditArgs {
    pub fn updates(&self) -> TransactionUpdate {
        TransactionUpdate {
            date: self.date,
            category: self.category,
            expense_type: self.expense_type,
            title: self.title.clone(),
            amount: self.amount,
            currency: self.currency,
            description: self.description.clone()
        }
    }
}

#[derive(Debug, Args)]
pub struct TotalsArgs {
    #[arg(long, value_enum, ignore_case = true)]
    pub category: Option<Category>
}

impl TotalsArgs {
    pub fn filter(&self) -> Filter {
        category_filter(self.category)
    }
}

fn category_filter(category: Option<Category>) -> Filter {
    category.map_or_else(Filter::all, Filter::category)
}

fn mentions(transaction: &Transaction, needle: &str) -> bool {
    transaction.title.to_lowercase().contains(needle)
        || transaction.description.as_deref().is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Splits an input line into arguments on whitespace.
///
/// Double quotes group words into one argument and `\"` inside quotes is a literal quote.
pub fn split_line(line: &str) -> Result<Vec<String>, SessionError> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut in_argument = false;
    let mut quoted = false;
    let mut characters = line.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            '"' => {
                quoted = !quoted;
                in_argument = true;
            }
            '\\' if quoted && characters.peek() == Some(&'"') => {
                current.push('"');
                characters.next();
            }
            character if character.is_whitespace() && !quoted => {
                if in_argument {
                    arguments.push(std::mem::take(&mut current));
                    in_argument = false;
                }
            }
            character => {
                current.push(character);
                in_argument = true;
            }
        }
    }

    if quoted {
        return Err(SessionError::UnterminatedQuote);
    }

    if in_argument {
        arguments.push(current);
    }

    Ok(arguments)
}
