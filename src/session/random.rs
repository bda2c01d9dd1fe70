use chrono::NaiveDate;
use clap::ValueEnum;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::{Category, Currency, ExpenseType, NewTransaction};

const TITLES: [&str; 3] = ["apple", "banana", "cherry"];

/// Builds a valid transaction with random content for trying out the application.
pub fn random_transaction<R: Rng + ?Sized>(rng: &mut R) -> NewTransaction {
    let category = Category::value_variants().choose(rng).copied().unwrap_or(Category::Income);

    let expense_type = if category == Category::Expense {
        ExpenseType::value_variants().choose(rng).copied()
    } else {
        None
    };

    let date = NaiveDate::from_ymd_opt(rng.random_range(2020..=2024), rng.random_range(1..=12), rng.random_range(1..=28))
        .unwrap_or_default();

    NewTransaction {
        date,
        category,
        expense_type,
        title: TITLES.choose(rng).copied().unwrap_or("apple").to_string(),
        amount: Decimal::from(rng.random_range(100..=10_000_i64)),
        currency: Currency::Usd,
        description: Some("some description".to_string())
    }
}
