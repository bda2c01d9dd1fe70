mod amount;
mod errors;

pub use amount::{format_amount, parse_amount};

pub type TransactionId = u32;
