mod query;
mod store;

pub use query::{Filter, SortOrder, Totals};
pub use store::TransactionStore;
