pub mod controller;
pub mod validation;
pub mod view;

pub use controller::{ExpenseController, NO_FILTER_NOTICE};
pub use view::{TableRow, TableSnapshot, TransactionView};
