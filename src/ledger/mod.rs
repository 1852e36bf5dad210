//! Transaction records, the category allow-list, and the undoable ledger.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::{CategoryPolicy, DEFAULT_CATEGORIES};
pub use ledger::{Ledger, UndoEntry, UndoMode};
pub use transaction::{Transaction, TransactionId, TIMESTAMP_FORMAT};
