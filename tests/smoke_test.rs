use expense_tracker::{
    filter::{CategoryFilter, TransactionFilter},
    init,
    ledger::{Ledger, Transaction, UndoMode},
};

#[test]
fn ledger_filter_smoke() {
    init();

    let mut ledger = Ledger::new(UndoMode::default());
    let lunch = Transaction::new(12.0, "food");
    let bus = Transaction::new(2.5, "transport");
    ledger.add_transaction(lunch.clone()).unwrap();
    ledger.add_transaction(bus).unwrap();

    let matched = CategoryFilter::new("food").filter(&ledger.transactions());
    assert_eq!(matched, vec![lunch]);
    assert!((ledger.total() - 14.5).abs() < f64::EPSILON);
}
