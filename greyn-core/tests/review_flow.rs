mod common;

use chrono::NaiveDate;
use greyn_core::review::RECENT_LIMIT;
use greyn_core::{ActivityStatus, CreditLedger, ReviewError, ReviewQueue};

fn review_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 28).unwrap()
}

#[test]
fn verifying_moves_item_to_recent() {
    let mut queue = ReviewQueue::new(common::seeds().activities.activities);
    let mut ledger = CreditLedger::default();
    assert_eq!(queue.pending_count(), 3);
    assert!(queue.recent_resolved().is_empty());

    let award = queue.verify("2", review_day(), &mut ledger).unwrap();
    assert_eq!(award.user_name, "Jane Smith");
    assert_eq!(award.credits, 75);
    assert_eq!(queue.pending_count(), 2);
    let recent = queue.recent_resolved();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].status, ActivityStatus::Verified);

    let second = queue.reject("2", review_day());
    assert!(matches!(second, Err(ReviewError::AlreadyResolved { .. })));
    assert_eq!(queue.get("2").unwrap().status, ActivityStatus::Verified);
}

#[test]
fn resolving_everything_empties_pending() {
    let mut queue = ReviewQueue::new(common::seeds().activities.activities);
    let mut ledger = CreditLedger::default();
    queue.verify("1", review_day(), &mut ledger).unwrap();
    queue.reject("3", review_day()).unwrap();
    queue.verify("2", review_day(), &mut ledger).unwrap();
    assert_eq!(queue.pending_count(), 0);
    assert!(queue.recent_resolved().len() <= RECENT_LIMIT);
    assert_eq!(ledger.awards().len(), 2);
    assert_eq!(ledger.total_for("user1"), 50);
    assert_eq!(ledger.total_for("user3"), 0);
}
