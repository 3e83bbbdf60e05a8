//! Property tests for registry bookkeeping and notification order.

use pattern_demos::prelude::*;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0usize..32).prop_map(Op::Remove)]
}

proptest! {
    #[test]
    fn count_is_adds_minus_successful_removes(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut subject = Subject::new();
        let mut issued = Vec::new();
        let mut adds = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add => {
                    issued.push(subject.subscribe(|| {}));
                    adds += 1;
                }
                Op::Remove(pick) => {
                    // Ids already removed are still picked, exercising the no-op path
                    if let Some(id) = issued.get(pick).copied() {
                        let before = subject.observer_count();
                        if subject.remove_observer(id) {
                            removed += 1;
                            prop_assert_eq!(subject.observer_count(), before - 1);
                        } else {
                            prop_assert_eq!(subject.observer_count(), before);
                        }
                    }
                }
            }
        }

        prop_assert_eq!(subject.observer_count(), adds - removed);
    }

    #[test]
    fn notification_order_is_registration_order(count in 0usize..40) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();

        for n in 0..count {
            let log = Rc::clone(&log);
            subject.subscribe(move || log.borrow_mut().push(n));
        }

        subject.notify_observers().unwrap();
        prop_assert_eq!(log.borrow().clone(), (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn isolated_failures_follow_registration_order(pattern in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut subject = Subject::new();
        let mut expected = Vec::new();

        for fails in &pattern {
            let id = if *fails {
                subject.add_observer(Rc::new(FnObserver::new(|| Err(ObserverError::new("no")))))
            } else {
                subject.subscribe(|| {})
            };
            if *fails {
                expected.push(id);
            }
        }

        let report = subject.notify_isolated();
        prop_assert_eq!(report.notified, pattern.len());
        let failed: Vec<_> = report.failures.iter().map(|f| f.id).collect();
        prop_assert_eq!(failed, expected);
    }
}
