//! User Store Concurrency Tests
//!
//! The store is shared across request handlers; concurrent writers must
//! never lose or corrupt records.

use std::sync::Arc;
use std::thread;

use userdb::users::{InMemoryUserRepository, User, UserError, UserService};

fn shared_service() -> Arc<UserService<InMemoryUserRepository>> {
    Arc::new(UserService::new(InMemoryUserRepository::new()))
}

/// Every concurrent insert lands exactly once.
#[test]
fn test_concurrent_creates_are_not_lost() {
    let svc = shared_service();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                for i in 0..100 {
                    svc.create(User::new(t * 1000 + i, format!("u{}", i), i))
                        .unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let users = svc.list().unwrap();
    assert_eq!(users.len(), 800);

    // Per-thread insertion order is preserved
    for t in 0..8 {
        let ids: Vec<i64> = users
            .iter()
            .filter(|u| u.id / 1000 == t)
            .map(|u| u.id)
            .collect();
        let expected: Vec<i64> = (0..100).map(|i| t * 1000 + i).collect();
        assert_eq!(ids, expected);
    }
}

/// Readers racing a writer only ever see whole records.
#[test]
fn test_concurrent_update_and_read() {
    let svc = shared_service();
    svc.create(User::new(1, "v0", 0)).unwrap();

    let writer = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            for i in 1..=500 {
                svc.update(1, &User::new(1, format!("v{}", i), i)).unwrap();
            }
        })
    };

    let reader = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            for _ in 0..500 {
                let user = svc.get(1).unwrap();
                assert_eq!(user.name, format!("v{}", user.age));
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(svc.get(1).unwrap(), User::new(1, "v500", 500));
}

/// Deleting while creating never errors and leaves a consistent store.
#[test]
fn test_concurrent_create_and_delete() {
    let svc = shared_service();

    let creator = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            for i in 0..200 {
                svc.create(User::new(9, "dup", i)).unwrap();
            }
        })
    };

    let deleter = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            for _ in 0..200 {
                svc.delete(9).unwrap();
            }
        })
    };

    creator.join().unwrap();
    deleter.join().unwrap();

    svc.delete(9).unwrap();
    assert!(matches!(svc.get(9), Err(UserError::NotFound(9))));
}
