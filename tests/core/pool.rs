use dedup::core::Pool;

fn empty_vec() -> Vec<u8> {
    Vec::new()
}

#[test]
fn test_get_builds_when_empty_and_returns_on_drop() {
    let pool = Pool::new(4, empty_vec);
    assert_eq!(pool.idle(), 0);
    {
        let _item = pool.get();
        assert_eq!(pool.idle(), 0);
    }
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_returned_object_is_reused() {
    let pool = Pool::new(1, empty_vec);
    {
        let mut item = pool.get();
        item.extend_from_slice(b"kept");
    }
    let item = pool.get();
    assert_eq!(item.as_slice(), b"kept");
}

#[test]
fn test_overflow_beyond_capacity_is_dropped() {
    let pool = Pool::new(2, empty_vec);
    let a = pool.get();
    let b = pool.get();
    let c = pool.get();
    drop((a, b, c));
    assert_eq!(pool.idle(), 2);
    assert_eq!(pool.capacity(), 2);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let pool = Pool::new(0, empty_vec);
    assert_eq!(pool.capacity(), 1);
    drop(pool.get());
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_shared_across_threads() {
    let pool = Pool::new(8, empty_vec);
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    let mut item = pool.get();
                    item.push(1);
                }
            });
        }
    });
    assert!(pool.idle() >= 1 && pool.idle() <= 8);
}
