use super::*;

use std::sync::Arc;
use std::thread;

fn fill(coordinator: &AnimationCoordinator) -> Vec<String> {
    let ids: Vec<String> = (0..coordinator.max_concurrent())
        .map(|i| format!("item-{i}"))
        .collect();
    for id in &ids {
        assert!(coordinator.should_animate(id));
        coordinator.register_animation(id);
    }
    ids
}

#[test]
fn admits_until_cap_then_refuses_newcomers() {
    let coordinator = AnimationCoordinator::new();
    assert_eq!(coordinator.max_concurrent(), DEFAULT_MAX_CONCURRENT_ANIMATIONS);
    let ids = fill(&coordinator);

    assert_eq!(coordinator.active_count(), 10);
    assert!(!coordinator.should_animate("newcomer"));
    for id in &ids {
        assert!(coordinator.should_animate(id), "{id} lost admission");
    }
}

#[test]
fn unregistering_frees_a_slot() {
    let coordinator = AnimationCoordinator::with_max_concurrent(3);
    let ids = fill(&coordinator);
    assert!(!coordinator.should_animate("late"));

    assert!(coordinator.unregister_animation(&ids[1]));
    assert!(coordinator.should_animate("late"));
    assert_eq!(coordinator.active_count(), 2);
}

#[test]
fn register_is_idempotent() {
    let coordinator = AnimationCoordinator::new();
    assert!(coordinator.register_animation("snap"));
    assert!(!coordinator.register_animation("snap"));
    assert_eq!(coordinator.active_count(), 1);
    assert!(coordinator.is_active("snap"));
}

#[test]
fn unregistering_unknown_id_is_a_no_op() {
    let coordinator = AnimationCoordinator::new();
    coordinator.register_animation("a");
    assert!(!coordinator.unregister_animation("missing"));
    assert_eq!(coordinator.active_count(), 1);
}

#[test]
fn register_ignores_the_cap() {
    let coordinator = AnimationCoordinator::with_max_concurrent(1);
    coordinator.register_animation("a");
    coordinator.register_animation("b");
    assert_eq!(coordinator.active_count(), 2);
    assert!(coordinator.should_animate("a"));
    assert!(!coordinator.should_animate("c"));
}

#[test]
fn try_begin_checks_and_registers() {
    let coordinator = AnimationCoordinator::with_max_concurrent(2);
    assert!(coordinator.try_begin("a"));
    assert!(coordinator.try_begin("a"));
    assert!(coordinator.try_begin("b"));
    assert!(!coordinator.try_begin("c"));
    assert_eq!(coordinator.active_count(), 2);
}

#[test]
fn zero_cap_admits_nothing() {
    let coordinator = AnimationCoordinator::with_max_concurrent(0);
    assert!(!coordinator.should_animate("any"));
    assert!(!coordinator.try_begin("any"));
}

#[test]
fn concurrent_registration_of_same_id_counts_once() {
    let coordinator = Arc::new(AnimationCoordinator::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let coordinator = Arc::clone(&coordinator);
            thread::spawn(move || {
                for _ in 0..100 {
                    coordinator.register_animation("shared");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("registering thread panicked");
    }
    assert_eq!(coordinator.active_count(), 1);
}

#[test]
fn concurrent_try_begin_never_exceeds_cap() {
    let coordinator = Arc::new(AnimationCoordinator::with_max_concurrent(5));
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let coordinator = Arc::clone(&coordinator);
            thread::spawn(move || coordinator.try_begin(&format!("anim-{i}")))
        })
        .collect();
    let admitted = handles
        .into_iter()
        .map(|handle| handle.join().expect("admission thread panicked"))
        .filter(|admitted| *admitted)
        .count();
    assert_eq!(admitted, 5);
    assert_eq!(coordinator.active_count(), 5);
}
