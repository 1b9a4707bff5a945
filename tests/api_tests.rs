//! Tests for the handle-based call surface
//!
//! These tests drive the queue the way an external harness does: through
//! optional handles, boolean results and caller-owned byte buffers.

use textqueue::api::{
    create_queue, create_queue_with, destroy_queue, insert_head, insert_tail, queue_size,
    remove_head, reverse, sort,
};
use textqueue::{QueueConfig, TextQueue};

#[test]
fn test_fruit_scenario_through_handles() {
    let mut q = create_queue();

    assert!(insert_tail(q.as_mut(), "banana"));
    assert!(insert_tail(q.as_mut(), "apple"));
    assert!(insert_head(q.as_mut(), "cherry"));
    assert_eq!(queue_size(q.as_ref()), 3);

    sort(q.as_mut());
    assert_eq!(queue_size(q.as_ref()), 3);

    let mut buf = [0u8; 4];
    assert!(remove_head(q.as_mut(), Some(&mut buf[..])));
    assert_eq!(&buf, b"app\0");
    assert_eq!(queue_size(q.as_ref()), 2);

    destroy_queue(q);
}

#[test]
fn test_size_tracks_successful_operations() {
    let mut q = create_queue();
    let mut expected = 0usize;

    for i in 0..50 {
        let value = format!("value-{i}");
        let ok = if i % 3 == 0 {
            insert_head(q.as_mut(), &value)
        } else {
            insert_tail(q.as_mut(), &value)
        };
        assert!(ok);
        expected += 1;

        if i % 4 == 0 {
            assert!(remove_head(q.as_mut(), None));
            expected -= 1;
        }
        assert_eq!(queue_size(q.as_ref()), expected);
    }

    while remove_head(q.as_mut(), None) {
        expected -= 1;
    }
    assert_eq!(expected, 0);
    assert_eq!(queue_size(q.as_ref()), 0);
    destroy_queue(q);
}

#[test]
fn test_rejected_insert_does_not_mutate() {
    let mut q = create_queue_with(QueueConfig {
        max_value_len: 3,
        ..QueueConfig::default()
    });
    assert!(insert_tail(q.as_mut(), "abc"));
    assert!(!insert_tail(q.as_mut(), "abcd"));
    assert!(!insert_head(q.as_mut(), "a\0"));
    assert_eq!(queue_size(q.as_ref()), 1);

    let mut buf = [0u8; 8];
    assert!(remove_head(q.as_mut(), Some(&mut buf[..])));
    assert_eq!(&buf[..4], b"abc\0");
}

#[test]
fn test_default_queue_accepts_long_values() {
    let mut q = create_queue();
    let long = "x".repeat(2000);
    assert!(insert_tail(q.as_mut(), &long));
    assert!(insert_head(q.as_mut(), &long));
    assert_eq!(queue_size(q.as_ref()), 2);
}

#[test]
fn test_reverse_and_sort_on_empty_are_noops() {
    let mut q = create_queue();
    reverse(q.as_mut());
    sort(q.as_mut());
    assert_eq!(queue_size(q.as_ref()), 0);
    assert!(!remove_head(q.as_mut(), None));
}

#[test]
fn test_operations_on_absent_handle() {
    let mut absent: Option<TextQueue> = None;
    assert!(!insert_head(absent.as_mut(), "x"));
    assert!(!insert_tail(absent.as_mut(), "x"));
    let mut buf = [0xEEu8; 2];
    assert!(!remove_head(absent.as_mut(), Some(&mut buf[..])));
    assert_eq!(buf, [0xEE, 0xEE]);
    assert_eq!(queue_size(absent.as_ref()), 0);
    reverse(absent.as_mut());
    sort(absent.as_mut());
    destroy_queue(absent);
}

#[test]
fn test_destroy_after_partial_drain() {
    let mut q = create_queue();
    for value in ["a", "b", "c", "d"] {
        assert!(insert_tail(q.as_mut(), value));
    }
    assert!(remove_head(q.as_mut(), None));
    reverse(q.as_mut());
    destroy_queue(q);
}
