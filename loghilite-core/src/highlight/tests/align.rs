use crate::highlight::AlignmentState;
use std::sync::Arc;
use std::thread;

#[test]
fn observe_is_monotonic() {
    let state = AlignmentState::new();

    assert_eq!(state.observe(5), 5);
    assert_eq!(state.observe(3), 5);
    assert_eq!(state.observe(9), 9);
    assert_eq!(state.observe(0), 9);
    assert_eq!(state.current(), 9);
}

#[test]
fn concurrent_observers_agree_on_maximum() {
    let state = Arc::new(AlignmentState::new());

    let handles: Vec<_> = (1..=8)
        .map(|n| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for width in 0..(n * 10) {
                    let column = state.observe(width);
                    assert!(column >= width);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(state.current(), 79);
}
