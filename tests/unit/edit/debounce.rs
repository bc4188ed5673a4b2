use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn classes_map_to_documented_delays() {
    assert_eq!(DebounceClass::Number.delay(), Duration::from_millis(150));
    assert_eq!(DebounceClass::Text.delay(), Duration::from_millis(300));
    assert_eq!(DebounceClass::Json.delay(), Duration::from_millis(500));

    assert_eq!(DebounceClass::for_kind(FieldKind::Number), DebounceClass::Number);
    assert_eq!(DebounceClass::for_kind(FieldKind::Range), DebounceClass::Number);
    assert_eq!(DebounceClass::for_kind(FieldKind::Text), DebounceClass::Text);
    assert_eq!(
        DebounceClass::for_kind(FieldKind::Percentage),
        DebounceClass::Text
    );
    assert_eq!(DebounceClass::for_kind(FieldKind::Json), DebounceClass::Json);
    assert_eq!(DebounceClass::for_kind(FieldKind::Object), DebounceClass::Json);
}

#[tokio::test]
async fn reschedule_coalesces_to_one_fire() {
    let debouncer = Debouncer::new();
    let fired = Arc::new(AtomicUsize::new(0));
    for _ in 0..5 {
        let fired = Arc::clone(&fired);
        debouncer.schedule("radius", Duration::from_millis(20), move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_keys_do_not_cancel_each_other() {
    let debouncer = Debouncer::new();
    let fired = Arc::new(AtomicUsize::new(0));
    for key in ["radius", "speed", "opacity"] {
        let fired = Arc::clone(&fired);
        debouncer.schedule(key, Duration::from_millis(20), move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn cancel_prevents_the_fire() {
    let debouncer = Debouncer::new();
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let fired = Arc::clone(&fired);
        debouncer.schedule("radius", Duration::from_millis(20), move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    debouncer.cancel("radius");
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert_eq!(debouncer.pending(), 0);
}
