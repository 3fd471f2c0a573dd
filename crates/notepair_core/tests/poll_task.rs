use notepair_core::{MemoryStore, PeriodicTask, Reader, Writer, NOTES_KEY, SYNC_INTERVAL};
use notepair_core::KeyValueStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn sync_interval_matches_the_two_second_contract() {
    assert_eq!(SYNC_INTERVAL, Duration::from_secs(2));
}

#[test]
fn task_ticks_repeatedly_until_stopped() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);

    let task = PeriodicTask::spawn("test-ticker", Duration::from_millis(10), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let deadline = Instant::now() + Duration::from_secs(2);
    while ticks.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(ticks.load(Ordering::SeqCst) >= 3, "task should keep ticking");

    task.stop();
    let after_stop = ticks.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(ticks.load(Ordering::SeqCst), after_stop);
}

#[test]
fn stop_returns_promptly_even_with_a_long_interval() {
    let task = PeriodicTask::spawn("long-interval", Duration::from_secs(3600), || {});
    let started = Instant::now();
    task.stop();
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn dropping_a_task_cancels_it() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);

    {
        let _task = PeriodicTask::spawn("dropped", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(30));
    }

    let after_drop = ticks.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(ticks.load(Ordering::SeqCst), after_drop);
}

#[test]
fn periodic_flush_carries_edits_to_the_reader() {
    let store = Arc::new(MemoryStore::new());
    let writer = Arc::new(Mutex::new(Writer::open(Arc::clone(&store)).unwrap()));

    writer.lock().unwrap().add_note("draft").unwrap();
    writer.lock().unwrap().edit_note(1, "edited");

    let flusher = Arc::clone(&writer);
    let task = PeriodicTask::spawn("writer-flush", Duration::from_millis(10), move || {
        if let Ok(mut writer) = flusher.lock() {
            let _ = writer.tick();
        }
    });

    let deadline = Instant::now() + Duration::from_secs(2);
    let mut reader = Reader::new(Arc::clone(&store));
    loop {
        reader.tick().unwrap();
        if reader.notes().first().map(|note| note.message.as_str()) == Some("edited") {
            break;
        }
        assert!(Instant::now() < deadline, "edit never reached the reader");
        thread::sleep(Duration::from_millis(5));
    }

    task.stop();
    assert_eq!(
        store.get(NOTES_KEY).unwrap().as_deref(),
        Some(r#"[{"id":1,"message":"edited"}]"#)
    );
}
