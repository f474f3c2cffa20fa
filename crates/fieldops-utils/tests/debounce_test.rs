use fieldops_utils::debounce::Debouncer;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(300);

fn recording_debouncer() -> (Debouncer<String>, Arc<Mutex<Vec<String>>>) {
	let calls = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&calls);
	let debouncer = Debouncer::new(WINDOW, move |text: String| sink.lock().push(text));
	(debouncer, calls)
}

#[tokio::test(start_paused = true)]
async fn test_fires_once_after_quiet_window() {
	let (debouncer, calls) = recording_debouncer();

	debouncer.call("pump".to_string()).unwrap();
	assert!(debouncer.is_pending());

	tokio::time::sleep(WINDOW - Duration::from_millis(1)).await;
	assert!(calls.lock().is_empty());

	tokio::time::sleep(Duration::from_millis(2)).await;
	assert_eq!(*calls.lock(), vec!["pump".to_string()]);
	assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_last_write_wins() {
	let (debouncer, calls) = recording_debouncer();

	debouncer.call("s".to_string()).unwrap();
	tokio::time::sleep(Duration::from_millis(100)).await;
	debouncer.call("sp".to_string()).unwrap();
	tokio::time::sleep(Duration::from_millis(100)).await;
	debouncer.call("spl".to_string()).unwrap();

	tokio::time::sleep(WINDOW + Duration::from_millis(50)).await;
	assert_eq!(*calls.lock(), vec!["spl".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_keep_postponing() {
	let (debouncer, calls) = recording_debouncer();

	for text in ["b", "bu", "bui", "buil"] {
		debouncer.call(text.to_string()).unwrap();
		tokio::time::sleep(Duration::from_millis(250)).await;
		assert!(calls.lock().is_empty());
	}

	tokio::time::sleep(Duration::from_millis(100)).await;
	assert_eq!(*calls.lock(), vec!["buil".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_pending_call() {
	let (debouncer, calls) = recording_debouncer();

	debouncer.call("router".to_string()).unwrap();
	assert!(debouncer.cancel());
	assert!(!debouncer.is_pending());

	tokio::time::sleep(WINDOW * 2).await;
	assert!(calls.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_fire_separately() {
	let (debouncer, calls) = recording_debouncer();

	debouncer.call("first".to_string()).unwrap();
	tokio::time::sleep(WINDOW + Duration::from_millis(10)).await;
	debouncer.call("second".to_string()).unwrap();
	tokio::time::sleep(WINDOW + Duration::from_millis(10)).await;

	assert_eq!(
		*calls.lock(),
		vec!["first".to_string(), "second".to_string()]
	);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_call() {
	let (debouncer, calls) = recording_debouncer();

	debouncer.call("gone".to_string()).unwrap();
	drop(debouncer);

	tokio::time::sleep(WINDOW * 2).await;
	assert!(calls.lock().is_empty());
}
