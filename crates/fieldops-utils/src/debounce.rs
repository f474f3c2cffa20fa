//! Last-write-wins debouncing
//!
//! Search boxes delay their search callback until the input has been quiet for a
//! fixed window. Each new [`Debouncer::call`] cancels the pending invocation and
//! starts a fresh timer, so at most one invocation is ever pending and superseded
//! arguments are dropped rather than queued.
//!
//! # Example
//!
//! ```rust
//! use fieldops_utils::debounce::Debouncer;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let search = Debouncer::new(Duration::from_millis(300), |text: String| {
//!     println!("searching for {text}");
//! });
//!
//! search.call("ins".to_string())?;
//! search.call("installer".to_string())?; // replaces the pending "ins"
//! assert!(search.is_pending());
//! # Ok(())
//! # }
//! ```

use crate::error::{DebounceError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

#[derive(Default)]
struct TimerState {
	/// Bumped on every start and cancel; a timer only fires if it still matches
	generation: u64,
	pending: Option<JoinHandle<()>>,
}

/// A cancellable timer that invokes its action once the input goes quiet
pub struct Debouncer<T> {
	delay: Duration,
	action: Action<T>,
	state: Arc<Mutex<TimerState>>,
}

impl<T> Debouncer<T>
where
	T: Send + 'static,
{
	/// Creates a debouncer that runs `action` after `delay` of quiescence
	pub fn new<F>(delay: Duration, action: F) -> Self
	where
		F: Fn(T) + Send + Sync + 'static,
	{
		Self {
			delay,
			action: Arc::new(action),
			state: Arc::new(Mutex::new(TimerState::default())),
		}
	}

	/// Returns the quiescence window
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Starts (or restarts) the timer with a new argument.
	///
	/// Any pending invocation is cancelled and its argument dropped. Must be
	/// called from within a tokio runtime.
	pub fn call(&self, arg: T) -> Result<()> {
		let runtime = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;

		let mut state = self.state.lock();
		if let Some(previous) = state.pending.take() {
			previous.abort();
			tracing::debug!("debounced call superseded");
		}
		state.generation = state.generation.wrapping_add(1);
		let generation = state.generation;

		let shared = Arc::clone(&self.state);
		let action = Arc::clone(&self.action);
		let delay = self.delay;
		state.pending = Some(runtime.spawn(async move {
			tokio::time::sleep(delay).await;
			{
				let mut state = shared.lock();
				if state.generation != generation {
					return;
				}
				state.pending = None;
			}
			tracing::debug!(delay_ms = delay.as_millis() as u64, "debounced call fired");
			action(arg);
		}));
		Ok(())
	}

	/// Cancels the pending invocation, if any.
	///
	/// Returns `true` if something was cancelled.
	pub fn cancel(&self) -> bool {
		let mut state = self.state.lock();
		state.generation = state.generation.wrapping_add(1);
		match state.pending.take() {
			Some(handle) => {
				handle.abort();
				tracing::debug!("debounced call cancelled");
				true
			}
			None => false,
		}
	}

	/// Returns `true` while an invocation is waiting for its timer
	pub fn is_pending(&self) -> bool {
		self.state.lock().pending.is_some()
	}
}

impl<T> Drop for Debouncer<T> {
	fn drop(&mut self) {
		if let Some(handle) = self.state.lock().pending.take() {
			handle.abort();
		}
	}
}

impl<T> fmt::Debug for Debouncer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Debouncer")
			.field("delay", &self.delay)
			.field("pending", &self.state.lock().pending.is_some())
			.finish_non_exhaustive()
	}
}
