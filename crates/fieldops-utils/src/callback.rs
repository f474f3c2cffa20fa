//! Callback wrapper for component outputs
//!
//! Table and filter components report user intent (sort, page change, filter
//! apply, ...) through callbacks supplied by the owning page. [`Callback`] wraps
//! the closure in an `Arc`, so components can be cloned without cloning the
//! closure itself.
//!
//! ## Example
//!
//! ```rust
//! use fieldops_utils::callback::Callback;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let last_page = Arc::new(AtomicUsize::new(0));
//! let on_page_change = Callback::new({
//!     let last_page = Arc::clone(&last_page);
//!     move |page: usize| last_page.store(page, Ordering::SeqCst)
//! });
//!
//! on_page_change.call(3);
//! assert_eq!(last_page.load(Ordering::SeqCst), 3);
//! ```

use std::sync::Arc;

/// A cloneable, thread-safe callback.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Calls an optional callback, doing nothing when it is absent
pub fn emit<Args, Ret>(callback: Option<&Callback<Args, Ret>>, args: Args) -> Option<Ret> {
	callback.map(|cb| cb.call(args))
}

#[cfg(test)]
mod tests {
	use super::*;
	use parking_lot::Mutex;

	#[test]
	fn test_clone_shares_closure() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let callback = Callback::new({
			let seen = Arc::clone(&seen);
			move |value: &'static str| seen.lock().push(value)
		});
		let cloned = callback.clone();

		callback.call("a");
		cloned.call("b");
		assert_eq!(*seen.lock(), vec!["a", "b"]);
	}

	#[test]
	fn test_emit_optional() {
		let double = Callback::new(|n: u32| n * 2);
		assert_eq!(emit(Some(&double), 4), Some(8));
		assert_eq!(emit::<u32, u32>(None, 4), None);
	}
}
