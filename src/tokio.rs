use std::sync::Arc;

use ::tokio::sync::{Mutex, MutexGuard};
use tracing::trace;

use crate::{Controller, Led, Result};

/// A [`Controller`] shared between tasks behind one exclusive lock.
///
/// The driver reads the same memory while it renders, so hold [`SharedController::lock`] across
/// a whole update and render instead of locking per led.
#[derive(Debug, Clone)]
pub struct SharedController {
	inner: Arc<Mutex<Controller>>,
}

impl SharedController {
	pub fn new(controller: Controller) -> Self {
		Self {
			inner: Arc::new(Mutex::new(controller)),
		}
	}

	/// Waits for exclusive access to the controller.
	pub async fn lock(&self) -> MutexGuard<'_, Controller> {
		trace!("waiting for controller lock");
		self.inner.lock().await
	}

	pub async fn led_count(&self, channel: usize) -> Result<usize> {
		self.lock().await.led_count(channel)
	}

	/// Copies the active leds of `channel` out of the controller.
	pub async fn snapshot(&self, channel: usize) -> Result<Vec<Led>> {
		Ok(self.lock().await.leds(channel)?.to_vec())
	}

	pub async fn set_led(&self, channel: usize, index: usize, value: Led) -> Result<()> {
		self.lock().await.set_led(channel, index, value)
	}

	pub async fn clear_channel(&self, channel: usize) -> Result<()> {
		self.lock().await.clear_channel(channel)
	}

	pub async fn clear_all(&self) {
		self.lock().await.clear_all();
	}

	pub async fn set_bitmap(&self, channel: usize, bitmap: &[Led]) -> Result<()> {
		self.lock().await.set_bitmap(channel, bitmap)
	}

	pub async fn set_bitmap_bytes(&self, channel: usize, bytes: &[u8]) -> Result<()> {
		self.lock().await.set_bitmap_bytes(channel, bytes)
	}

	/// Takes the controller back out if this is the last handle.
	pub fn into_inner(self) -> Option<Controller> {
		Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
	}
}

impl From<Controller> for SharedController {
	fn from(controller: Controller) -> Self {
		Self::new(controller)
	}
}
