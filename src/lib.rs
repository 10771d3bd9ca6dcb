//! Per-channel LED buffers for [rpi_ws281x](https://github.com/jgarff/rpi_ws281x) style controllers.
//!
//! The native driver owns timing, DMA and hardware setup. This crate only covers the memory the
//! driver renders from: one `u32` per LED, grouped into channels.
//!
//! ```
//! use ws281x_buffer::{Config, Controller};
//!
//! let mut controller = Controller::new(&Config::default())?;
//! controller.set_led(0, 3, 0x00ff_0000)?;
//! assert_eq!(controller.leds(0)?[3], 0x00ff_0000);
//!
//! controller.clear_all();
//! assert!(controller.leds(0)?.iter().all(|&led| led == 0));
//! # Ok::<(), ws281x_buffer::Error>(())
//! ```

mod buffer;
mod config;
mod controller;
mod strip;
#[cfg(feature = "tokio")]
pub mod tokio;

pub use config::{ChannelConfig, Config};
pub use controller::{Channel, Controller};
pub use strip::StripType;
pub use ws281x_buffer_shared::{GAMMA_TABLE_LEN, LED_SLOT_SIZE, RPI_PWM_CHANNELS};

/// A single packed LED value, the layout of its bytes is given by the channel's [`StripType`].
pub type Led = u32;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("channel {channel} does not exist, the controller has {max_channels} channels")]
	InvalidChannel { channel: usize, max_channels: usize },
	#[error("led {index} is out of range for channel {channel} with {count} leds")]
	InvalidSlotIndex {
		channel: usize,
		index:   usize,
		count:   usize,
	},
	#[error("bitmap of {len} bytes does not fit channel {channel} ({capacity} bytes)")]
	BufferOverrun {
		channel:  usize,
		len:      usize,
		capacity: usize,
	},
	#[error("invalid config: {0}")]
	InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
