use tracing::{trace, warn};

use crate::{Controller, Error, Led, Result, LED_SLOT_SIZE};

impl Controller {
	/// The active leds of `channel`, borrowed straight from the controller's memory.
	pub fn leds(&self, channel: usize) -> Result<&[Led]> {
		Ok(self.channel(channel)?.leds())
	}

	/// Writable view of the active leds of `channel`.
	///
	/// Writes land in the buffer the driver renders from, nothing is copied.
	pub fn leds_mut(&mut self, channel: usize) -> Result<&mut [Led]> {
		Ok(self.channel_mut(channel)?.leds_mut())
	}

	pub fn led_count(&self, channel: usize) -> Result<usize> {
		Ok(self.channel(channel)?.count())
	}

	pub fn set_led(&mut self, channel: usize, index: usize, value: Led) -> Result<()> {
		let leds = self.leds_mut(channel)?;
		let count = leds.len();

		let Some(led) = leds.get_mut(index) else {
			warn!(channel, index, count, "rejected write past the end of the channel");
			return Err(Error::InvalidSlotIndex {
				channel,
				index,
				count,
			});
		};
		*led = value;

		Ok(())
	}

	/// Turns every active led of `channel` off. The led count stays the same.
	pub fn clear_channel(&mut self, channel: usize) -> Result<()> {
		let leds = self.leds_mut(channel)?;
		trace!(channel, count = leds.len(), "clearing channel");
		leds.fill(0);

		Ok(())
	}

	/// Clears every channel, in channel order.
	pub fn clear_all(&mut self) {
		trace!(channels = self.max_channels(), "clearing all channels");
		for channel in self.channels_mut() {
			channel.leds_mut().fill(0);
		}
	}

	/// Copies `bitmap` into `channel` starting at the first led.
	///
	/// Leds past the end of `bitmap` keep their values.
	pub fn set_bitmap(&mut self, channel: usize, bitmap: &[Led]) -> Result<()> {
		let leds = self.leds_mut(channel)?;
		check_fits(channel, bitmap.len() * LED_SLOT_SIZE, leds.len())?;

		trace!(channel, leds = bitmap.len(), "loading bitmap");
		leds[..bitmap.len()].copy_from_slice(bitmap);

		Ok(())
	}

	/// Copies raw bytes into the memory of `channel` starting at the first led.
	///
	/// The bytes are taken as-is in the host's byte order, so on the little endian Pi the first
	/// byte of each group of [`LED_SLOT_SIZE`] is the least significant byte of that led. How the
	/// color components are ordered inside a led is the caller's contract with the strip, see
	/// [`StripType`](crate::StripType). A length that is not a multiple of [`LED_SLOT_SIZE`] only
	/// overwrites the leading bytes of the last led. Bytes past the end of `bytes` keep their
	/// values.
	pub fn set_bitmap_bytes(&mut self, channel: usize, bytes: &[u8]) -> Result<()> {
		let leds = self.leds_mut(channel)?;
		check_fits(channel, bytes.len(), leds.len())?;

		trace!(channel, len = bytes.len(), "loading raw bitmap");
		let memory: &mut [u8] = bytemuck::cast_slice_mut(leds);
		memory[..bytes.len()].copy_from_slice(bytes);

		Ok(())
	}
}

fn check_fits(channel: usize, len: usize, count: usize) -> Result<()> {
	let capacity = count * LED_SLOT_SIZE;
	if len > capacity {
		warn!(channel, len, capacity, "rejected oversized bitmap");
		return Err(Error::BufferOverrun {
			channel,
			len,
			capacity,
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ChannelConfig, Config};

	fn controller(counts: &[usize]) -> Controller {
		let config = Config {
			channels: counts
				.iter()
				.map(|&led_count| ChannelConfig {
					led_count,
					..ChannelConfig::default()
				})
				.collect(),
			..Config::default()
		};
		Controller::new(&config).unwrap()
	}

	fn fill(controller: &mut Controller, channel: usize, value: Led) {
		controller.leds_mut(channel).unwrap().fill(value);
	}

	#[test]
	fn leds_borrow_active_slots() {
		let mut controller = controller(&[5, 3]);

		assert_eq!(controller.leds(0).unwrap().len(), 5);
		assert_eq!(controller.leds(1).unwrap().len(), 3);
		assert_eq!(controller.led_count(1).unwrap(), 3);

		controller.leds_mut(1).unwrap()[2] = 0x00ab_cdef;
		assert_eq!(controller.leds(1).unwrap(), &[0, 0, 0x00ab_cdef]);
	}

	#[test]
	fn set_led_only_touches_one_slot() {
		let mut controller = controller(&[4]);
		fill(&mut controller, 0, 7);

		controller.set_led(0, 2, 0x00ff_00ff).unwrap();

		assert_eq!(controller.leds(0).unwrap(), &[7, 7, 0x00ff_00ff, 7]);
	}

	#[test]
	fn set_led_out_of_range() {
		let mut controller = controller(&[4]);
		fill(&mut controller, 0, 7);

		let err = controller.set_led(0, 4, 1).unwrap_err();

		assert!(matches!(
			err,
			Error::InvalidSlotIndex {
				channel: 0,
				index:   4,
				count:   4,
			}
		));
		assert_eq!(controller.leds(0).unwrap(), &[7; 4]);
	}

	#[test]
	fn clear_channel_keeps_count() {
		let mut controller = controller(&[6, 2]);
		fill(&mut controller, 0, 0xffff_ffff);
		fill(&mut controller, 1, 0xffff_ffff);

		controller.clear_channel(0).unwrap();

		assert_eq!(controller.led_count(0).unwrap(), 6);
		assert!(controller.leds(0).unwrap().iter().all(|&led| led == 0));
		assert_eq!(controller.leds(1).unwrap(), &[0xffff_ffff; 2]);
	}

	#[test]
	fn clear_all_channels() {
		let mut controller = controller(&[3, 9]);
		fill(&mut controller, 0, 1);
		fill(&mut controller, 1, 2);

		controller.clear_all();

		for channel in controller.channels() {
			assert!(channel.leds().iter().all(|&led| led == 0));
		}
		assert_eq!(controller.led_count(1).unwrap(), 9);
	}

	#[test]
	fn set_bitmap_bytes_exact_fit() {
		let mut controller = controller(&[3]);
		let values: [Led; 3] = [0xAABB_CCDD, 0x1122_3344, 0x5566_7788];
		let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect::<Vec<_>>();

		controller.set_bitmap_bytes(0, &bytes).unwrap();

		assert_eq!(controller.leds(0).unwrap(), &values);
	}

	#[test]
	fn set_bitmap_bytes_keeps_tail() {
		let mut controller = controller(&[4]);
		fill(&mut controller, 0, 9);

		controller
			.set_bitmap_bytes(0, &0x0102_0304u32.to_ne_bytes())
			.unwrap();

		assert_eq!(controller.leds(0).unwrap(), &[0x0102_0304, 9, 9, 9]);
	}

	#[test]
	fn set_bitmap_bytes_partial_slot() {
		let mut controller = controller(&[2]);
		let before = 0x1122_3344u32;
		fill(&mut controller, 0, before);

		controller.set_bitmap_bytes(0, &[0xff, 0xff]).unwrap();

		let mut expected = before.to_ne_bytes();
		expected[..2].copy_from_slice(&[0xff, 0xff]);
		assert_eq!(controller.leds(0).unwrap(), &[u32::from_ne_bytes(expected), before]);
	}

	#[test]
	fn set_bitmap_bytes_overrun() {
		let mut controller = controller(&[3]);
		fill(&mut controller, 0, 5);

		let err = controller.set_bitmap_bytes(0, &[0u8; 13]).unwrap_err();

		assert!(matches!(
			err,
			Error::BufferOverrun {
				channel:  0,
				len:      13,
				capacity: 12,
			}
		));
		assert_eq!(controller.leds(0).unwrap(), &[5; 3]);
	}

	#[test]
	fn set_bitmap_typed() {
		let mut controller = controller(&[4]);
		fill(&mut controller, 0, 1);

		controller.set_bitmap(0, &[10, 20]).unwrap();
		assert_eq!(controller.leds(0).unwrap(), &[10, 20, 1, 1]);

		let err = controller.set_bitmap(0, &[0; 5]).unwrap_err();
		assert!(matches!(
			err,
			Error::BufferOverrun {
				len:      20,
				capacity: 16,
				..
			}
		));
		assert_eq!(controller.leds(0).unwrap(), &[10, 20, 1, 1]);
	}

	#[test]
	fn writes_stop_at_count_not_capacity() {
		let config = Config {
			channels: vec![ChannelConfig {
				led_count: 2,
				capacity: Some(6),
				..ChannelConfig::default()
			}],
			..Config::default()
		};
		let mut controller = Controller::new(&config).unwrap();

		assert_eq!(controller.leds_mut(0).unwrap().len(), 2);
		assert!(matches!(
			controller.set_led(0, 2, 1),
			Err(Error::InvalidSlotIndex { count: 2, .. })
		));
		assert!(matches!(
			controller.set_bitmap(0, &[1, 2, 3]),
			Err(Error::BufferOverrun {
				len:      12,
				capacity: 8,
				..
			})
		));

		controller.set_bitmap(0, &[1, 2]).unwrap();
		assert_eq!(controller.leds(0).unwrap(), &[1, 2]);
		controller.clear_channel(0).unwrap();
		assert_eq!(controller.leds(0).unwrap(), &[0, 0]);
		assert_eq!(controller.channel(0).unwrap().capacity(), 6);
	}

	#[test]
	fn empty_channel_accepts_empty_bitmap() {
		let mut controller = controller(&[4]);

		controller.set_bitmap(1, &[]).unwrap();
		controller.set_bitmap_bytes(1, &[]).unwrap();
		controller.clear_channel(1).unwrap();

		assert!(matches!(
			controller.set_bitmap(1, &[0]),
			Err(Error::BufferOverrun { capacity: 0, .. })
		));
	}

	#[test]
	fn unknown_channel() {
		let mut controller = controller(&[4]);

		assert!(matches!(
			controller.leds(2),
			Err(Error::InvalidChannel {
				channel:      2,
				max_channels: 2,
			})
		));
		assert!(controller.led_count(7).is_err());
		assert!(matches!(
			controller.leds_mut(2),
			Err(Error::InvalidChannel { channel: 2, .. })
		));
		assert!(controller.set_led(2, 0, 0).is_err());
		assert!(controller.clear_channel(2).is_err());
		assert!(controller.set_bitmap(2, &[]).is_err());
		assert!(controller.set_bitmap_bytes(2, &[]).is_err());
	}
}
