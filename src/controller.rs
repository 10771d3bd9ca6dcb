use tracing::{debug, warn};

use crate::{ChannelConfig, Config, Error, Led, Result, StripType, GAMMA_TABLE_LEN};

/// One output line of the controller and the leds it renders.
#[derive(Debug, Clone)]
pub struct Channel {
	leds:  Vec<Led>,
	count: usize,

	gpio_pin:   u8,
	brightness: u8,
	strip_type: StripType,
	invert:     bool,
	gamma:      Option<[u8; GAMMA_TABLE_LEN]>,
}

impl Channel {
	fn new(config: &ChannelConfig) -> Self {
		Self {
			leds:  vec![0; config.capacity.unwrap_or(config.led_count)],
			count: config.led_count,

			gpio_pin:   config.gpio_pin,
			brightness: config.brightness,
			strip_type: config.strip_type,
			invert:     config.invert,
			gamma:      config.gamma,
		}
	}

	/// An unused channel, the driver allocates no leds for it.
	fn empty() -> Self {
		Self {
			leds:  Vec::new(),
			count: 0,

			gpio_pin:   0,
			brightness: 0,
			strip_type: StripType::default(),
			invert:     false,
			gamma:      None,
		}
	}

	/// The active leds of this channel.
	pub fn leds(&self) -> &[Led] {
		&self.leds[..self.count]
	}

	pub(crate) fn leds_mut(&mut self) -> &mut [Led] {
		&mut self.leds[..self.count]
	}

	pub fn count(&self) -> usize {
		self.count
	}

	/// Number of led slots allocated for this channel, never less than [`Channel::count`].
	pub fn capacity(&self) -> usize {
		self.leds.len()
	}

	pub fn gpio_pin(&self) -> u8 {
		self.gpio_pin
	}

	pub fn brightness(&self) -> u8 {
		self.brightness
	}

	pub fn strip_type(&self) -> StripType {
		self.strip_type
	}

	pub fn invert(&self) -> bool {
		self.invert
	}

	pub fn gamma(&self) -> Option<&[u8; GAMMA_TABLE_LEN]> {
		self.gamma.as_ref()
	}
}

/// The led memory of a ws281x controller, laid out the way the driver renders it.
#[derive(Debug, Clone)]
pub struct Controller {
	frequency: u32,
	dma_num:   u8,
	channels:  Vec<Channel>,
}

impl Controller {
	/// Allocate the channels described by `config`.
	pub fn new(config: &Config) -> Result<Self> {
		if config.max_channels == 0 {
			return Err(Error::InvalidConfig("max_channels must be at least 1".to_string()));
		}
		if config.channels.len() > config.max_channels {
			return Err(Error::InvalidConfig(format!(
				"{} channels configured but the controller only has {}",
				config.channels.len(),
				config.max_channels
			)));
		}

		for (i, channel) in config.channels.iter().enumerate() {
			if let Some(capacity) = channel.capacity.filter(|&capacity| capacity < channel.led_count) {
				return Err(Error::InvalidConfig(format!(
					"channel {} has {} leds but only {} slots",
					i, channel.led_count, capacity
				)));
			}
		}

		let channels = (0..config.max_channels)
			.map(|i| match config.channels.get(i) {
				Some(channel) => Channel::new(channel),
				None => Channel::empty(),
			})
			.collect::<Vec<_>>();

		debug!(
			frequency = config.frequency,
			dma_num = config.dma_num,
			leds = ?channels.iter().map(Channel::count).collect::<Vec<_>>(),
			"created controller"
		);

		Ok(Self {
			frequency: config.frequency,
			dma_num: config.dma_num,
			channels,
		})
	}

	pub fn max_channels(&self) -> usize {
		self.channels.len()
	}

	pub fn frequency(&self) -> u32 {
		self.frequency
	}

	pub fn dma_num(&self) -> u8 {
		self.dma_num
	}

	pub fn channels(&self) -> &[Channel] {
		&self.channels
	}

	pub fn channel(&self, channel: usize) -> Result<&Channel> {
		let max_channels = self.max_channels();
		self.channels
			.get(channel)
			.ok_or_else(|| invalid_channel(channel, max_channels))
	}

	pub(crate) fn channel_mut(&mut self, channel: usize) -> Result<&mut Channel> {
		let max_channels = self.max_channels();
		self.channels
			.get_mut(channel)
			.ok_or_else(|| invalid_channel(channel, max_channels))
	}

	pub(crate) fn channels_mut(&mut self) -> &mut [Channel] {
		&mut self.channels
	}

	/// Sets the brightness the driver scales this channel's leds with on its next render.
	pub fn set_brightness(&mut self, channel: usize, brightness: u8) -> Result<()> {
		self.channel_mut(channel)?.brightness = brightness;
		Ok(())
	}
}

fn invalid_channel(channel: usize, max_channels: usize) -> Error {
	warn!(channel, max_channels, "rejected access to unknown channel");
	Error::InvalidChannel {
		channel,
		max_channels,
	}
}
