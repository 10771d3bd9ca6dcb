use ws281x_buffer_shared::{
	DEFAULT_BRIGHTNESS,
	DEFAULT_DMA_NUM,
	DEFAULT_GPIO_PIN,
	DEFAULT_LED_COUNT,
	GAMMA_TABLE_LEN,
	RPI_PWM_CHANNELS,
	TARGET_FREQ,
};

use crate::StripType;

/// Controller options, channel `i` is configured by `channels[i]`.
#[derive(Debug, Clone)]
pub struct Config {
	pub frequency:    u32,
	pub dma_num:      u8,
	/// Number of channels the controller exposes, channels past `channels.len()` stay empty.
	pub max_channels: usize,
	pub channels:     Vec<ChannelConfig>,
}

#[derive(Debug, Clone)]
pub struct ChannelConfig {
	pub gpio_pin:   u8,
	pub led_count:  usize,
	/// Slots to allocate, at least `led_count`. Defaults to `led_count`.
	pub capacity:   Option<usize>,
	pub brightness: u8,
	pub strip_type: StripType,
	pub invert:     bool,
	/// Replaces the driver's built-in gamma table.
	pub gamma:      Option<[u8; GAMMA_TABLE_LEN]>,
}

impl Config {
	/// A config with one channel of `led_count` leds and defaults for everything else.
	pub fn with_led_count(led_count: usize) -> Self {
		Self {
			channels: vec![ChannelConfig {
				led_count,
				..ChannelConfig::default()
			}],
			..Self::default()
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			frequency:    TARGET_FREQ,
			dma_num:      DEFAULT_DMA_NUM,
			max_channels: RPI_PWM_CHANNELS,
			channels:     vec![ChannelConfig::default()],
		}
	}
}

impl Default for ChannelConfig {
	fn default() -> Self {
		Self {
			gpio_pin:   DEFAULT_GPIO_PIN,
			led_count:  DEFAULT_LED_COUNT,
			capacity:   None,
			brightness: DEFAULT_BRIGHTNESS,
			strip_type: StripType::default(),
			invert:     false,
			gamma:      None,
		}
	}
}
