use ws281x_buffer_shared::{
	SK6812W_STRIP,
	SK6812_SHIFT_WMASK,
	SK6812_STRIP,
	SK6812_STRIP_BGRW,
	SK6812_STRIP_BRGW,
	SK6812_STRIP_GBRW,
	SK6812_STRIP_GRBW,
	SK6812_STRIP_RBGW,
	SK6812_STRIP_RGBW,
	WS2811_STRIP_BGR,
	WS2811_STRIP_BRG,
	WS2811_STRIP_GBR,
	WS2811_STRIP_GRB,
	WS2811_STRIP_RBG,
	WS2811_STRIP_RGB,
	WS2812_STRIP,
};

/// The driver's strip type word.
///
/// Each byte holds the bit shift of one color component inside a packed [`Led`](crate::Led)
/// as the driver reads it: white in the top byte, then red, green and blue.
/// This crate never converts colors, the shifts are there so callers can pack their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripType(u32);

impl StripType {
	pub const WS2811_RGB: Self = Self(WS2811_STRIP_RGB);
	pub const WS2811_RBG: Self = Self(WS2811_STRIP_RBG);
	pub const WS2811_GRB: Self = Self(WS2811_STRIP_GRB);
	pub const WS2811_GBR: Self = Self(WS2811_STRIP_GBR);
	pub const WS2811_BRG: Self = Self(WS2811_STRIP_BRG);
	pub const WS2811_BGR: Self = Self(WS2811_STRIP_BGR);

	pub const SK6812_RGBW: Self = Self(SK6812_STRIP_RGBW);
	pub const SK6812_RBGW: Self = Self(SK6812_STRIP_RBGW);
	pub const SK6812_GRBW: Self = Self(SK6812_STRIP_GRBW);
	pub const SK6812_GBRW: Self = Self(SK6812_STRIP_GBRW);
	pub const SK6812_BRGW: Self = Self(SK6812_STRIP_BRGW);
	pub const SK6812_BGRW: Self = Self(SK6812_STRIP_BGRW);

	pub const WS2812: Self = Self(WS2812_STRIP);
	pub const SK6812: Self = Self(SK6812_STRIP);
	pub const SK6812W: Self = Self(SK6812W_STRIP);

	/// Wraps a raw strip type word, e.g. one read from a config file.
	pub const fn from_raw(raw: u32) -> Self {
		Self(raw)
	}

	pub const fn raw(self) -> u32 {
		self.0
	}

	pub const fn white_shift(self) -> u8 {
		(self.0 >> 24) as u8
	}

	pub const fn red_shift(self) -> u8 {
		(self.0 >> 16) as u8
	}

	pub const fn green_shift(self) -> u8 {
		(self.0 >> 8) as u8
	}

	pub const fn blue_shift(self) -> u8 {
		self.0 as u8
	}

	/// SK6812 RGBW strips carry a fourth, white, component.
	pub const fn has_white(self) -> bool {
		self.0 & SK6812_SHIFT_WMASK != 0
	}
}

impl Default for StripType {
	fn default() -> Self {
		Self::WS2812
	}
}
