#![no_std]

/// The PWM peripheral drives at most two channels, channel 1 stays empty for SPI and PCM.
pub const RPI_PWM_CHANNELS: usize = 2;

/// Every LED is one packed `u32` in the driver's DMA buffers, whatever the strip type.
pub const LED_SLOT_SIZE: usize = 4;

/// WS281x strips run at 800kHz, some older WS2811 chips need 400kHz.
pub const TARGET_FREQ: u32 = 800_000;
pub const DEFAULT_DMA_NUM: u8 = 5;
pub const DEFAULT_GPIO_PIN: u8 = 18;
pub const DEFAULT_LED_COUNT: usize = 16;
pub const DEFAULT_BRIGHTNESS: u8 = 64;

pub const GAMMA_TABLE_LEN: usize = 256;

// 3 color R, G and B ordering
pub const WS2811_STRIP_RGB: u32 = 0x0010_0800;
pub const WS2811_STRIP_RBG: u32 = 0x0010_0008;
pub const WS2811_STRIP_GRB: u32 = 0x0008_1000;
pub const WS2811_STRIP_GBR: u32 = 0x0008_0010;
pub const WS2811_STRIP_BRG: u32 = 0x0000_1008;
pub const WS2811_STRIP_BGR: u32 = 0x0000_0810;

// 4 color R, G, B and W ordering
pub const SK6812_STRIP_RGBW: u32 = 0x1810_0800;
pub const SK6812_STRIP_RBGW: u32 = 0x1810_0008;
pub const SK6812_STRIP_GRBW: u32 = 0x1808_1000;
pub const SK6812_STRIP_GBRW: u32 = 0x1808_0010;
pub const SK6812_STRIP_BRGW: u32 = 0x1800_1008;
pub const SK6812_STRIP_BGRW: u32 = 0x1800_0810;
pub const SK6812_SHIFT_WMASK: u32 = 0xf000_0000;

pub const WS2812_STRIP: u32 = WS2811_STRIP_GRB;
pub const SK6812_STRIP: u32 = WS2811_STRIP_GRB;
pub const SK6812W_STRIP: u32 = SK6812_STRIP_GRBW;
