use std::{thread, time::Duration};

use eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ws281x_buffer::{Config, Controller, Led};

const LED_COUNT: usize = 64;
const BRIGHTNESS: u8 = 90;
const STEP: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let mut controller = Controller::new(&Config::with_led_count(LED_COUNT))?;
	controller.set_brightness(0, BRIGHTNESS)?;

	for color in [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0x0000_0000] {
		wipe(&mut controller, color)?;
	}

	Ok(())
}

fn wipe(controller: &mut Controller, color: Led) -> Result<()> {
	info!("wiping with {:#08x}", color);

	for i in 0..controller.led_count(0)? {
		controller.set_led(0, i, color)?;
		// the driver would render the channel here
		thread::sleep(STEP);
	}

	Ok(())
}
