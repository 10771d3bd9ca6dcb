use std::time::Duration;

use eyre::{eyre, Result};
use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ws281x_buffer::{tokio::SharedController, Config, Controller, Led};

const WIDTH: usize = 32;
const HEIGHT: usize = 8;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let controller: SharedController = Controller::new(&Config::with_led_count(WIDTH * HEIGHT))?.into();

	let rows = (0..HEIGHT)
		.map(|row| {
			let controller = controller.clone();
			tokio::spawn(async move { fill_row(&controller, row).await })
		})
		.collect::<Vec<_>>();

	for row in rows {
		row.await??;
	}

	{
		let guard = controller.lock().await;
		let lit = guard.leds(0)?.iter().filter(|&&led| led != 0).count();
		info!("{} of {} leds lit", lit, guard.led_count(0)?);
	}

	controller.clear_all().await;
	let controller = controller
		.into_inner()
		.ok_or_else(|| eyre!("controller still shared"))?;
	info!("cleared {} channels", controller.max_channels());

	Ok(())
}

async fn fill_row(controller: &SharedController, row: usize) -> Result<()> {
	let color: Led = 0x0010_1010 * (row as Led + 1);

	for column in 0..WIDTH {
		controller.set_led(0, row * WIDTH + column, color).await?;
		sleep(Duration::from_millis(5)).await;
	}

	Ok(())
}
