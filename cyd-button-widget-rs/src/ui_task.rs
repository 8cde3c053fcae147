//! Touch polling task.
//!
//! [`touch_ui_task`] draws the [`HelloScreen`] and then polls the touch
//! controller at a fixed rate, forwarding the first contact of each
//! report to [`HelloScreen::handle_touch`].

use cyd_touch_driver::TouchController;
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::i2c::I2c;

use crate::screen::{HelloScreen, ScreenConfig};
use crate::tick;

/// Fixed-rate touch → button loop.
///
/// A plain `async fn`, not an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn ui_task(
///     touch: TouchController<TouchI2c, Output<'static>>,
///     display: TftDisplay,
///     config: ScreenConfig,
/// ) {
///     touch_ui_task(touch, display, config).await;
/// }
/// ```
///
/// `touch` must already have been through
/// [`TouchController::init`]; the GT911 address strap has to be handled
/// by the caller around that call.
///
/// # Control flow
///
/// 1. Draw the initial screen.
/// 2. If no touch controller was detected, stop here; the screen stays
///    static.
/// 3. Loop every `config.poll_period_ms`:
///    - read one touch report;
///    - take its first point, if any;
///    - hand it to the screen with the current uptime in milliseconds.
///
/// # Errors
///
/// * Touch read failure: logs and skips the tick, so a bus glitch is not
///   mistaken for a finger lift.
/// * Draw failure: logs and continues with the next tick.
pub async fn touch_ui_task<I2C, RST, D>(
    mut touch: TouchController<I2C, RST>,
    mut display: D,
    config: ScreenConfig,
) where
    I2C: I2c,
    RST: OutputPin,
    D: DrawTarget<Color = Rgb565>,
{
    let mut screen = HelloScreen::new(config);
    if !tick::start(&touch, &mut screen, &mut display) {
        return;
    }

    let period = Duration::from_millis(config.poll_period_ms);

    loop {
        Timer::after(period).await;
        tick::poll_touch(&mut touch, &mut screen, &mut display, Instant::now().as_millis()).await;
    }
}
