//! One step of the touch → screen loop.
//!
//! Split out of [`touch_ui_task`](crate::touch_ui_task) so the loop body
//! runs without a timer.

use cyd_touch_driver::{SensorType, TouchController};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::i2c::I2c;

use crate::screen::{HelloScreen, ScreenEvents};

/// Draw the initial screen. Returns `false` when no touch controller was
/// detected, in which case there is nothing to poll.
pub(crate) fn start<I2C, RST, D>(
    touch: &TouchController<I2C, RST>,
    screen: &mut HelloScreen,
    display: &mut D,
) -> bool
where
    I2C: I2c,
    RST: OutputPin,
    D: DrawTarget<Color = Rgb565>,
{
    if screen.draw_initial(display).is_err() {
        #[cfg(feature = "defmt")]
        defmt::error!("Initial draw failed");
    }

    if touch.sensor_type() == SensorType::Unknown {
        #[cfg(feature = "defmt")]
        defmt::warn!("No touch controller; screen is static");
        return false;
    }
    true
}

/// Read one touch report and feed its first contact to `screen`.
///
/// Returns `None` when the tick was skipped: a failed read leaves both
/// buttons as they were, so a bus glitch never reads as a finger lift.
pub(crate) async fn poll_touch<I2C, RST, D>(
    touch: &mut TouchController<I2C, RST>,
    screen: &mut HelloScreen,
    display: &mut D,
    now_ms: u64,
) -> Option<ScreenEvents>
where
    I2C: I2c,
    RST: OutputPin,
    D: DrawTarget<Color = Rgb565>,
{
    let info = match touch.get_samples().await {
        Ok(info) => info,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Touch read failed: {}", defmt::Debug2Format(&_e));
            return None;
        }
    };

    // Multi-touch controllers may report more; only the first contact
    // is used.
    let point = info
        .first()
        .map(|p| Point::new(i32::from(p.x), i32::from(p.y)));

    match screen.handle_touch(display, point, now_ms) {
        Ok(events) => Some(events),
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("Draw failed");
            None
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
