//! cyd-hw-interface
//!
//! Hello-touch firmware for a Raspberry Pi Pico 2 driving a 3.5" 320×480
//! ST7796 SPI panel with a capacitive touch controller (the panel and
//! GT911 pairing used on the ESP32-3248S035C "Cheap Yellow Display").
//!
//! 1. The touch controller is reset and detected; its type is logged.
//! 2. The display is initialised in portrait orientation.
//! 3. The UI task draws two buttons and polls touch every 50 ms:
//!    - holding the upper button turns the screen white;
//!    - tapping the lower button toggles it between OFF and ON.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Flex, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, SPI1};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7796;
use mipidsi::options::{ColorOrder, Orientation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use cyd_button_widget_rs::{touch_ui_task, ScreenConfig};
use cyd_touch_driver::{Orientation as TouchOrientation, TouchController};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Command/pixel staging buffer for the mipidsi SPI interface.
static TFT_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH: u16 = 320;
const DISPLAY_HEIGHT: u16 = 480;

/// Touch controller bus: I2C0, owned exclusively by the touch driver.
type TouchI2c = I2c<'static, I2C0, i2c::Async>;

/// SPI1 with the panel's chip select.
type TftSpi = ExclusiveDevice<Spi<'static, SPI1, spi::Blocking>, Output<'static>, Delay>;

/// Concrete ST7796 display type.
type TftDisplay = mipidsi::Display<SpiInterface<'static, TftSpi, Output<'static>>, ST7796, Output<'static>>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `touch_ui_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn ui_task(
    touch: TouchController<TouchI2c, Output<'static>>,
    display: TftDisplay,
    config: ScreenConfig,
) {
    touch_ui_task(touch, display, config).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Starting screen");

    // —— Pin assignments ————————————————————————————————————————————————————
    // TFT_SCK  → GP10  (p.PIN_10)  SPI1
    // TFT_MOSI → GP11  (p.PIN_11)
    // TFT_MISO → GP12  (p.PIN_12)
    // TFT_CS   → GP13  (p.PIN_13)
    // TFT_DC   → GP14  (p.PIN_14)
    // TFT_RST  → GP15  (p.PIN_15)
    // TFT_BL   → GP16  (p.PIN_16)  backlight, active-high
    // TOUCH_RST → GP18 (p.PIN_18)
    // TOUCH_INT → GP19 (p.PIN_19)  GT911 address strap, then input
    // TOUCH_SDA → GP20 (p.PIN_20)  I2C0
    // TOUCH_SCL → GP21 (p.PIN_21)
    // ———————————————————————————————————————————————————————————————————————

    // —— Touch controller ——————————————————————————————————————————————————

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c_config,
    );

    // Hold INT low across the reset edge so a GT911 comes up at 0x5D.
    let mut touch_int = Flex::new(p.PIN_19);
    touch_int.set_as_output();
    touch_int.set_low();

    let touch_rst = Output::new(p.PIN_18, Level::High);
    let mut touch = TouchController::new(i2c, touch_rst);
    touch.set_orientation(TouchOrientation::default());

    // A failed init is logged and the firmware carries on; the UI task
    // then shows a static screen.
    match touch.init(&mut Delay).await {
        Ok(sensor) => info!("Sensor type = {}", sensor.name()),
        Err(e) => {
            error!("Touch init failed: {}", e);
            info!("Sensor type = {}", touch.sensor_type().name());
        }
    }

    match touch.read_resolution().await {
        Ok(Some((x, y))) => info!("Touch resolution: {}x{}", x, y),
        Ok(None) => {}
        Err(_) => warn!("Could not read touch resolution"),
    }

    // Release INT so the controller can drive it.
    touch_int.set_as_input();
    touch_int.set_pull(Pull::None);

    // —— Display ——————————————————————————————————————————————————————————

    let mut spi_config = spi::Config::default();
    spi_config.frequency = 40_000_000;
    let spi = Spi::new_blocking(
        p.SPI1,
        p.PIN_10, // SCK
        p.PIN_11, // MOSI
        p.PIN_12, // MISO
        spi_config,
    );

    let tft_cs = Output::new(p.PIN_13, Level::High);
    let tft_dc = Output::new(p.PIN_14, Level::Low);
    let tft_rst = Output::new(p.PIN_15, Level::High);

    let spi_device = ExclusiveDevice::new(spi, tft_cs, Delay).unwrap();
    let interface = SpiInterface::new(spi_device, tft_dc, TFT_BUFFER.init([0u8; 512]));

    let display = match Builder::new(ST7796, interface)
        .display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .orientation(Orientation::new())
        .color_order(ColorOrder::Bgr)
        .reset_pin(tft_rst)
        .init(&mut Delay)
    {
        Ok(display) => display,
        Err(_) => {
            error!("Display init failed");
            // Nothing to show the user without a display; idle.
            loop {
                Timer::after_secs(60).await;
            }
        }
    };

    // Backlight on only after the panel holds valid content.
    let backlight = Output::new(p.PIN_16, Level::High);

    // —— Spawn tasks ————————————————————————————————————————————————————————

    let config = ScreenConfig {
        display_width: u32::from(DISPLAY_WIDTH),
        display_height: u32::from(DISPLAY_HEIGHT),
        ..ScreenConfig::default()
    };

    spawner.must_spawn(ui_task(touch, display, config));

    // Dropping a pin driver resets the pad; keep both configured after
    // main returns.
    core::mem::forget(backlight);
    core::mem::forget(touch_int);

    info!("All tasks spawned");
}
