//! Touch buttons and the two-button hello screen for RGB565 panels.
//!
//! This crate provides [`ButtonWidget`], a rectangular touch button drawn
//! with `embedded-graphics`, [`HelloScreen`], which lays out two buttons
//! and implements their press/release actions, and [`touch_ui_task`], a
//! fixed-rate loop that feeds touch reports from a
//! [`TouchController`](cyd_touch_driver::TouchController) into the screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use cyd_button_widget_rs::{touch_ui_task, ScreenConfig};
//!
//! // In your Embassy main, after initialising the display and touch:
//! spawner.must_spawn(ui_task(touch, display, ScreenConfig::default()));
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn ui_task(
//!     touch: TouchController<MyI2cType, MyPin>,
//!     display: MyDisplay,
//!     config: ScreenConfig,
//! ) {
//!     touch_ui_task(touch, display, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//! - **`task`** — the Embassy-timed [`touch_ui_task`].

#![no_std]

pub mod button;
pub mod screen;
#[cfg(any(feature = "task", test))]
mod tick;
#[cfg(feature = "task")]
pub mod ui_task;

#[cfg(test)]
mod test_support;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use button::{ButtonStyle, ButtonWidget};
pub use screen::{ButtonId, HelloScreen, ScreenConfig, ScreenEvent, ScreenEvents};
#[cfg(feature = "task")]
pub use ui_task::touch_ui_task;
