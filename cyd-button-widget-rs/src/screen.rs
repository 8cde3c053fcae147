//! The two-button hello screen.
//!
//! [`ScreenConfig`] holds all geometry and timing. [`HelloScreen`] owns
//! the two [`ButtonWidget`]s and turns one touch sample per tick into
//! press/release actions:
//!
//! - **Left** ("Button") paints the whole screen white while held and
//!   black again on release.
//! - **Right** ("OFF"/"ON") toggles on every new press and reports long
//!   presses while held.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::button::{ButtonStyle, ButtonWidget};

// ── ScreenConfig ─────────────────────────────────────────────────────────

/// Geometry and timing of the hello screen.
///
/// [`ScreenConfig::default()`] is a 320×480 portrait panel with 100×50
/// buttons polled every 50 ms.
#[derive(Clone, Copy)]
pub struct ScreenConfig {
    /// Display width in pixels. Default: 320.
    pub display_width: u32,
    /// Display height in pixels. Default: 480.
    pub display_height: u32,
    /// Width of each button. Default: 100.
    pub button_width: u32,
    /// Height of each button. Default: 50.
    pub button_height: u32,
    /// Distance from the vertical centre line to each button. Default: 10.
    pub button_gap: u32,
    /// Button outline thickness. Default: 3.
    pub outline_width: u32,
    /// Touch poll interval. Default: 50.
    pub poll_period_ms: u64,
    /// Hold time after which a press counts as long. Default: 1000.
    pub long_press_ms: u64,
    /// Label font.
    pub font: &'static MonoFont<'static>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            display_width: 320,
            display_height: 480,
            button_width: 100,
            button_height: 50,
            button_gap: 10,
            outline_width: 3,
            poll_period_ms: 50,
            long_press_ms: 1000,
            font: &FONT_10X20,
        }
    }
}

impl ScreenConfig {
    fn button_x(&self) -> i32 {
        (self.display_width.saturating_sub(self.button_width) / 2) as i32
    }

    /// Upper button, just above the vertical centre.
    pub fn left_button_region(&self) -> Rectangle {
        let y = (self.display_height / 2) as i32
            - self.button_height as i32
            - self.button_gap as i32;
        Rectangle::new(
            Point::new(self.button_x(), y),
            Size::new(self.button_width, self.button_height),
        )
    }

    /// Lower button, just below the vertical centre.
    pub fn right_button_region(&self) -> Rectangle {
        let y = (self.display_height / 2 + self.button_gap) as i32;
        Rectangle::new(
            Point::new(self.button_x(), y),
            Size::new(self.button_width, self.button_height),
        )
    }
}

// ── Events ───────────────────────────────────────────────────────────────

/// Something a tick of [`HelloScreen::handle_touch`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenEvent {
    LeftPressed,
    LeftReleased,
    /// The right button changed state; `on` is the new state.
    RightToggled { on: bool },
    /// The right button is held, for less than the long-press time.
    RightHeld { held_ms: u64 },
    /// The right button has been held for at least the long-press time.
    RightLongPress { held_ms: u64 },
}

/// Events produced by one tick. A tick touches at most two buttons with
/// at most two events each.
pub type ScreenEvents = heapless::Vec<ScreenEvent, 4>;

/// Identifies one of the two buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    Left,
    Right,
}

// ── HelloScreen ──────────────────────────────────────────────────────────

const LEFT_STYLE: ButtonStyle = ButtonStyle {
    outline: Rgb565::WHITE,
    fill: Rgb565::RED,
    text: Rgb565::BLACK,
};

const RIGHT_STYLE: ButtonStyle = ButtonStyle {
    outline: Rgb565::WHITE,
    fill: Rgb565::BLACK,
    text: Rgb565::GREEN,
};

/// Two stacked buttons and their actions.
///
/// # Example
///
/// ```no_run
/// # use cyd_button_widget_rs::{HelloScreen, ScreenConfig};
/// # use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
/// # fn example(display: &mut impl DrawTarget<Color = Rgb565>) {
/// let mut screen = HelloScreen::new(ScreenConfig::default());
/// screen.draw_initial(display).ok();
///
/// // Once per tick, with the first touch point (if any):
/// let events = screen.handle_touch(display, Some(Point::new(160, 205)), 0);
/// # let _ = events;
/// # }
/// ```
pub struct HelloScreen {
    config: ScreenConfig,
    left: ButtonWidget,
    right: ButtonWidget,
}

impl HelloScreen {
    pub fn new(config: ScreenConfig) -> Self {
        Self {
            left: ButtonWidget::new(config.left_button_region(), LEFT_STYLE, "Button", config.font),
            right: ButtonWidget::new(config.right_button_region(), RIGHT_STYLE, "OFF", config.font),
            config,
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn button(&self, id: ButtonId) -> &ButtonWidget {
        match id {
            ButtonId::Left => &self.left,
            ButtonId::Right => &self.right,
        }
    }

    fn button_mut(&mut self, id: ButtonId) -> &mut ButtonWidget {
        match id {
            ButtonId::Left => &mut self.left,
            ButtonId::Right => &mut self.right,
        }
    }

    /// Clear to black and draw both buttons in their normal state.
    pub fn draw_initial<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let outline = Some(self.config.outline_width);
        display.clear(Rgb565::BLACK)?;
        self.left
            .draw_smooth_button(display, false, outline, Some(Rgb565::BLACK), None)?;
        self.right
            .draw_smooth_button(display, false, outline, Some(Rgb565::BLACK), None)?;
        Ok(())
    }

    /// Process one tick.
    ///
    /// `touch` is the first reported contact, `None` when no finger is
    /// down. `now_ms` is a monotonic timestamp used for long-press
    /// detection.
    ///
    /// For each button, in order:
    ///
    /// - touch inside the button → press, then run its press action;
    /// - touch elsewhere → leave the button's state unchanged;
    /// - no touch → release, then run its release action.
    pub fn handle_touch<D>(
        &mut self,
        display: &mut D,
        touch: Option<Point>,
        now_ms: u64,
    ) -> Result<ScreenEvents, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut events = ScreenEvents::new();

        for id in [ButtonId::Left, ButtonId::Right] {
            match touch {
                Some(point) => {
                    if self.button(id).contains(point) {
                        self.button_mut(id).press(true);
                        self.press_action(id, display, now_ms, &mut events)?;
                    }
                }
                None => {
                    self.button_mut(id).press(false);
                    self.release_action(id, display, now_ms, &mut events)?;
                }
            }
        }

        #[cfg(feature = "defmt")]
        for event in &events {
            log_event(event);
        }

        Ok(events)
    }

    fn press_action<D>(
        &mut self,
        id: ButtonId,
        display: &mut D,
        now_ms: u64,
        events: &mut ScreenEvents,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match id {
            ButtonId::Left => {
                if self.left.just_pressed() {
                    display.clear(Rgb565::WHITE)?;
                    self.left.draw_smooth_button(display, true, None, None, None)?;
                    self.redraw_right(display)?;
                    let _ = events.push(ScreenEvent::LeftPressed);
                }
            }
            ButtonId::Right => {
                if self.right.just_pressed() {
                    let on = !self.right.state();
                    let label = if on { "ON" } else { "OFF" };
                    self.right.draw_smooth_button(
                        display,
                        on,
                        Some(self.config.outline_width),
                        Some(Rgb565::BLACK),
                        Some(label),
                    )?;
                    self.right.set_press_time(now_ms);
                    let _ = events.push(ScreenEvent::RightToggled { on });
                }

                let held_ms = now_ms.saturating_sub(self.right.press_time());
                let event = if held_ms >= self.config.long_press_ms {
                    ScreenEvent::RightLongPress { held_ms }
                } else {
                    ScreenEvent::RightHeld { held_ms }
                };
                let _ = events.push(event);
            }
        }
        Ok(())
    }

    fn release_action<D>(
        &mut self,
        id: ButtonId,
        display: &mut D,
        now_ms: u64,
        events: &mut ScreenEvents,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match id {
            ButtonId::Left => {
                if self.left.just_released() {
                    display.clear(Rgb565::BLACK)?;
                    self.left.draw_smooth_button(display, false, None, None, None)?;
                    self.redraw_right(display)?;
                    self.left.set_release_time(now_ms);
                    let _ = events.push(ScreenEvent::LeftReleased);
                }
            }
            // The right button has no release action.
            ButtonId::Right => {}
        }
        Ok(())
    }

    /// Repaint the right button after a full-screen clear.
    ///
    /// The button comes back non-inverted, so [`ButtonWidget::state()`]
    /// reads `false` afterwards; its label is left as it was.
    fn redraw_right<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.right.draw_smooth_button(display, false, None, None, None)
    }
}

#[cfg(feature = "defmt")]
fn log_event(event: &ScreenEvent) {
    match *event {
        ScreenEvent::LeftPressed => defmt::info!("Left button just pressed"),
        ScreenEvent::LeftReleased => defmt::info!("Left button just released"),
        ScreenEvent::RightToggled { on } => {
            defmt::info!("Right button toggled: {=str}", if on { "ON" } else { "OFF" })
        }
        ScreenEvent::RightHeld { held_ms } => {
            defmt::debug!("Right button is being pressed ({=u64} ms)", held_ms)
        }
        ScreenEvent::RightLongPress { held_ms } => {
            defmt::info!("Right button long press ({=u64} ms)", held_ms)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
