//! Rectangular touch button.
//!
//! [`ButtonWidget`] owns a hit region, a colour scheme, a short label and
//! two pieces of state: whether it is currently *pressed* (touch input)
//! and whether it was last drawn *inverted* (visual state). What happens
//! on press and release is up to the caller; see
//! [`HelloScreen`](crate::screen::HelloScreen).

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

/// Maximum label length in bytes. Longer labels are truncated.
pub const LABEL_CAPACITY: usize = 16;

/// Colour scheme of a button.
///
/// When the button is drawn inverted, `fill` and `text` swap roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub outline: Rgb565,
    pub fill: Rgb565,
    pub text: Rgb565,
}

/// A touchable, drawable button.
///
/// # Press tracking
///
/// Every call to [`press()`](Self::press) shifts the current pressed
/// state into the previous one, so [`just_pressed()`](Self::just_pressed)
/// and [`just_released()`](Self::just_released) describe the edge between
/// the last two calls.
pub struct ButtonWidget {
    region: Rectangle,
    style: ButtonStyle,
    font: &'static MonoFont<'static>,
    label: String<LABEL_CAPACITY>,
    outline_width: u32,
    inverted: bool,
    pressed: bool,
    was_pressed: bool,
    press_time_ms: u64,
    release_time_ms: u64,
}

impl ButtonWidget {
    /// Create a button occupying `region`.
    ///
    /// Nothing is drawn until [`draw_smooth_button()`](Self::draw_smooth_button).
    pub fn new(
        region: Rectangle,
        style: ButtonStyle,
        label: &str,
        font: &'static MonoFont<'static>,
    ) -> Self {
        Self {
            region,
            style,
            font,
            label: truncate_label(label),
            outline_width: 0,
            inverted: false,
            pressed: false,
            was_pressed: false,
            press_time_ms: 0,
            release_time_ms: 0,
        }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// `true` if `point` lies inside the button. The right and bottom
    /// edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.region.contains(point)
    }

    // ── Press tracking ───────────────────────────────────────────────────

    pub fn press(&mut self, pressed: bool) {
        self.was_pressed = self.pressed;
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn just_pressed(&self) -> bool {
        self.pressed && !self.was_pressed
    }

    pub fn just_released(&self) -> bool {
        !self.pressed && self.was_pressed
    }

    pub fn press_time(&self) -> u64 {
        self.press_time_ms
    }

    pub fn set_press_time(&mut self, now_ms: u64) {
        self.press_time_ms = now_ms;
    }

    pub fn release_time(&self) -> u64 {
        self.release_time_ms
    }

    pub fn set_release_time(&mut self, now_ms: u64) {
        self.release_time_ms = now_ms;
    }

    // ── Drawing ──────────────────────────────────────────────────────────

    /// Whether the button was last drawn inverted.
    pub fn state(&self) -> bool {
        self.inverted
    }

    /// Draw the button as a rounded rectangle with a centred label.
    ///
    /// # Arguments
    ///
    /// * `inverted` — swap fill and text colours. Becomes [`state()`](Self::state).
    /// * `outline_width` — outline thickness in pixels; `None` reuses the
    ///   previous width. Zero draws no outline.
    /// * `background` — colour painted behind the rounded corners; `None`
    ///   leaves whatever is already on screen.
    /// * `label` — replaces the stored label when `Some`.
    ///
    /// Corner radius is a quarter of the shorter side.
    pub fn draw_smooth_button<D>(
        &mut self,
        display: &mut D,
        inverted: bool,
        outline_width: Option<u32>,
        background: Option<Rgb565>,
        label: Option<&str>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(width) = outline_width {
            self.outline_width = width;
        }
        if let Some(text) = label {
            self.label = truncate_label(text);
        }

        let (fill, text) = if inverted {
            (self.style.text, self.style.fill)
        } else {
            (self.style.fill, self.style.text)
        };

        if let Some(bg) = background {
            self.region
                .into_styled(PrimitiveStyle::with_fill(bg))
                .draw(display)?;
        }

        let size = self.region.size;
        let radius = size.width.min(size.height) / 4;

        if self.outline_width > 0 {
            RoundedRectangle::with_equal_corners(self.region, Size::new(radius, radius))
                .into_styled(PrimitiveStyle::with_fill(self.style.outline))
                .draw(display)?;

            let inner = self.region.offset(-(self.outline_width as i32));
            let inner_radius = radius.saturating_sub(self.outline_width);
            RoundedRectangle::with_equal_corners(inner, Size::new(inner_radius, inner_radius))
                .into_styled(PrimitiveStyle::with_fill(fill))
                .draw(display)?;
        } else {
            RoundedRectangle::with_equal_corners(self.region, Size::new(radius, radius))
                .into_styled(PrimitiveStyle::with_fill(fill))
                .draw(display)?;
        }

        if !self.label.is_empty() {
            let character_style = MonoTextStyleBuilder::new()
                .font(self.font)
                .text_color(text)
                .background_color(fill)
                .build();
            let text_style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build();
            Text::with_text_style(
                self.label.as_str(),
                self.region.center(),
                character_style,
                text_style,
            )
            .draw(display)?;
        }

        self.inverted = inverted;
        Ok(())
    }
}

/// Copy `text` into a label buffer, dropping whole characters that do
/// not fit.
fn truncate_label(text: &str) -> String<LABEL_CAPACITY> {
    let mut label = String::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_10X20;

    use super::*;
    use crate::test_support::{TestDisplay, UNTOUCHED};

    const STYLE: ButtonStyle = ButtonStyle {
        outline: Rgb565::WHITE,
        fill: Rgb565::RED,
        text: Rgb565::BLACK,
    };

    fn button() -> ButtonWidget {
        ButtonWidget::new(
            Rectangle::new(Point::new(110, 180), Size::new(100, 50)),
            STYLE,
            "Button",
            &FONT_10X20,
        )
    }

    #[test]
    fn contains_is_half_open() {
        let b = button();
        assert!(b.contains(Point::new(110, 180)));
        assert!(b.contains(Point::new(209, 229)));
        assert!(!b.contains(Point::new(210, 200)));
        assert!(!b.contains(Point::new(150, 230)));
        assert!(!b.contains(Point::new(109, 200)));
        assert!(!b.contains(Point::new(150, 179)));
    }

    #[test]
    fn press_edges() {
        let mut b = button();
        assert!(!b.is_pressed());
        assert!(!b.just_pressed());
        assert!(!b.just_released());

        b.press(true);
        assert!(b.just_pressed());
        assert!(!b.just_released());

        b.press(true);
        assert!(b.is_pressed());
        assert!(!b.just_pressed());

        b.press(false);
        assert!(b.just_released());
        assert!(!b.just_pressed());

        b.press(false);
        assert!(!b.just_released());
    }

    #[test]
    fn timestamps_are_stored() {
        let mut b = button();
        b.set_press_time(1234);
        b.set_release_time(5678);
        assert_eq!(b.press_time(), 1234);
        assert_eq!(b.release_time(), 5678);
    }

    #[test]
    fn long_labels_are_truncated() {
        let b = ButtonWidget::new(
            Rectangle::new(Point::zero(), Size::new(10, 10)),
            STYLE,
            "ABCDEFGHIJKLMNOPQRST",
            &FONT_10X20,
        );
        assert_eq!(b.label(), "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn normal_draw_uses_fill_colour() {
        let mut display = TestDisplay::new(320, 480);
        let mut b = button();
        b.draw_smooth_button(&mut display, false, Some(3), Some(Rgb565::BLACK), None)
            .unwrap();

        assert!(!b.state());
        // Straight left edge, vertically centred: outline then fill.
        assert_eq!(display.pixel(110, 205), Rgb565::WHITE);
        assert_eq!(display.pixel(112, 205), Rgb565::WHITE);
        assert_eq!(display.pixel(115, 205), Rgb565::RED);
        // Rounded corner shows the background.
        assert_eq!(display.pixel(110, 180), Rgb565::BLACK);
        // Outside the region is untouched.
        assert_eq!(display.pixel(109, 205), UNTOUCHED);
    }

    #[test]
    fn inverted_draw_swaps_fill_and_text() {
        let mut display = TestDisplay::new(320, 480);
        let mut b = button();
        b.draw_smooth_button(&mut display, true, Some(3), None, None)
            .unwrap();

        assert!(b.state());
        assert_eq!(display.pixel(115, 205), Rgb565::BLACK);
        assert!(display.count(Rgb565::RED) > 0);
        // No background requested: corner pixel is left alone.
        assert_eq!(display.pixel(110, 180), UNTOUCHED);
    }

    #[test]
    fn outline_width_is_remembered() {
        let mut display = TestDisplay::new(320, 480);
        let mut b = button();
        b.draw_smooth_button(&mut display, false, Some(3), None, None)
            .unwrap();
        b.draw_smooth_button(&mut display, true, None, None, None)
            .unwrap();

        assert_eq!(display.pixel(112, 205), Rgb565::WHITE);
        assert_eq!(display.pixel(113, 205), Rgb565::BLACK);
    }

    #[test]
    fn zero_outline_fills_to_the_edge() {
        let mut display = TestDisplay::new(320, 480);
        let mut b = button();
        b.draw_smooth_button(&mut display, false, Some(0), None, None)
            .unwrap();

        assert_eq!(display.pixel(110, 205), Rgb565::RED);
        assert_eq!(display.count(Rgb565::WHITE), 0);
    }

    #[test]
    fn label_is_replaced_and_drawn() {
        let mut display = TestDisplay::new(320, 480);
        let mut b = button();
        b.draw_smooth_button(&mut display, false, Some(3), None, Some("ON"))
            .unwrap();

        assert_eq!(b.label(), "ON");
        // Text colour appears somewhere inside the button.
        assert!(display.count_in(b.region(), Rgb565::BLACK) > 0);
    }
}
