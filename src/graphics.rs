//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem directly. There is no buffer: pixels go to
//! the controller as they are produced, with the same clipping as
//! [`Display::draw_pixel`].
//!
//! ## Features
//!
//! - 2D graphics primitives (lines, rectangles, circles, text, etc.)
//! - Image support via embedded-graphics image modules
//! - Rotation support through MADCTL
//! - Solid and contiguous fills sent as one address window
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use st77xx::{Builder, Display, DisplayInterface};
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _c: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _d: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _d: &mut D) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_backlight(&mut self, _on: bool) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() { Ok(c) => c, Err(_) => return };
//! let mut display = Display::new(MockInterface, config);
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::RED, 2))
//!     .draw(&mut display);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
//! let _ = Text::new("Hello", Point::new(10, 100), style).draw(&mut display);
//! ```

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::Rgb565,
    primitives::{PointsIter, Rectangle},
};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.plot(point.x, point.y, color.into())?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        if self.bounding_box().intersection(area) != *area {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        let top_left = area.top_left;
        self.set_window(
            top_left.x as u16,
            top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        let count = area.size.width as usize * area.size.height as usize;
        self.write_pixels(colors.into_iter().take(count).map(Color::from))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        self.fill_area(
            area.top_left.x,
            area.top_left.y,
            bottom_right.x,
            bottom_right.y,
            color.into(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color.into())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CASET, RAMWR};
    use crate::config::{Builder, Rotation};
    use crate::testing::MockInterface;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(16, 8)
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn windows(display: &Display<MockInterface>) -> usize {
        display
            .interface
            .commands()
            .iter()
            .filter(|&&c| c == RAMWR)
            .count()
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_display(Rotation::Rotate0).size(), Size::new(16, 8));
        assert_eq!(test_display(Rotation::Rotate90).size(), Size::new(8, 16));
        assert_eq!(test_display(Rotation::Rotate180).size(), Size::new(16, 8));
        assert_eq!(test_display(Rotation::Rotate270).size(), Size::new(8, 16));
    }

    #[test]
    fn test_draw_iter_drops_off_panel_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(16, 0), Rgb565::RED),
                Pixel(Point::new(0, 8), Rgb565::RED),
                Pixel(Point::new(15, 7), Rgb565::RED),
            ])
            .unwrap();
        assert_eq!(display.interface.pixel_writes, 1);
        assert_eq!(display.interface.pixel(15, 7), Some(Color::RED.raw()));
    }

    #[test]
    fn test_fill_solid_clips_to_one_window() {
        let mut display = test_display(Rotation::Rotate0);
        let area = Rectangle::new(Point::new(-4, 6), Size::new(10, 10));
        display.fill_solid(&area, Rgb565::GREEN).unwrap();

        assert_eq!(windows(&display), 1);
        assert_eq!(display.interface.params_of(CASET), [alloc::vec![0, 0, 0, 5]]);
        assert_eq!(display.interface.lit(Color::GREEN.raw()).len(), 6 * 2);
    }

    #[test]
    fn test_fill_solid_outside_panel_sends_nothing() {
        let mut display = test_display(Rotation::Rotate0);
        let area = Rectangle::new(Point::new(20, 20), Size::new(4, 4));
        display.fill_solid(&area, Rgb565::GREEN).unwrap();
        display
            .fill_solid(&Rectangle::new(Point::zero(), Size::zero()), Rgb565::GREEN)
            .unwrap();
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_fill_contiguous_inside_panel_streams_one_window() {
        let mut display = test_display(Rotation::Rotate0);
        let area = Rectangle::new(Point::new(1, 1), Size::new(2, 2));
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display.fill_contiguous(&area, colors).unwrap();

        assert_eq!(windows(&display), 1);
        assert_eq!(display.interface.pixel(1, 1), Some(Color::RED.raw()));
        assert_eq!(display.interface.pixel(2, 1), Some(Color::GREEN.raw()));
        assert_eq!(display.interface.pixel(1, 2), Some(Color::BLUE.raw()));
        assert_eq!(display.interface.pixel(2, 2), Some(Color::WHITE.raw()));
    }

    #[test]
    fn test_fill_contiguous_partly_outside_falls_back_to_pixels() {
        let mut display = test_display(Rotation::Rotate0);
        let area = Rectangle::new(Point::new(15, 6), Size::new(2, 2));
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display.fill_contiguous(&area, colors).unwrap();

        assert_eq!(display.interface.pixel_writes, 2);
        assert_eq!(display.interface.pixel(15, 6), Some(Color::RED.raw()));
        assert_eq!(display.interface.pixel(15, 7), Some(Color::BLUE.raw()));
    }

    #[test]
    fn test_clear_fills_whole_panel() {
        let mut display = test_display(Rotation::Rotate90);
        display.clear(Rgb565::BLUE).unwrap();
        assert_eq!(display.interface.lit(Color::BLUE.raw()).len(), 16 * 8);
        assert_eq!(windows(&display), 1);
    }

    #[test]
    fn test_styled_primitive_draws_through_driver() {
        let mut display = test_display(Rotation::Rotate0);
        Line::new(Point::new(0, 0), Point::new(7, 7))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::YELLOW, 1))
            .draw(&mut display)
            .unwrap();
        let lit = display.interface.lit(Color::YELLOW.raw());
        assert_eq!(lit.len(), 8);
        assert!((0..8).all(|i| lit.contains(&(i, i))));
    }
}
