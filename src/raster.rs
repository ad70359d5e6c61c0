//! Software rasterizer
//!
//! Geometry primitives drawn straight to the controller, one address window
//! per pixel or per straight span. Coordinates are signed and may lie
//! partly or entirely off the panel; whatever falls outside is dropped
//! pixel by pixel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st77xx::{Builder, Color, Display, DisplayInterface, Point};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! let _ = display.fill_screen(Color::BLACK);
//! let _ = display.draw_line(0, 0, 239, 239, Color::RED);
//! let _ = display.fill_circle(120, 120, 40, Color::BLUE);
//! let _ = display.fill_triangle(
//!     Point::new(10, 200),
//!     Point::new(60, 200),
//!     Point::new(35, 160),
//!     Color::GREEN,
//! );
//! ```

use crate::color::Color;
use crate::display::{Display, DisplayResult, Window};
use crate::interface::DisplayInterface;

/// Signed pixel coordinate
///
/// May be negative or beyond the panel edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column
    pub x: i16,
    /// Row
    pub y: i16,
}

impl Point {
    /// Create a point
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Point {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Fill the whole panel with one color
    pub fn fill_screen(&mut self, color: Color) -> DisplayResult<I> {
        let window = Window {
            x0: 0,
            y0: 0,
            x1: self.width() - 1,
            y1: self.height() - 1,
        };
        self.fill_window(window, color)
    }

    /// Draw one pixel; off-panel coordinates are ignored
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Color) -> DisplayResult<I> {
        self.plot(i32::from(x), i32::from(y), color)
    }

    /// Draw a line with Bresenham's algorithm, both endpoints included
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) -> DisplayResult<I> {
        let (mut x, mut y) = (i32::from(x0), i32::from(y0));
        let (x1, y1) = (i32::from(x1), i32::from(y1));
        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a horizontal line of `width` pixels starting at (x, y)
    pub fn draw_hline(&mut self, x: i16, y: i16, width: i16, color: Color) -> DisplayResult<I> {
        let (x, y) = (i32::from(x), i32::from(y));
        self.fill_area(x, y, x + i32::from(width) - 1, y, color)
    }

    /// Draw a vertical line of `height` pixels starting at (x, y)
    pub fn draw_vline(&mut self, x: i16, y: i16, height: i16, color: Color) -> DisplayResult<I> {
        let (x, y) = (i32::from(x), i32::from(y));
        self.fill_area(x, y, x, y + i32::from(height) - 1, color)
    }

    /// Draw a line of `length` pixels from (x0, y0) at `angle` radians
    ///
    /// The angle is measured clockwise from the positive x axis (screen y
    /// grows downwards). The endpoint is rounded to the nearest pixel.
    pub fn draw_dline(
        &mut self,
        x0: i16,
        y0: i16,
        length: i16,
        angle: f32,
        color: Color,
    ) -> DisplayResult<I> {
        let length = f32::from(length);
        let x1 = libm::roundf(f32::from(x0) + length * libm::cosf(angle));
        let y1 = libm::roundf(f32::from(y0) + length * libm::sinf(angle));
        self.draw_line(x0, y0, x1 as i16, y1 as i16, color)
    }

    /// Draw a rectangle outline
    ///
    /// Non-positive width or height draws nothing.
    pub fn draw_rect(&mut self, x: i16, y: i16, width: i16, height: i16, color: Color) -> DisplayResult<I> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let (x0, y0) = (i32::from(x), i32::from(y));
        let (x1, y1) = (x0 + i32::from(width) - 1, y0 + i32::from(height) - 1);
        self.fill_area(x0, y0, x1, y0, color)?;
        self.fill_area(x0, y1, x1, y1, color)?;
        self.fill_area(x0, y0, x0, y1, color)?;
        self.fill_area(x1, y0, x1, y1, color)
    }

    /// Fill a rectangle
    ///
    /// Non-positive width or height draws nothing.
    pub fn fill_rect(&mut self, x: i16, y: i16, width: i16, height: i16, color: Color) -> DisplayResult<I> {
        let (x0, y0) = (i32::from(x), i32::from(y));
        self.fill_area(
            x0,
            y0,
            x0 + i32::from(width) - 1,
            y0 + i32::from(height) - 1,
            color,
        )
    }

    /// Draw a circle outline with the midpoint algorithm
    ///
    /// Radius 0 draws the center pixel; a negative radius draws nothing.
    pub fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) -> DisplayResult<I> {
        if r < 0 {
            return Ok(());
        }
        let (cx, cy, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        if r == 0 {
            return self.plot(cx, cy, color);
        }

        self.plot(cx, cy + r, color)?;
        self.plot(cx, cy - r, color)?;
        self.plot(cx + r, cy, color)?;
        self.plot(cx - r, cy, color)?;

        for (x, y) in MidpointCircle::new(r) {
            self.plot(cx + x, cy + y, color)?;
            self.plot(cx - x, cy + y, color)?;
            self.plot(cx + x, cy - y, color)?;
            self.plot(cx - x, cy - y, color)?;
            self.plot(cx + y, cy + x, color)?;
            self.plot(cx - y, cy + x, color)?;
            self.plot(cx + y, cy - x, color)?;
            self.plot(cx - y, cy - x, color)?;
        }
        Ok(())
    }

    /// Fill a circle with vertical spans
    pub fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) -> DisplayResult<I> {
        if r < 0 {
            return Ok(());
        }
        let (cx, cy, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        self.fill_area(cx, cy - r, cx, cy + r, color)?;

        for (x, y) in MidpointCircle::new(r) {
            self.fill_area(cx + x, cy - y, cx + x, cy + y, color)?;
            self.fill_area(cx - x, cy - y, cx - x, cy + y, color)?;
            self.fill_area(cx + y, cy - x, cx + y, cy + x, color)?;
            self.fill_area(cx - y, cy - x, cx - y, cy + x, color)?;
        }
        Ok(())
    }

    /// Draw a closed polygon outline
    ///
    /// Each vertex is joined to the next and the last back to the first.
    /// A single vertex draws one pixel; no vertices draw nothing.
    pub fn draw_polygon(&mut self, vertices: &[Point], color: Color) -> DisplayResult<I> {
        let (Some(first), Some(last)) = (vertices.first(), vertices.last()) else {
            return Ok(());
        };
        for pair in vertices.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color)?;
        }
        self.draw_line(last.x, last.y, first.x, first.y, color)
    }

    /// Fill a polygon with the even-odd scanline rule
    ///
    /// Fewer than three vertices draw nothing. Any vertex count is accepted.
    /// Edges are tested with a half-open rule on y, so spans meeting at a
    /// shared vertex on a scanline may pair up unexpectedly for concave
    /// shapes.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: Color) -> DisplayResult<I> {
        if vertices.len() < 3 {
            return Ok(());
        }

        let min_y = vertices.iter().map(|p| i32::from(p.y)).min().unwrap_or(0);
        let max_y = vertices.iter().map(|p| i32::from(p.y)).max().unwrap_or(0);

        for scan_y in min_y..=max_y {
            let mut crossings = Crossings::new(vertices, scan_y);
            while let (Some(left), Some(right)) = (crossings.next(), crossings.next()) {
                self.fill_area(left, scan_y, right, scan_y, color)?;
            }
        }
        Ok(())
    }

    /// Draw a triangle outline
    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> DisplayResult<I> {
        self.draw_line(a.x, a.y, b.x, b.y, color)?;
        self.draw_line(b.x, b.y, c.x, c.y, color)?;
        self.draw_line(c.x, c.y, a.x, a.y, color)
    }

    /// Fill a triangle
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> DisplayResult<I> {
        self.fill_polygon(&[a, b, c], color)
    }

    /// Plot one pixel in wide coordinates, dropping it when off-panel
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        if x < 0 || x >= width || y < 0 || y >= height {
            return Ok(());
        }
        let (x, y) = (x as u16, y as u16);
        self.fill_window(
            Window {
                x0: x,
                y0: y,
                x1: x,
                y1: y,
            },
            color,
        )
    }

    /// Fill the inclusive rectangle (x0, y0)..=(x1, y1), clipped to the panel
    ///
    /// An inverted rectangle is empty.
    pub(crate) fn fill_area(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        let (x0, y0) = (x0.max(0), y0.max(0));
        let (x1, y1) = (x1.min(width - 1), y1.min(height - 1));
        if x0 > x1 || y0 > y1 {
            return Ok(());
        }
        self.fill_window(
            Window {
                x0: x0 as u16,
                y0: y0 as u16,
                x1: x1 as u16,
                y1: y1 as u16,
            },
            color,
        )
    }
}

/// Octant steps of the midpoint circle algorithm
///
/// Yields (x, y) for 0 < x <= y after each step, starting from (0, r).
struct MidpointCircle {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl MidpointCircle {
    fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

/// Edge crossings of one scanline in ascending x order
///
/// Each call rescans the edges for the next value, repeating it once per
/// edge that crosses there, so no crossing list has to be stored.
struct Crossings<'a> {
    vertices: &'a [Point],
    scan_y: i32,
    last: Option<i32>,
    repeats: usize,
}

impl<'a> Crossings<'a> {
    fn new(vertices: &'a [Point], scan_y: i32) -> Self {
        Self {
            vertices,
            scan_y,
            last: None,
            repeats: 0,
        }
    }

    fn edges(&self) -> impl Iterator<Item = i32> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices
            .iter()
            .zip(next)
            .filter_map(|(a, b)| edge_crossing(*a, *b, self.scan_y))
    }
}

impl Iterator for Crossings<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.repeats > 0 {
            self.repeats -= 1;
            return self.last;
        }
        let last = self.last;
        let value = self
            .edges()
            .filter(|&x| last.is_none_or(|last| x > last))
            .min()?;
        self.repeats = self.edges().filter(|&x| x == value).count() - 1;
        self.last = Some(value);
        Some(value)
    }
}

/// X where edge `a`-`b` crosses `scan_y`, if it straddles it
///
/// An edge counts when one end is strictly above the scanline and the other
/// is on or below it. Division truncates toward zero.
fn edge_crossing(a: Point, b: Point, scan_y: i32) -> Option<i32> {
    let (x0, y0) = (i32::from(a.x), i32::from(a.y));
    let (x1, y1) = (i32::from(b.x), i32::from(b.y));
    if !((y0 < scan_y && y1 >= scan_y) || (y1 < scan_y && y0 >= scan_y)) {
        return None;
    }
    // Straddling implies y0 != y1; widen so i16 extremes cannot overflow
    let dx = i64::from(scan_y - y0) * i64::from(x1 - x0) / i64::from(y1 - y0);
    Some(x0 + dx as i32)
}
