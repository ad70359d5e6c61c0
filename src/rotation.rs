//! Rotation and MADCTL utilities
//!
//! The ST77XX rotates in hardware: the memory data access control register
//! (MADCTL) mirrors and exchanges the column/row address counters, so the
//! driver only has to pick the right bits and swap its logical width and
//! height for the quarter turns.
//!
//! Mirroring an address counter also mirrors where the visible glass sits in
//! controller RAM: on a reversed axis the RAM offset becomes
//! `ram - (size + offset)`. See [`Config::rotated_offset`](crate::Config::rotated_offset).
//!
//! ## Rotation Modes
//!
//! | Rotation  | MADCTL       | Axes    |
//! |-----------|--------------|---------|
//! | Rotate0   | 0x00         | native  |
//! | Rotate90  | MX, MV       | swapped |
//! | Rotate180 | MX, MY       | native  |
//! | Rotate270 | MY, MV       | swapped |
//!
//! ## Example
//!
//! ```
//! use st77xx::{rotation::madctl, ColorOrder, Rotation};
//!
//! assert_eq!(madctl(Rotation::Rotate0, ColorOrder::Rgb), 0x00);
//! assert_eq!(madctl(Rotation::Rotate90, ColorOrder::Rgb), 0x60);
//! assert_eq!(madctl(Rotation::Rotate180, ColorOrder::Bgr), 0xC8);
//! ```

use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};
use crate::config::{ColorOrder, Rotation};

/// MADCTL value for a rotation and subpixel order
pub fn madctl(rotation: Rotation, color_order: ColorOrder) -> u8 {
    let orientation = match rotation {
        Rotation::Rotate0 => 0,
        Rotation::Rotate90 => MADCTL_MX | MADCTL_MV,
        Rotation::Rotate180 => MADCTL_MX | MADCTL_MY,
        Rotation::Rotate270 => MADCTL_MY | MADCTL_MV,
    };
    match color_order {
        ColorOrder::Rgb => orientation,
        ColorOrder::Bgr => orientation | MADCTL_BGR,
    }
}

/// Whether the rotation exchanges rows and columns
pub fn swaps_axes(rotation: Rotation) -> bool {
    matches!(rotation, Rotation::Rotate90 | Rotation::Rotate270)
}

/// Whether the rotation sets MX, reversing the native column order
pub fn reverses_columns(rotation: Rotation) -> bool {
    madctl(rotation, ColorOrder::Rgb) & MADCTL_MX != 0
}

/// Whether the rotation sets MY, reversing the native row order
pub fn reverses_rows(rotation: Rotation) -> bool {
    madctl(rotation, ColorOrder::Rgb) & MADCTL_MY != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_madctl_rotate0() {
        assert_eq!(madctl(Rotation::Rotate0, ColorOrder::Rgb), 0x00);
    }

    #[test]
    fn test_madctl_rotate90() {
        assert_eq!(madctl(Rotation::Rotate90, ColorOrder::Rgb), 0x60);
    }

    #[test]
    fn test_madctl_rotate180() {
        assert_eq!(madctl(Rotation::Rotate180, ColorOrder::Rgb), 0xC0);
    }

    #[test]
    fn test_madctl_rotate270() {
        assert_eq!(madctl(Rotation::Rotate270, ColorOrder::Rgb), 0xA0);
    }

    #[test]
    fn test_bgr_sets_only_the_order_bit() {
        for rotation in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            assert_eq!(
                madctl(rotation, ColorOrder::Bgr),
                madctl(rotation, ColorOrder::Rgb) | MADCTL_BGR
            );
        }
    }

    #[test]
    fn test_only_quarter_turns_swap_axes() {
        assert!(!swaps_axes(Rotation::Rotate0));
        assert!(swaps_axes(Rotation::Rotate90));
        assert!(!swaps_axes(Rotation::Rotate180));
        assert!(swaps_axes(Rotation::Rotate270));
    }

    #[test]
    fn test_mirrored_axes_follow_madctl() {
        assert!(!reverses_columns(Rotation::Rotate0));
        assert!(!reverses_rows(Rotation::Rotate0));
        assert!(reverses_columns(Rotation::Rotate90));
        assert!(!reverses_rows(Rotation::Rotate90));
        assert!(reverses_columns(Rotation::Rotate180));
        assert!(reverses_rows(Rotation::Rotate180));
        assert!(!reverses_columns(Rotation::Rotate270));
        assert!(reverses_rows(Rotation::Rotate270));
    }
}
