//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_ADDRESS};
use crate::init::{InitCommand, ST7735S_INIT, ST77XX_INIT};
use crate::rotation::{reverses_columns, reverses_rows, swaps_axes};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero or
    /// larger than [`MAX_ADDRESS`].
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 || width > MAX_ADDRESS || height > MAX_ADDRESS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

/// Offset of the visible panel inside controller RAM
///
/// Smaller glass is often mounted off-center on a 240x320 or 132x162 RAM,
/// so every column and row address is shifted by this amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    /// Column offset
    pub x: u16,
    /// Row offset
    pub y: u16,
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Subpixel order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red-green-blue
    #[default]
    Rgb,
    /// Blue-green-red (MADCTL BGR bit set)
    Bgr,
}

/// Display configuration
///
/// Geometry is given in the panel's native orientation. Use `Builder` to
/// create a Config.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Native panel dimensions
    pub dimensions: Dimensions,
    /// Native RAM offset
    pub offset: Offset,
    /// Controller RAM size in native orientation
    pub ram_size: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Subpixel order
    pub color_order: ColorOrder,
    /// Commands replayed by [`Display::init`](crate::Display::init)
    pub init_sequence: &'static [InitCommand],
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        if swaps_axes(self.rotation) {
            Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            }
        } else {
            self.dimensions
        }
    }

    /// Get the RAM offset for the rotated address space
    ///
    /// Axes reversed by MADCTL count from the far end of controller RAM, so
    /// their offset becomes the gap on the opposite side of the panel.
    pub fn rotated_offset(&self) -> Offset {
        let mut offset = self.offset;
        if reverses_columns(self.rotation) {
            offset.x = self
                .ram_size
                .width
                .saturating_sub(self.dimensions.width.saturating_add(offset.x));
        }
        if reverses_rows(self.rotation) {
            offset.y = self
                .ram_size
                .height
                .saturating_sub(self.dimensions.height.saturating_add(offset.y));
        }
        if swaps_axes(self.rotation) {
            Offset {
                x: offset.y,
                y: offset.x,
            }
        } else {
            offset
        }
    }
}

/// Builder for constructing display configuration
///
/// Defaults describe a 240x240 ST7789-class module on 240x320 RAM: no offset,
/// no rotation, RGB order, [`ST77XX_INIT`].
///
/// # Example
///
/// ```rust,no_run
/// use st77xx::{Builder, ColorOrder, Rotation};
///
/// // 135x240 ST7789 module mounted in landscape
/// let config = match Builder::new()
///     .dimensions(135, 240)
///     .offset(52, 40)
///     .rotation(Rotation::Rotate90)
///     .color_order(ColorOrder::Rgb)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Native panel width
    width: u16,
    /// Native panel height
    height: u16,
    /// RAM offset
    offset: Offset,
    /// Controller RAM width
    ram_width: u16,
    /// Controller RAM height
    ram_height: u16,
    /// Display rotation
    rotation: Rotation,
    /// Subpixel order
    color_order: ColorOrder,
    /// Init command table
    init_sequence: &'static [InitCommand],
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            offset: Offset::default(),
            ram_width: 240,
            ram_height: 320,
            rotation: Rotation::Rotate0,
            color_order: ColorOrder::Rgb,
            init_sequence: ST77XX_INIT,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for 128x160 ST7735S panels on 132x162 RAM
    pub fn st7735s() -> Self {
        Self {
            width: 128,
            height: 160,
            ram_width: 132,
            ram_height: 162,
            init_sequence: ST7735S_INIT,
            ..Self::default()
        }
    }

    /// Set native panel dimensions
    pub fn dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the RAM offset of the visible area
    pub fn offset(mut self, x: u16, y: u16) -> Self {
        self.offset = Offset { x, y };
        self
    }

    /// Set the controller RAM size
    ///
    /// Needed to place an offset panel correctly when a rotation mirrors an
    /// axis.
    pub fn ram_size(mut self, width: u16, height: u16) -> Self {
        self.ram_width = width;
        self.ram_height = height;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set subpixel order
    pub fn color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Replace the init command table
    pub fn init_sequence(mut self, sequence: &'static [InitCommand]) -> Self {
        self.init_sequence = sequence;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if a side is zero, the RAM
    /// is larger than [`MAX_ADDRESS`], or the panel plus its offset does not
    /// fit in RAM on either axis.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = Dimensions::new(self.width, self.height)?;
        let ram_size = Dimensions::new(self.ram_width, self.ram_height)?;
        let fits = |size: u16, offset: u16, ram: u16| u32::from(size) + u32::from(offset) <= u32::from(ram);
        if !fits(self.width, self.offset.x, ram_size.width)
            || !fits(self.height, self.offset.y, ram_size.height)
        {
            return Err(BuilderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Config {
            dimensions,
            offset: self.offset,
            ram_size,
            rotation: self.rotation,
            color_order: self.color_order,
            init_sequence: self.init_sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_240_square_module() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.dimensions, Dimensions { width: 240, height: 240 });
        assert_eq!(config.offset, Offset::default());
        assert_eq!(config.ram_size, Dimensions { width: 240, height: 320 });
        assert_eq!(config.rotation, Rotation::Rotate0);
        assert_eq!(config.color_order, ColorOrder::Rgb);
        assert_eq!(config.init_sequence.len(), ST77XX_INIT.len());
    }

    #[test]
    fn test_st7735s_preset() {
        let config = Builder::st7735s().build().unwrap();
        assert_eq!(config.dimensions, Dimensions { width: 128, height: 160 });
        assert_eq!(config.ram_size, Dimensions { width: 132, height: 162 });
        assert_eq!(config.init_sequence.len(), ST7735S_INIT.len());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Builder::new().dimensions(0, 10).build(),
            Err(BuilderError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Builder::new().dimensions(10, 0).build().is_err());
    }

    #[test]
    fn test_offset_overflowing_ram_rejected() {
        assert!(Builder::new().dimensions(240, 320).offset(0, 1).build().is_err());
        assert!(Builder::new().dimensions(240, 240).offset(0, 80).build().is_ok());
        assert!(Builder::new().dimensions(240, 240).offset(1, 0).build().is_err());
        assert!(Builder::st7735s().offset(4, 2).build().is_ok());
        assert!(Builder::st7735s().offset(5, 0).build().is_err());
    }

    #[test]
    fn test_ram_size_bounded_by_address_space() {
        assert!(Builder::new().ram_size(320, 480).build().is_err());
        assert!(Builder::new().ram_size(0, 320).build().is_err());
        assert!(Builder::new()
            .ram_size(320, 240)
            .dimensions(320, 240)
            .build()
            .is_ok());
    }

    #[test]
    fn test_rotation_mirrors_and_swaps_offset() {
        let config = Builder::new()
            .dimensions(135, 240)
            .offset(52, 40)
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        assert_eq!(config.rotated_dimensions(), Dimensions { width: 240, height: 135 });
        assert_eq!(config.rotated_offset(), Offset { x: 40, y: 53 });

        let config = Builder::new()
            .dimensions(135, 240)
            .offset(52, 40)
            .rotation(Rotation::Rotate180)
            .build()
            .unwrap();
        assert_eq!(config.rotated_dimensions(), Dimensions { width: 135, height: 240 });
        assert_eq!(config.rotated_offset(), Offset { x: 53, y: 40 });

        let config = Builder::new()
            .dimensions(135, 240)
            .offset(52, 40)
            .rotation(Rotation::Rotate270)
            .build()
            .unwrap();
        assert_eq!(config.rotated_dimensions(), Dimensions { width: 240, height: 135 });
        assert_eq!(config.rotated_offset(), Offset { x: 40, y: 52 });
    }

    #[test]
    fn test_unrotated_offset_is_unchanged() {
        let config = Builder::new().dimensions(135, 240).offset(52, 40).build().unwrap();
        assert_eq!(config.rotated_offset(), Offset { x: 52, y: 40 });
    }

    #[test]
    fn test_full_ram_panel_has_no_mirrored_offset() {
        for rotation in [Rotation::Rotate90, Rotation::Rotate180, Rotation::Rotate270] {
            let config = Builder::new()
                .dimensions(240, 320)
                .rotation(rotation)
                .build()
                .unwrap();
            assert_eq!(config.rotated_offset(), Offset::default(), "{rotation:?}");
        }
    }

    #[test]
    fn test_st7735s_rotate180_mirrors_into_ram_margin() {
        let config = Builder::st7735s().rotation(Rotation::Rotate180).build().unwrap();
        assert_eq!(config.rotated_offset(), Offset { x: 4, y: 2 });
    }
}
