//! Magnifying-lens geometry for reference screenshots.
//!
//! Stateless: given where the pointer is over an image and how large the
//! image is drawn, work out where the lens window sits and how the zoomed
//! copy behind it is sized and offset. All coordinates are relative to the
//! image's top-left corner.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Zoomed image placement inside the lens window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBackground {
    /// Size of the magnified image.
    pub size: Size,
    /// Offset of the magnified image relative to the lens window.
    pub offset: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    pub zoom_level: f64,
    /// Side of the square lens window.
    pub lens_size: f64,
}

impl Default for LensGeometry {
    fn default() -> Self {
        Self {
            zoom_level: 2.5,
            lens_size: 120.0,
        }
    }
}

impl LensGeometry {
    /// Lens window centred on `pointer`, pushed back inside `bounds`.
    ///
    /// When the image is smaller than the lens the window pins to the
    /// top-left corner.
    pub fn lens_window(
        &self,
        pointer: Point,
        bounds: Size,
    ) -> Rect {
        let half = self.lens_size / 2.0;
        let max_x = bounds.width - self.lens_size;
        let max_y = bounds.height - self.lens_size;

        Rect {
            x: (pointer.x - half).min(max_x).max(0.0),
            y: (pointer.y - half).min(max_y).max(0.0),
            width: self.lens_size,
            height: self.lens_size,
        }
    }

    /// Magnified image size and offset so the point under the pointer shows
    /// at the lens centre.
    pub fn background(
        &self,
        pointer: Point,
        bounds: Size,
    ) -> ZoomBackground {
        let half = self.lens_size / 2.0;
        ZoomBackground {
            size: Size {
                width: bounds.width * self.zoom_level,
                height: bounds.height * self.zoom_level,
            },
            offset: Point {
                x: -(pointer.x * self.zoom_level - half),
                y: -(pointer.y * self.zoom_level - half),
            },
        }
    }
}
