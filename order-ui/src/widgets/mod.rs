pub mod zoom_lens;

pub use zoom_lens::{LensGeometry, Point, Rect, Size, ZoomBackground};
