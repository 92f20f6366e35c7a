pub mod geometry;

pub use geometry::{Axis, Point, Rect, Size};
