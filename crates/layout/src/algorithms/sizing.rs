//! Size resolution for a single node: position overrides, min/max bounds and
//! content extents.

use layoutimg_style::defaults::UNBOUNDED;
use layoutimg_style::{AttributeEnvironment, AttributeName, Dimension, StyleError};
use layoutimg_types::geometry::{Axis, Point, Rect};

/// Resolved `[min, max]` interval for one axis of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: i32,
    pub max: i32,
}

impl SizeBounds {
    /// Resolves `min-*`/`max-*` against `base`, the parent's size on `axis`.
    pub fn resolve(env: &AttributeEnvironment, axis: Axis, base: i32) -> Result<Self, StyleError> {
        let min = env
            .dimension(AttributeName::min_size(axis))?
            .resolve(base)
            .unwrap_or(0);
        let max = env
            .dimension(AttributeName::max_size(axis))?
            .resolve(base)
            .unwrap_or(UNBOUNDED);
        if min > max {
            log::warn!(
                "<{}> {} bounds are inverted (min {} > max {}); min wins",
                env.tag(),
                axis.as_str(),
                min,
                max
            );
        }
        Ok(Self { min, max })
    }

    /// Constrains `size` to the interval. When the bounds are inverted the
    /// minimum takes precedence.
    pub fn clamp(self, size: i32) -> i32 {
        size.min(self.max).max(self.min)
    }

    pub fn contains(self, size: i32) -> bool {
        self.min <= size && size <= self.max
    }
}

/// A node's position: its own `x`/`y` when set, otherwise the incoming cursor.
pub fn resolve_position(env: &AttributeEnvironment, cursor: Point) -> Result<Point, StyleError> {
    let mut position = cursor;
    for axis in Axis::BOTH {
        if let Some(px) = env.dimension(AttributeName::offset(axis))?.resolve(0) {
            position.set(axis, px);
        }
    }
    Ok(position)
}

/// The size on `axis` before any child is visited.
///
/// A literal or percentage size is converted against `base`; an `auto` size
/// starts from `current` (zero on a fresh pass). Both are clamped, so an `auto`
/// node is never smaller than its minimum even before it has content.
pub fn presize(
    env: &AttributeEnvironment,
    axis: Axis,
    base: i32,
    current: i32,
    bounds: SizeBounds,
) -> Result<i32, StyleError> {
    let size = match env.dimension(AttributeName::size(axis))? {
        Dimension::Auto => current,
        fixed => fixed.resolve(base).unwrap_or(current),
    };
    Ok(bounds.clamp(size))
}

/// Tightest extent on `axis`, measured from `origin`, covering every rectangle.
/// Zero when there are none.
pub fn content_extent(rects: impl IntoIterator<Item = Rect>, origin: Point, axis: Axis) -> i32 {
    rects
        .into_iter()
        .map(|rect| rect.end(axis).saturating_sub(origin.get(axis)))
        .max()
        .unwrap_or(0)
        .max(0)
}
