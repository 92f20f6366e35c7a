use layoutimg_style::Flow;
use layoutimg_types::geometry::{Point, Rect};

/// The running position a container advances across its children.
///
/// Each axis is a high-water mark: a child moves the cursor to the far edge of
/// its rectangle on every axis named by its `flow`, but never backwards. A child
/// placed out of order (or explicitly positioned) therefore cannot pull later
/// siblings back over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowCursor {
    position: Point,
}

impl FlowCursor {
    pub fn new(origin: Point) -> Self {
        Self { position: origin }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Advances past a laid out child occupying `occupied`.
    pub fn advance(&mut self, flow: Flow, occupied: Rect) {
        for &axis in flow.axes() {
            let edge = occupied.end(axis);
            if edge > self.position.get(axis) {
                self.position.set(axis, edge);
            }
        }
    }
}
