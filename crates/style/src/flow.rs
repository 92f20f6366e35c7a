use layoutimg_types::Axis;

/// Which axes of a parent's layout cursor a node advances once it has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    #[default]
    None,
    X,
    Y,
    XY,
}

impl Flow {
    pub fn axes(self) -> &'static [Axis] {
        match self {
            Flow::None => &[],
            Flow::X => &[Axis::X],
            Flow::Y => &[Axis::Y],
            Flow::XY => &[Axis::X, Axis::Y],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flow::None => "none",
            Flow::X => "x",
            Flow::Y => "y",
            Flow::XY => "xy",
        }
    }
}
