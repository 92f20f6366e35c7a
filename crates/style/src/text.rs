#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    /// Horizontal offset of a run of `content` pixels inside a box `available` pixels wide.
    /// Never negative: overflowing text starts at the left edge.
    pub fn padding(self, available: i32, content: i32) -> i32 {
        let slack = available.saturating_sub(content).max(0);
        match self {
            TextAlign::Left => 0,
            TextAlign::Center => slack / 2,
            TextAlign::Right => slack,
        }
    }
}
