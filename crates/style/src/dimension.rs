//! Length values and their resolution against a parent size.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Px(i32),
    /// Percentage of the parent's size on the same axis.
    Percent(f64),
    #[default]
    Auto,
}

impl Dimension {
    /// Converts to pixels against `base`, the parent's size on the same axis.
    ///
    /// Percentages truncate toward zero. Returns `None` for `Auto`, which is sized
    /// from content instead.
    pub fn resolve(self, base: i32) -> Option<i32> {
        match self {
            Dimension::Px(px) => Some(px),
            Dimension::Percent(pct) => Some((pct / 100.0 * f64::from(base)) as i32),
            Dimension::Auto => None,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }
}
