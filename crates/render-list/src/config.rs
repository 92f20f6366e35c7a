#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderListConfig {
    /// Canvas width before any expansion.
    pub initial_width: i32,
    /// Canvas height before any expansion.
    pub initial_height: i32,
    /// Whether `expand` requests grow the canvas.
    ///
    /// With expansion disabled the canvas keeps its initial size and commands
    /// outside it are still recorded.
    ///
    /// Defaults to `true`.
    pub expand: bool,
}

impl Default for RenderListConfig {
    fn default() -> Self {
        Self {
            initial_width: 0,
            initial_height: 0,
            expand: true,
        }
    }
}
