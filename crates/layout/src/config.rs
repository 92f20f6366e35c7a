/// How the inherit pass treats `inherit` values on the root node, which has no
/// parent to inherit from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootInheritPolicy {
    /// Take the built-in default of the root (`image`) tag instead.
    #[default]
    Fallback,
    /// Fail with `StyleError::UnresolvedInherit`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Line box height of rendered text as a multiple of its font size.
    ///
    /// The height of an `auto`-sized text node is `floor(font-size * line_height_ratio)`,
    /// independent of which glyphs it contains.
    ///
    /// Defaults to `1.35`.
    pub line_height_ratio: f64,
    /// Resolution of `inherit` on the root node.
    ///
    /// Defaults to [`RootInheritPolicy::Fallback`].
    pub root_inherit: RootInheritPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_height_ratio: 1.35,
            root_inherit: RootInheritPolicy::default(),
        }
    }
}

impl LayoutConfig {
    pub fn line_height(&self, font_size: i32) -> i32 {
        (f64::from(font_size) * self.line_height_ratio).floor() as i32
    }
}
