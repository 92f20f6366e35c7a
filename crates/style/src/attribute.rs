use layoutimg_types::Axis;
use std::fmt;

/// Identifies an element attribute.
///
/// The set is closed: every name an element may carry is listed here, and the
/// per-tag default tables in [`crate::defaults`] decide which of them a given
/// tag recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeName {
    BackgroundColor,
    BackgroundImage,
    Flow,
    Font,
    FontSize,
    Height,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    RenderText,
    TextAlign,
    TextColor,
    Width,
    X,
    Y,
}

/// The shape of value an attribute accepts. Drives parsing in [`crate::parsers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `auto`, a pixel count, or a percentage of the parent.
    Size,
    /// A pixel count or a percentage of the parent.
    Bound,
    /// `auto` or a pixel count.
    Offset,
    /// A bare pixel count.
    Pixels,
    Flow,
    Flag,
    Align,
    /// `default` or a font name/path.
    Font,
    /// `none` or an opaque color/path reference.
    OptionalReference,
    /// An opaque color reference.
    Reference,
}

impl ValueKind {
    /// Human readable description used in error messages.
    pub fn expected(self) -> &'static str {
        match self {
            ValueKind::Size => "'auto', a pixel count or a percentage",
            ValueKind::Bound => "a pixel count or a percentage",
            ValueKind::Offset => "'auto' or a pixel count",
            ValueKind::Pixels => "a pixel count",
            ValueKind::Flow => "one of 'none', 'x', 'y', 'xy'",
            ValueKind::Flag => "'true' or 'false'",
            ValueKind::Align => "one of 'left', 'center', 'right'",
            ValueKind::Font => "'default' or a font name",
            ValueKind::OptionalReference => "'none' or a non-empty value",
            ValueKind::Reference => "a non-empty value",
        }
    }
}

impl AttributeName {
    pub const COUNT: usize = 16;

    pub const ALL: [AttributeName; AttributeName::COUNT] = [
        AttributeName::BackgroundColor,
        AttributeName::BackgroundImage,
        AttributeName::Flow,
        AttributeName::Font,
        AttributeName::FontSize,
        AttributeName::Height,
        AttributeName::MaxHeight,
        AttributeName::MaxWidth,
        AttributeName::MinHeight,
        AttributeName::MinWidth,
        AttributeName::RenderText,
        AttributeName::TextAlign,
        AttributeName::TextColor,
        AttributeName::Width,
        AttributeName::X,
        AttributeName::Y,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::BackgroundColor => "background-color",
            AttributeName::BackgroundImage => "background-image",
            AttributeName::Flow => "flow",
            AttributeName::Font => "font",
            AttributeName::FontSize => "font-size",
            AttributeName::Height => "height",
            AttributeName::MaxHeight => "max-height",
            AttributeName::MaxWidth => "max-width",
            AttributeName::MinHeight => "min-height",
            AttributeName::MinWidth => "min-width",
            AttributeName::RenderText => "render-text",
            AttributeName::TextAlign => "text-align",
            AttributeName::TextColor => "text-color",
            AttributeName::Width => "width",
            AttributeName::X => "x",
            AttributeName::Y => "y",
        }
    }

    pub fn parse(name: &str) -> Option<AttributeName> {
        AttributeName::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == name)
    }

    /// Position in [`AttributeName::ALL`], used as a dense table index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> ValueKind {
        match self {
            AttributeName::Width | AttributeName::Height => ValueKind::Size,
            AttributeName::MinWidth
            | AttributeName::MinHeight
            | AttributeName::MaxWidth
            | AttributeName::MaxHeight => ValueKind::Bound,
            AttributeName::X | AttributeName::Y => ValueKind::Offset,
            AttributeName::FontSize => ValueKind::Pixels,
            AttributeName::Flow => ValueKind::Flow,
            AttributeName::RenderText => ValueKind::Flag,
            AttributeName::TextAlign => ValueKind::Align,
            AttributeName::Font => ValueKind::Font,
            AttributeName::BackgroundColor | AttributeName::BackgroundImage => {
                ValueKind::OptionalReference
            }
            AttributeName::TextColor => ValueKind::Reference,
        }
    }

    /// The size attribute controlling `axis` (`width` or `height`).
    pub fn size(axis: Axis) -> AttributeName {
        match axis {
            Axis::X => AttributeName::Width,
            Axis::Y => AttributeName::Height,
        }
    }

    pub fn min_size(axis: Axis) -> AttributeName {
        match axis {
            Axis::X => AttributeName::MinWidth,
            Axis::Y => AttributeName::MinHeight,
        }
    }

    pub fn max_size(axis: Axis) -> AttributeName {
        match axis {
            Axis::X => AttributeName::MaxWidth,
            Axis::Y => AttributeName::MaxHeight,
        }
    }

    /// The position attribute for `axis` (`x` or `y`).
    pub fn offset(axis: Axis) -> AttributeName {
        match axis {
            Axis::X => AttributeName::X,
            Axis::Y => AttributeName::Y,
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
