use layoutimg_layout::LayoutError;
use layoutimg_traits::RenderError;
use thiserror::Error;

/// Errors raised anywhere between markup and a saved image.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Unsupported markup: {0}")]
    UnsupportedMarkup(String),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State error: {0}")]
    State(String),
}
