pub mod flow;
pub mod sizing;

pub use flow::FlowCursor;
pub use sizing::SizeBounds;
