// Capture side: where recognized text frames come from

pub mod text_source;
pub mod traits;

pub use text_source::TextBlockSource;
pub use traits::FrameSource;
