use crate::model::{RecognizedFrame, SourceError};

#[async_trait::async_trait]
pub trait FrameSource: Send {
    /// Next frame of recognized text, `None` once the source is exhausted.
    async fn next_frame(&mut self) -> Result<Option<RecognizedFrame>, SourceError>;
}
