use crate::capture::traits::FrameSource;
use crate::model::{RecognizedFrame, SourceError};
use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

// Frames are blocks of text separated by blank lines.
pub struct TextBlockSource<R> {
    lines: Lines<R>,
    next_sequence: u64,
}

impl<R: AsyncBufRead + Unpin + Send> TextBlockSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            next_sequence: 0,
        }
    }
}

impl TextBlockSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> FrameSource for TextBlockSource<R> {
    async fn next_frame(&mut self) -> Result<Option<RecognizedFrame>, SourceError> {
        let mut block: Vec<String> = Vec::new();

        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                if block.is_empty() {
                    continue;
                }
                break;
            }
            block.push(line);
        }

        if block.is_empty() {
            return Ok(None);
        }

        self.next_sequence += 1;
        Ok(Some(RecognizedFrame {
            sequence: self.next_sequence,
            text: block.join("\n"),
            received_at: Utc::now(),
        }))
    }
}
