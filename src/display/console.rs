use crate::config::DisplayConfig;
use crate::display::{render, DisplaySink, Labels};
use crate::model::{ParseResult, RecognizedFrame, SinkError};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

pub struct ConsoleSink<W> {
    writer: W,
    labels: Labels,
    show_timestamps: bool,
    only_changes: bool,
    last_line: Option<String>,
}

impl<W: AsyncWrite + Unpin + Send> ConsoleSink<W> {
    pub fn new(writer: W, config: &DisplayConfig) -> Self {
        Self {
            writer,
            labels: Labels::for_language(config.language),
            show_timestamps: config.show_timestamps,
            only_changes: config.only_changes,
            last_line: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<Stdout> {
    pub fn stdout(config: &DisplayConfig) -> Self {
        Self::new(tokio::io::stdout(), config)
    }
}

#[async_trait::async_trait]
impl<W: AsyncWrite + Unpin + Send> DisplaySink for ConsoleSink<W> {
    async fn show(&mut self, frame: &RecognizedFrame, result: &ParseResult) -> Result<(), SinkError> {
        let text = render(result, &self.labels);
        if self.only_changes && self.last_line.as_deref() == Some(text.as_str()) {
            return Ok(());
        }

        let line = if self.show_timestamps {
            format!("[{}] {}\n", frame.received_at.format("%H:%M:%S%.3f"), text)
        } else {
            format!("{}\n", text)
        };
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;

        self.last_line = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::model::CanonicalUnit;
    use chrono::{TimeZone, Utc};

    fn frame(sequence: u64) -> RecognizedFrame {
        RecognizedFrame {
            sequence,
            text: String::new(),
            received_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
        }
    }

    const KG: ParseResult = ParseResult::Found { unit: CanonicalUnit::Kilogram, value: 250.0 };

    #[tokio::test]
    async fn writes_every_result_by_default() {
        let mut sink = ConsoleSink::new(Vec::new(), &DisplayConfig::default());
        sink.show(&frame(1), &KG).await.unwrap();
        sink.show(&frame(2), &KG).await.unwrap();
        sink.show(&frame(3), &ParseResult::NotFound).await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Price per kilogram: 250.00 ₽\nPrice per kilogram: 250.00 ₽\nNot found\n"
        );
    }

    #[tokio::test]
    async fn only_changes_skips_repeats() {
        let config = DisplayConfig {
            language: Language::Ru,
            only_changes: true,
            ..DisplayConfig::default()
        };
        let mut sink = ConsoleSink::new(Vec::new(), &config);
        sink.show(&frame(1), &KG).await.unwrap();
        sink.show(&frame(2), &KG).await.unwrap();
        sink.show(&frame(3), &ParseResult::NotFound).await.unwrap();
        sink.show(&frame(4), &KG).await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Цена за кг: 250.00 ₽\nНе найдено\nЦена за кг: 250.00 ₽\n"
        );
    }

    #[tokio::test]
    async fn prefixes_timestamps() {
        let config = DisplayConfig {
            show_timestamps: true,
            ..DisplayConfig::default()
        };
        let mut sink = ConsoleSink::new(Vec::new(), &config);
        sink.show(&frame(1), &ParseResult::NotFound).await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "[12:30:05.000] Not found\n");
    }
}
